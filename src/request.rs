use serde::Serialize;
use serde_json::{Map, Value};

use crate::body::parse_body;
use crate::header::{parse_header, Headers};
use crate::parser::{is_blank, split_lines, split_request_line, split_target};
use crate::query::{extract_query, Query};

/// A request read from raw http 1.1 text.
///
/// Serializes to `{"method", "path", "headers", "body", "query"}` with `null`
/// for an absent body or query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedRequest {
    /// First token of the request line.
    pub method: String,
    /// Second token of the request line, up to any `?`.
    pub path: String,
    pub headers: Headers,
    /// `None` without body text. An empty json string if the text isn't json.
    pub body: Option<Value>,
    /// `None` if the request target has no `?`.
    pub query: Option<Query>,
}

/// Parse raw request text. `None` and `""` give an empty request.
///
/// ```
/// let req = reqtext::parse_request(Some("GET /a?b=c HTTP/1.1\nHost: x.test\n"));
///
/// assert_eq!(req.method, "GET");
/// assert_eq!(req.path, "/a");
/// assert_eq!(req.header("Host"), Some("x.test"));
/// assert_eq!(req.query_param("b"), Some("c"));
/// assert!(req.body.is_none());
///
/// assert_eq!(reqtext::parse_request(None), reqtext::ParsedRequest::default());
/// ```
pub fn parse_request(raw: Option<&str>) -> ParsedRequest {
    match raw {
        Some(s) if !s.is_empty() => ParsedRequest::parse(s),
        _ => {
            trace!("Empty request input");
            ParsedRequest::default()
        }
    }
}

impl ParsedRequest {
    /// Parse raw request text.
    ///
    /// This never fails. Anything that can't be understood degrades to an
    /// empty string, a skipped header or a sentinel body.
    pub fn parse(raw: &str) -> ParsedRequest {
        let lines = split_lines(raw.trim());

        let line = lines.first().copied().unwrap_or("");
        let (method, target) = split_request_line(line);
        let (path, query_string) = split_target(target);
        trace!("Request line: {:?} {:?}", method, target);

        let mut headers = Headers::new();

        // Header block runs until the first blank line.
        let mut i = 1;
        while i < lines.len() && !is_blank(lines[i]) {
            parse_header(lines[i], &mut headers);
            i += 1;
        }

        let body = if i < lines.len() {
            parse_body(&lines[i + 1..].join("\n"))
        } else {
            trace!("No blank line, no body");
            None
        };

        let query = query_string.and_then(|_| extract_query(target));

        ParsedRequest {
            method: method.to_string(),
            path: path.to_string(),
            headers,
            body,
            query,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Header value by exact (case sensitive) name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// Decoded query value by exact (case sensitive) name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.as_ref()?.get(name).map(String::as_str)
    }

    /// The request as a json object, same shape as the serialized form.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("method".into(), Value::from(self.method.as_str()));
        obj.insert("path".into(), Value::from(self.path.as_str()));
        obj.insert("headers".into(), string_map(&self.headers));
        obj.insert("body".into(), self.body.clone().unwrap_or(Value::Null));
        obj.insert(
            "query".into(),
            self.query.as_ref().map(string_map).unwrap_or(Value::Null),
        );
        Value::Object(obj)
    }
}

fn string_map(map: &Headers) -> Value {
    Value::Object(
        map.iter()
            .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
            .collect(),
    )
}

#[cfg(feature = "http_crate")]
impl TryFrom<&ParsedRequest> for http::Request<Option<Value>> {
    type Error = crate::Error;

    fn try_from(req: &ParsedRequest) -> crate::Result<Self> {
        let mut uri = req.path.clone();

        if let Some(query) = req.query.as_ref().filter(|q| !q.is_empty()) {
            uri.push('?');
            uri.push_str(&crate::query::encode_query(query));
        }

        let mut builder = http::Request::builder()
            .method(req.method.as_str())
            .uri(uri);

        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        Ok(builder.body(req.body.clone())?)
    }
}
