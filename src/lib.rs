//! Best-effort parser of raw http 1.1 request text.
//!
//! Turns a request like
//!
//! ```text
//! POST /api/data?lang=en HTTP/1.1
//! Host: www.example.com
//! Content-Type: application/json
//!
//! {"key1": "value1"}
//! ```
//!
//! into a [`ParsedRequest`] with method, path, headers, query and a json body.
//! Meant for test fixtures, mock servers and the like, not for talking to the
//! network. There is no chunked encoding, no streaming and no validation of
//! methods or versions.
//!
//! Parsing never fails. Malformed header lines are skipped, a body that isn't
//! json becomes an empty json string, and no input at all gives
//! [`ParsedRequest::default()`].
//!
//! ```
//! use reqtext::{parse_request, Value};
//!
//! let raw = "POST /api/data?lang=en HTTP/1.1\n\
//!            Host: www.example.com\n\
//!            \n\
//!            {\"key1\": \"value1\"}";
//!
//! let req = parse_request(Some(raw));
//!
//! assert_eq!(req.method, "POST");
//! assert_eq!(req.path, "/api/data");
//! assert_eq!(req.headers["Host"], "www.example.com");
//! assert_eq!(req.query_param("lang"), Some("en"));
//! assert_eq!(req.body.unwrap()["key1"], Value::from("value1"));
//! ```
//!
//! # Features
//!
//! * `http_crate` converts a [`ParsedRequest`] into an `http::Request`.

#[macro_use]
extern crate log;

mod error;
pub use error::Error;
pub(crate) use error::Result;

mod parser;

mod header;
pub use header::{parse_header, Headers};

mod body;
pub use body::{analyze_body, parse_body, BodyOutcome};

mod query;
pub use query::{extract_query, Query};

mod request;
pub use request::{parse_request, ParsedRequest};

// Re-export, body values are json.
pub use serde_json::Value;

#[cfg(feature = "http_crate")]
pub use http;

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    const RAW_GET: &str = "
GET / HTTP/1.1
Host: www.example.com
";

    const RAW_GET_COMPLEX: &str = "
GET /api/data/123?someValue=example HTTP/1.1
Host: www.example.com
Authorization: Bearer your_access_token
";

    const RAW_POST: &str = r#"
POST /api/data HTTP/1.1
Host: www.example.com
Content-Type: application/json
Content-Length: 36

{"key1": "value1", "key2": "value2"}
"#;

    fn headers(pairs: &[(&str, &str)]) -> Headers {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn scenario_simple_get() {
        let req = parse_request(Some("GET / HTTP/1.1\nHost: www.example.com\n"));

        let expected = ParsedRequest {
            method: "GET".into(),
            path: "/".into(),
            headers: headers(&[("Host", "www.example.com")]),
            body: None,
            query: None,
        };

        assert_eq!(req, expected);
        assert_eq!(parse_request(Some(RAW_GET)), expected);
    }

    #[test]
    fn scenario_get_with_query() {
        let req = parse_request(Some(RAW_GET_COMPLEX));

        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/api/data/123");
        assert_eq!(
            req.headers,
            headers(&[
                ("Host", "www.example.com"),
                ("Authorization", "Bearer your_access_token"),
            ])
        );
        assert_eq!(req.body, None);

        let query: Query = [("someValue".to_string(), "example".to_string())]
            .into_iter()
            .collect();
        assert_eq!(req.query, Some(query));
    }

    #[test]
    fn scenario_post_with_json_body() {
        let req = parse_request(Some(RAW_POST));

        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/api/data");
        assert_eq!(
            req.headers,
            headers(&[
                ("Host", "www.example.com"),
                ("Content-Type", "application/json"),
                ("Content-Length", "36"),
            ])
        );
        assert_eq!(req.body, Some(json!({"key1": "value1", "key2": "value2"})));
        assert_eq!(req.query, None);
    }

    #[test]
    fn scenario_body_not_json() {
        assert_eq!(parse_body("not-json"), Some(Value::String(String::new())));
    }

    #[test]
    fn scenario_path_without_query() {
        assert_eq!(extract_query("/no/query/here"), None);
    }

    #[test]
    fn empty_inputs_give_empty_request() {
        for raw in [None, Some("")] {
            let req = parse_request(raw);
            assert_eq!(req.method, "");
            assert_eq!(req.path, "");
            assert!(req.headers.is_empty());
            assert!(req.body.is_none());
            assert!(req.query.is_none());
        }
    }

    #[test]
    fn built_request_line_recovers_parts() {
        for (method, path, k, v) in [
            ("GET", "/", "a", "1"),
            ("PATCH", "/users/42", "name", "martin"),
            ("OPTIONS", "/x/y/z", "q", "rust"),
        ] {
            let raw = format!("{} {}?{}={} HTTP/1.1\nHost: h.test\n", method, path, k, v);
            let req = parse_request(Some(&raw));

            assert_eq!(req.method, method);
            assert_eq!(req.path, path);
            assert_eq!(req.query_param(k), Some(v));
            assert_eq!(req.query.as_ref().map(|q| q.len()), Some(1));
            assert_eq!(req.header("Host"), Some("h.test"));
        }
    }

    #[test]
    fn parsing_twice_is_equal() {
        for raw in [RAW_GET, RAW_GET_COMPLEX, RAW_POST, "", "garbage", "A B C\n\nnope"] {
            assert_eq!(parse_request(Some(raw)), parse_request(Some(raw)));
        }
    }

    #[test]
    fn sentinel_and_tagged_body_agree() {
        for text in ["", "  ", "{}", "[1]", "not-json", "{\"a\":"] {
            let tagged = analyze_body(text);
            let failed = tagged.is_failed();
            let value = tagged.into_value();

            assert_eq!(value, parse_body(text));
            if failed {
                assert_eq!(value, Some(Value::String(String::new())));
            }
        }
    }

    #[test]
    fn serializes_like_record() {
        let req = parse_request(Some(RAW_POST));
        let s = serde_json::to_string(&req).unwrap();
        let back: Value = serde_json::from_str(&s).unwrap();

        assert_eq!(back["method"], "POST");
        assert_eq!(back["path"], "/api/data");
        assert_eq!(back["headers"]["Content-Length"], "36");
        assert_eq!(back["body"], json!({"key1": "value1", "key2": "value2"}));
        assert_eq!(back["query"], Value::Null);
    }
}
