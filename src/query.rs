use std::collections::HashMap;

use percent_encoding::percent_decode_str;

use crate::parser::split_target;
use crate::Result;

/// Query parameter name to decoded value. The last occurrence of a name wins.
pub type Query = HashMap<String, String>;

/// Extract the query parameters of a request target such as `/a/b?x=1&y=2`.
///
/// Gives `None` when there is no `?`. The query string is split on `&`, and
/// each parameter on its first `=`. Names are kept verbatim, values are
/// percent-decoded.
///
/// A parameter without `=` gets an empty value. Empty parameters (as in
/// `a=1&&b=2`) are skipped. A value that doesn't decode to utf-8 is kept
/// undecoded.
///
/// ```
/// let q = reqtext::extract_query("/api/data/123?someValue=example").unwrap();
/// assert_eq!(q["someValue"], "example");
///
/// assert!(reqtext::extract_query("/no/query/here").is_none());
/// ```
pub fn extract_query(target: &str) -> Option<Query> {
    let (_, query) = split_target(target);
    query.map(parse_query_string)
}

fn parse_query_string(src: &str) -> Query {
    let mut query = Query::new();

    for param in src.split('&') {
        if param.is_empty() {
            continue;
        }

        let (name, raw) = param.split_once('=').unwrap_or((param, ""));

        let value = match decode_component(raw) {
            Ok(v) => v,
            Err(e) => {
                debug!("Keep undecoded query value for {:?}: {}", name, e);
                raw.to_string()
            }
        };

        trace!("Query param: {} = {}", name, value);
        query.insert(name.to_string(), value);
    }

    query
}

fn decode_component(raw: &str) -> Result<String> {
    let decoded = percent_decode_str(raw).decode_utf8()?;
    Ok(decoded.into_owned())
}

#[cfg(feature = "http_crate")]
pub(crate) use encode::encode_query;

#[cfg(feature = "http_crate")]
mod encode {
    use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

    use super::Query;

    // Characters left alone by javascript's encodeURIComponent.
    const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
        .remove(b'-')
        .remove(b'_')
        .remove(b'.')
        .remove(b'!')
        .remove(b'~')
        .remove(b'*')
        .remove(b'\'')
        .remove(b'(')
        .remove(b')');

    // Names were never decoded, so any escapes in them are already in place.
    const NAME: &AsciiSet = &COMPONENT.remove(b'%');

    /// Render a query map as a query string, sorted by name.
    pub(crate) fn encode_query(query: &Query) -> String {
        let mut params: Vec<_> = query.iter().collect();
        params.sort();

        let mut out = String::new();

        for (name, value) in params {
            if !out.is_empty() {
                out.push('&');
            }
            out.extend(utf8_percent_encode(name, NAME));
            out.push('=');
            out.extend(utf8_percent_encode(value, COMPONENT));
        }

        out
    }

}
