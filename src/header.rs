use std::collections::HashMap;

use crate::parser::is_blank;

/// Header name to value. Names are case sensitive and the last value wins.
pub type Headers = HashMap<String, String>;

const SEPARATOR: &str = ": ";

/// Parse one header line and merge it into `headers`.
///
/// Name and value are split at the first `": "` and trimmed. A previous value
/// for the same name is overwritten.
///
/// Blank lines leave `headers` untouched. So do lines without a `": "`
/// separator; they are logged and skipped. A line like `": v"` does have the
/// separator and is stored under the empty name.
///
/// ```
/// let mut headers = reqtext::Headers::new();
///
/// reqtext::parse_header("Host: www.example.com", &mut headers);
/// reqtext::parse_header("", &mut headers);
///
/// assert_eq!(headers.len(), 1);
/// assert_eq!(headers["Host"], "www.example.com");
/// ```
pub fn parse_header(line: &str, headers: &mut Headers) {
    if is_blank(line) {
        return;
    }

    let Some((name, value)) = line.split_once(SEPARATOR) else {
        debug!("Skip header line without separator: {:?}", line);
        return;
    };

    let name = name.trim();
    let value = value.trim();
    trace!("Header: {}: {}", name, value);

    headers.insert(name.to_string(), value.to_string());
}
