/// Split request text into lines on LF. A CR ending a line is dropped, so
/// CRLF and bare LF framing read the same.
pub(crate) fn split_lines(src: &str) -> Vec<&str> {
    src.split('\n').map(strip_cr).collect()
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Method and request target of a request line.
///
/// Splits on single spaces, which means two consecutive spaces produce an
/// empty target. A missing target is the empty string. The version token is
/// not looked at.
pub(crate) fn split_request_line(line: &str) -> (&str, &str) {
    let mut tokens = line.split(' ');
    let method = tokens.next().unwrap_or("");
    let target = tokens.next().unwrap_or("");
    (method, target)
}

/// Split a request target at the first `?` into path and query string.
pub(crate) fn split_target(target: &str) -> (&str, Option<&str>) {
    match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    }
}
