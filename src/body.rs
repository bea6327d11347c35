use serde::Deserialize;
use serde_json::Value;

use crate::parser::is_blank;
use crate::{Error, Result};

/// What became of the body text.
#[derive(Debug)]
pub enum BodyOutcome {
    /// No body text, or only whitespace.
    Empty,
    /// The body text decoded as json.
    Decoded(Value),
    /// There is body text, but it isn't json.
    Failed(Error),
}

impl BodyOutcome {
    /// Collapse into the body value of a [`ParsedRequest`](crate::ParsedRequest).
    ///
    /// `Empty` becomes `None` and `Decoded` the value itself. `Failed` becomes
    /// an empty json string, to tell "there was a body, but it didn't parse"
    /// apart from "there was no body".
    pub fn into_value(self) -> Option<Value> {
        match self {
            BodyOutcome::Empty => None,
            BodyOutcome::Decoded(v) => Some(v),
            BodyOutcome::Failed(_) => Some(Value::String(String::new())),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BodyOutcome::Empty)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, BodyOutcome::Failed(_))
    }
}

/// Interpret body text as json, keeping the reason when it fails.
pub fn analyze_body(text: &str) -> BodyOutcome {
    if is_blank(text) {
        trace!("Body is empty");
        return BodyOutcome::Empty;
    }

    match decode_json(text) {
        Ok(v) => {
            trace!("Body decoded as json");
            BodyOutcome::Decoded(v)
        }
        Err(e) => {
            debug!("Body is not json: {}", e);
            BodyOutcome::Failed(e)
        }
    }
}

/// Interpret body text as json.
///
/// Gives `None` for blank text and an empty json string when the text is not
/// json. See [`BodyOutcome::into_value`].
///
/// ```
/// use reqtext::{parse_body, Value};
///
/// assert_eq!(parse_body(""), None);
/// assert_eq!(parse_body("not-json"), Some(Value::String("".into())));
/// ```
pub fn parse_body(text: &str) -> Option<Value> {
    analyze_body(text).into_value()
}

// No nesting limit and numbers kept as written, so anything that is json
// decodes. Deep nesting grows the stack on the heap instead of overflowing.
fn decode_json(text: &str) -> Result<Value> {
    let mut json = serde_json::Deserializer::from_str(text);
    json.disable_recursion_limit();

    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut json))?;

    // Trailing non-whitespace is not json.
    json.end()?;

    Ok(value)
}
