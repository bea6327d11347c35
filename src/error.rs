use std::str::Utf8Error;

use thiserror::Error;

/// Things that can go wrong inside the parser.
///
/// None of these escape the best-effort entry points. They surface through
/// [`BodyOutcome::Failed`](crate::BodyOutcome) and the `http_crate` conversion.
#[derive(Debug, Error)]
pub enum Error {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("utf8: {0}")]
    Utf8(#[from] Utf8Error),

    #[cfg(feature = "http_crate")]
    #[error("http: {0}")]
    Http(#[from] http::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
