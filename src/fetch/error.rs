use thiserror::Error;

/// Errors that can occur while loading recipes.
///
/// All variants are absorbed at the loader boundary; they exist so the
/// diagnostic log can say what actually went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection or transport failure
    #[error("request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON shape
    #[error("malformed payload: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}
