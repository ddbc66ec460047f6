use thiserror::Error;

/// Failures while turning a response body into a [`crate::protocol::ProcessOutcome`].
///
/// Both variants surface to the user through the same generic path as a
/// transport failure; the distinction only matters for logs.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response envelope is missing required field `{0}`")]
    MissingField(&'static str),
}
