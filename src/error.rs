use thiserror::Error;

/// Failures of a single pull. `Display` is the short notice shown to the user;
/// the underlying cause (if any) is kept as the error source for logging.
#[derive(Debug, Error)]
pub enum PullError {
    #[error("No input entered.")]
    MissingInput,

    #[error("Invalid LeetCode URL. Unable to extract title slug.")]
    InvalidUrl { input: String },

    #[error("Failed to fetch problem data.")]
    Fetch(#[from] FetchFailure),

    #[error("Malformed topic tag at position {index}: missing slug.")]
    MalformedTag { index: usize },
}

/// Every way the fetch can go wrong. Collapsed into `PullError::Fetch` for the user.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),
}
