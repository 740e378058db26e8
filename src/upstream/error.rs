use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog returned status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("catalog response is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}
