use thiserror::Error;

/// Why the robots check refused access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyDenial {
    #[error("robots.txt disallows all agents")]
    Disallowed,
    #[error("robots.txt returned HTTP {0}")]
    Status(u16),
    #[error("robots.txt unreachable: {0}")]
    Unreachable(String),
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("access denied: {0}")]
    PolicyDenied(#[from] PolicyDenial),

    #[error("failed to retrieve {url}: HTTP {status}")]
    FetchFailed { url: String, status: u16 },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("could not extract table: {0}")]
    TransformFailed(String),
}
