use {http::StatusCode, std::error, thiserror::*};

/// Boxed error.
pub type CapturedError = Box<dyn error::Error + Send + Sync>;

//
// FetchError
//

/// Upstream fetch error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or connection failure.
    #[error("transport: {0}")]
    Transport(#[source] CapturedError),

    /// Non-success status.
    #[error("upstream returned {status} for {url}")]
    Upstream {
        /// Status.
        status: StatusCode,

        /// URL.
        url: String,
    },

    /// Malformed JSON.
    #[error("parse: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Transport error.
    pub fn transport<ErrorT>(error: ErrorT) -> Self
    where
        ErrorT: Into<CapturedError>,
    {
        Self::Transport(error.into())
    }

    /// Status, if this is an upstream error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}
