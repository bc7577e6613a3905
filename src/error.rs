use super::upstream::*;

use thiserror::*;

//
// Error
//

/// Cache read error.
#[derive(Debug, Error)]
pub enum Error {
    /// Upstream fetch failed.
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),

    /// Lookup miss.
    #[error("not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Not found.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
