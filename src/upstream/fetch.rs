use super::error::*;

use {
    bytes::Bytes,
    std::{result::Result, time::*},
};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "api_key";

/// Default user agent for [HttpFetch].
pub const DEFAULT_USER_AGENT: &str = concat!("metro-cache/", env!("CARGO_PKG_VERSION"));

/// Default request timeout for [HttpFetch].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

//
// Fetch
//

/// Upstream fetch primitive.
///
/// A single GET with the API key attached as the [API_KEY_HEADER] header. Non-success statuses
/// must be reported as [FetchError::Upstream]. No retries.
///
/// Implementations should ensure that cloning is cheap and clones always refer to the same shared
/// state.
#[allow(async_fn_in_trait)]
pub trait Fetch
where
    Self: 'static + Clone + Send + Sync,
{
    /// Fetch the body at a URL.
    ///
    /// Note that this is an `async` function written in longer form in order to include the `Send`
    /// constraint. Implementations can simply use `async fn fetch`.
    fn fetch(&self, url: &str, api_key: &str) -> impl Future<Output = Result<Bytes, FetchError>> + Send;
}

//
// HttpFetch
//

/// [Fetch] implementation over a pooled [reqwest::Client].
#[derive(Clone, Debug)]
pub struct HttpFetch {
    client: reqwest::Client,
}

impl HttpFetch {
    /// Constructor.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Constructor with [DEFAULT_USER_AGENT] and a request timeout.
    pub fn new_with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(FetchError::transport)?;
        Ok(Self::new(client))
    }
}

impl Fetch for HttpFetch {
    async fn fetch(&self, url: &str, api_key: &str) -> Result<Bytes, FetchError> {
        tracing::debug!("GET {}", url);

        // The response owns the connection; it is released when dropped on any return path
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Upstream {
                status,
                url: url.into(),
            });
        }

        response.bytes().await.map_err(FetchError::transport)
    }
}
