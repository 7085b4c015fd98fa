//! Timeout-bounded option loading.

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use reqwest::Client;
use tokio_util::sync::CancellationToken;

use super::{CountrySource, OptionList, RestCountries};
use crate::config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, LoaderConfig};
use crate::error::LoadError;

/// Fetches and orders the country list.
///
/// Cheap to clone (uses `Arc` internally), so it can be moved into a spawned
/// task while the form keeps handling events.
///
/// # Example
///
/// ```ignore
/// let loader = OptionLoader::builder()
///     .endpoint("https://restcountries.com")
///     .timeout(Duration::from_secs(5))
///     .build()?;
///
/// let countries = loader.load().await?;
/// ```
#[derive(Clone)]
pub struct OptionLoader {
    inner: Arc<OptionLoaderInner>,
}

struct OptionLoaderInner {
    source: Arc<dyn CountrySource>,
    timeout: Duration,
}

impl OptionLoader {
    /// Creates a builder for a loader backed by the REST Countries service.
    pub fn builder() -> OptionLoaderBuilder {
        OptionLoaderBuilder::new()
    }

    /// Creates a loader from configuration.
    pub fn from_config(config: &LoaderConfig) -> Result<Self, LoadError> {
        Self::builder()
            .endpoint(config.endpoint.clone())
            .timeout(config.timeout())
            .build()
    }

    /// Creates a loader over any source, with the given timeout.
    pub fn with_source<S: CountrySource + 'static>(source: S, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(OptionLoaderInner {
                source: Arc::new(source),
                timeout,
            }),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// Fetch and sort the option list.
    pub async fn load(&self) -> Result<OptionList, LoadError> {
        self.load_with_cancel(CancellationToken::new()).await
    }

    /// Fetch and sort the option list, giving up when `cancel` fires.
    ///
    /// The in-flight request is dropped on timeout or cancellation.
    pub async fn load_with_cancel(
        &self,
        cancel: CancellationToken,
    ) -> Result<OptionList, LoadError> {
        let timeout = self.inner.timeout;

        let names = tokio::select! {
            _ = cancel.cancelled() => {
                warn!("Option load cancelled");
                return Err(LoadError::Cancelled);
            }
            _ = tokio::time::sleep(timeout) => {
                warn!("Option load timed out after {timeout:?}");
                return Err(LoadError::Timeout(timeout));
            }
            result = self.inner.source.fetch_countries() => result?,
        };

        info!("Loaded {} options", names.len());
        Ok(OptionList::sorted(names))
    }
}

impl std::fmt::Debug for OptionLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionLoader")
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for an [`OptionLoader`] backed by [`RestCountries`].
pub struct OptionLoaderBuilder {
    endpoint: String,
    timeout: Duration,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl OptionLoaderBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the service base URL.
    ///
    /// Defaults to [`DEFAULT_ENDPOINT`].
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the overall time budget for a load.
    ///
    /// Defaults to five seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<OptionLoader, LoadError> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        let source = RestCountries::new(http_client, &self.endpoint)?;
        Ok(OptionLoader::with_source(source, self.timeout))
    }
}

impl Default for OptionLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
