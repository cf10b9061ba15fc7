use crate::config::LoaderConfig;
use crate::errors::{ConfigError, FragmentFetchError};
use crate::models::FragmentRequest;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub trait FragmentTransport: Send + Sync + 'static {
    fn fetch(
        &self,
        request: &FragmentRequest,
    ) -> impl Future<Output = Result<String, FragmentFetchError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn with_timeout(base_url: Url, timeout: Option<Duration>) -> Result<Self, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn from_config(config: &LoaderConfig) -> Result<Self, ConfigError> {
        Self::with_timeout(config.base_url.clone(), config.request_timeout)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn url_for(&self, request: &FragmentRequest) -> String {
        format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            request.path()
        )
    }
}

impl FragmentTransport for HttpTransport {
    async fn fetch(&self, request: &FragmentRequest) -> Result<String, FragmentFetchError> {
        let url = self.url_for(request);
        let response = self
            .client
            .get(&url)
            .query(&request.query())
            .send()
            .await
            .map_err(|source| FragmentFetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!(seq = request.seq, %status, "rendering fragment with non-success status");
        }

        response
            .text()
            .await
            .map_err(|source| FragmentFetchError::Body { url, source })
    }
}
