use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

use crate::application::ports::{BlobFetcher, FetchedBlob, RetrievalError};

/// Unauthenticated HTTP(S) GET. No timeout or retry is configured.
pub struct HttpBlobFetcher {
    client: Client,
}

impl HttpBlobFetcher {
    pub fn new(user_agent: Option<&str>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent.to_string());
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Use a caller-built client, e.g. one carrying default authorization headers.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn parse_locator(url: &str) -> Result<Url, RetrievalError> {
        let parsed =
            Url::parse(url).map_err(|_| RetrievalError::UnsupportedLocator(url.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            _ => Err(RetrievalError::UnsupportedLocator(url.to_string())),
        }
    }
}

#[async_trait]
impl BlobFetcher for HttpBlobFetcher {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<FetchedBlob, RetrievalError> {
        let locator = Self::parse_locator(url)?;

        let response = self
            .client
            .get(locator)
            .send()
            .await
            .map_err(|e| RetrievalError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Remote attachment request rejected");
            return Err(RetrievalError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let data = response
            .bytes()
            .await
            .map_err(|e| RetrievalError::Transport {
                url: url.to_string(),
                reason: format!("failed to read body: {e}"),
            })?;

        tracing::debug!(size_bytes = data.len(), ?content_type, "Remote attachment fetched");

        Ok(FetchedBlob {
            data: data.to_vec(),
            content_type,
        })
    }
}
