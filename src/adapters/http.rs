use crate::domain::model::MessageResponse;
use crate::domain::ports::MessageSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Fetches `{ "message": ... }` from a sibling service over plain HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpMessageSource {
    client: Client,
}

impl HttpMessageSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl MessageSource for HttpMessageSource {
    async fn fetch_message(&self, url: &Url) -> Result<String> {
        tracing::debug!("Making downstream request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        tracing::debug!("Downstream response status: {}", response.status());

        let body: MessageResponse = response.error_for_status()?.json().await?;
        Ok(body.message)
    }
}
