use crate::core::{AggregatedResponse, MessageSource, Result};
use url::Url;

/// Collects the messages of service A and service B into one response.
#[derive(Clone)]
pub struct MessageAggregator<S: MessageSource> {
    source: S,
    service_a_url: Url,
    service_b_url: Url,
}

impl<S: MessageSource> MessageAggregator<S> {
    pub fn new(source: S, service_a_url: Url, service_b_url: Url) -> Self {
        Self {
            source,
            service_a_url,
            service_b_url,
        }
    }

    /// A is awaited before B is issued; the first failure is returned as-is.
    pub async fn aggregate(&self) -> Result<AggregatedResponse> {
        let service_a = self.source.fetch_message(&self.service_a_url).await?;
        let service_b = self.source.fetch_message(&self.service_b_url).await?;

        Ok(AggregatedResponse {
            service_a,
            service_b,
        })
    }
}
