use crate::config::DiscoveryConfig;
use crate::core::aggregator::MessageAggregator;
use crate::core::MessageSource;
use std::sync::Arc;

/// Shared, read-only state of the discovery service.
#[derive(Clone)]
pub struct DiscoveryState {
    pub service_name: Option<Arc<str>>,
    pub aggregator: MessageAggregator<Arc<dyn MessageSource>>,
}

impl DiscoveryState {
    pub fn new(config: DiscoveryConfig, source: Arc<dyn MessageSource>) -> Self {
        Self {
            service_name: config.service_name.map(Arc::from),
            aggregator: MessageAggregator::new(
                source,
                config.service_a_url,
                config.service_b_url,
            ),
        }
    }
}
