pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;
pub mod web;

pub use adapters::HttpMessageSource;
pub use config::{DiscoveryConfig, ParameterConfig, ServerArgs};
pub use core::aggregator::MessageAggregator;
pub use utils::error::{Result, ServiceError};
pub use web::{discovery_router, parameter_router, DiscoveryState};
