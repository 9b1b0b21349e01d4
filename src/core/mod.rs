pub mod aggregator;

pub use crate::domain::model::{AggregatedResponse, MessageResponse};
pub use crate::domain::ports::MessageSource;
pub use crate::utils::error::Result;
