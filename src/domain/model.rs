use serde::{Deserialize, Serialize};

/// Substituted for environment values that are not set.
pub const UNDEFINED: &str = "undefined";

/// Body of `GET /message`, and the shape expected from each sibling service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn for_service(service_name: Option<&str>) -> Self {
        Self {
            message: format!("THIS IS {}!!", service_name.unwrap_or(UNDEFINED)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResponse {
    pub service_a: String,
    pub service_b: String,
}
