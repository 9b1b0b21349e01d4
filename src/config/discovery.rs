use crate::utils::error::{Result, ServiceError};
use std::env;
use url::Url;

pub const SERVICE_NAME: &str = "SERVICE_NAME";
pub const DISCOVERY_NAMESPACE: &str = "DISCOVERY_NAMESPACE";
pub const SERVICE_A_URL: &str = "SERVICE_A_URL";
pub const SERVICE_B_URL: &str = "SERVICE_B_URL";

pub const DEFAULT_NAMESPACE: &str = "ecs_service_discovery";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    pub service_name: Option<String>,
    pub service_a_url: Url,
    pub service_b_url: Url,
}

impl DiscoveryConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace =
            lookup(DISCOVERY_NAMESPACE).unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        let service_a_url = match lookup(SERVICE_A_URL) {
            Some(raw) => parse_url(SERVICE_A_URL, &raw)?,
            None => discovery_url("myservice-a", &namespace)?,
        };
        let service_b_url = match lookup(SERVICE_B_URL) {
            Some(raw) => parse_url(SERVICE_B_URL, &raw)?,
            None => discovery_url("myservice-b", &namespace)?,
        };

        Ok(Self {
            service_name: lookup(SERVICE_NAME),
            service_a_url,
            service_b_url,
        })
    }
}

/// `http://<service>.<namespace>.local/message`, the name Cloud Map registers for a sibling task.
pub fn discovery_url(service: &str, namespace: &str) -> Result<Url> {
    parse_url(
        DISCOVERY_NAMESPACE,
        &format!("http://{}.{}.local/message", service, namespace),
    )
}

fn parse_url(field: &str, raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| {
        ServiceError::config(format!("{} is not a valid URL ({}): {}", field, raw, e))
    })
}
