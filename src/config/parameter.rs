use crate::domain::model::UNDEFINED;
use std::env;

pub const MY_PARAM_1: &str = "MY_PARAM_1";
pub const MY_PARAM_2: &str = "MY_PARAM_2";

/// Values injected by the task definition, read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterConfig {
    pub my_param_1: Option<String>,
    pub my_param_2: Option<String>,
}

impl ParameterConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            my_param_1: lookup(MY_PARAM_1),
            my_param_2: lookup(MY_PARAM_2),
        }
    }

    /// Plain-text body served on `GET /`: two lines, no trailing newline.
    pub fn render(&self) -> String {
        format!(
            "{}: {}\n{}: {}",
            MY_PARAM_1,
            self.my_param_1.as_deref().unwrap_or(UNDEFINED),
            MY_PARAM_2,
            self.my_param_2.as_deref().unwrap_or(UNDEFINED),
        )
    }
}
