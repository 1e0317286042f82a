use std::env;

use serde::{Deserialize, Serialize};

fn default_idle_seconds() -> u64 {
    600
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    /// Sessions idle longer than this lose their pagination state.
    #[serde(default = "default_idle_seconds")]
    pub idle_timeout_seconds: u64,
}

impl SessionConfig {
    pub fn new() -> Self {
        let idle_timeout_seconds = env::var("SESSION_IDLE_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_idle_seconds);

        Self { idle_timeout_seconds }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_seconds: default_idle_seconds(),
        }
    }
}
