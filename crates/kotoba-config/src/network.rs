use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// HTTP timeout for dictionary page fetches, in seconds
    pub timeout_seconds: u64,
    /// User agent sent to the dictionary site
    pub user_agent: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let timeout_seconds = env::var("KOTOBA_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let user_agent = env::var("KOTOBA_USER_AGENT")
            .unwrap_or_else(|_| format!("kotoba/{}", env!("CARGO_PKG_VERSION")));

        Self {
            timeout_seconds,
            user_agent,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
