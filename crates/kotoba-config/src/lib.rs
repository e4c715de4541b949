use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::network::NetworkConfig;
use self::store::StoreConfig;

pub mod anki;
pub mod network;
pub mod store;

#[derive(Default, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub store: StoreConfig,
    pub anki: AnkiConfig,
}

impl Config {
    /// Build the whole configuration from environment variables, with
    /// defaults for anything unset.
    pub fn new() -> Self {
        Config {
            network: NetworkConfig::new(),
            store: StoreConfig::new(),
            anki: AnkiConfig::new(),
        }
    }
}
