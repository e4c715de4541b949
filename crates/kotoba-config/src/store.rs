use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the vocabulary store file
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new() -> Self {
        let path = env::var("KOTOBA_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("kotoba-vocabulary.json"));

        Self { path }
    }
}
