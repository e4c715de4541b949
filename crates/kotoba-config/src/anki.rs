use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct AnkiConfig {
    /// AnkiConnect URL
    pub url: String,
    /// Default deck name
    pub deck: String,
    /// Default model name
    pub model: String,
}

impl AnkiConfig {
    pub fn new() -> Self {
        let url =
            env::var("KOTOBA_ANKI_URL").unwrap_or_else(|_| "http://localhost:8765".to_string());
        let deck = env::var("KOTOBA_ANKI_DECK").unwrap_or_else(|_| "Japanese".to_string());
        let model = env::var("KOTOBA_ANKI_MODEL").unwrap_or_else(|_| "Basic".to_string());

        Self { url, deck, model }
    }
}
