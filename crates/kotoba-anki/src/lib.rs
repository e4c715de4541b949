pub mod client;
pub mod export;
pub mod template;

pub use client::AnkiConnectClient;
pub use export::records_to_tsv;
pub use template::CardTemplate;
