pub mod record;
pub mod store;

pub use record::VocabularyRecord;
pub use store::{JsonFileStore, MemoryStore, StoreError, VocabularyStore};
