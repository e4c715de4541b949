pub mod dictionary;
pub mod extract;
pub mod vocabulary;

pub use dictionary::DictionaryType;
pub use extract::{isolate_pitch, isolate_reading, isolate_word, normalize};
pub use vocabulary::VocabularyEntry;
