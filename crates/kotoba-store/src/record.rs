use kotoba_core::{DictionaryType, VocabularyEntry};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored vocabulary row: the extracted entry plus the fields the user
/// supplies when saving it (dictionary type, notes, reading context).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyRecord {
    pub id: Uuid,
    pub word: String,
    pub dictionary_type: DictionaryType,
    pub reading: String,
    pub definition: String,
    pub pitch: String,
    pub notes: String,
    pub context: String,
}

impl VocabularyRecord {
    pub fn new(
        entry: &VocabularyEntry,
        dictionary_type: DictionaryType,
        notes: String,
        context: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            word: entry.word().to_string(),
            dictionary_type,
            reading: entry.reading().to_string(),
            definition: entry.definition().to_string(),
            pitch: entry.pitch().to_string(),
            notes,
            context,
        }
    }

    /// The extracted entry this record was built from. Used to compare a
    /// freshly scraped entry against a stored row (entry equality ignores
    /// pitch, so a re-scrape with different pitch data still deduplicates).
    pub fn to_entry(&self) -> VocabularyEntry {
        VocabularyEntry::from_fields(
            self.word.clone(),
            self.reading.clone(),
            self.definition.clone(),
            self.pitch.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_preserves_entry_fields() {
        let entry = VocabularyEntry::from_source(Some("ことば 言葉 ２"), "word");
        let record = VocabularyRecord::new(&entry, DictionaryType::Jj, "n".into(), "c".into());

        assert_eq!(record.word, "言葉");
        assert_eq!(record.to_entry(), entry);
    }
}
