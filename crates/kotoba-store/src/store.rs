use std::collections::HashMap;
use std::path::{Path, PathBuf};

use kotoba_core::{DictionaryType, VocabularyEntry};

use crate::record::VocabularyRecord;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("'{word}' already saved for dictionary {dictionary_type}")]
    Duplicate {
        word: String,
        dictionary_type: DictionaryType,
    },

    #[error("'{word}' not found for dictionary {dictionary_type}")]
    NotFound {
        word: String,
        dictionary_type: DictionaryType,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Persistence seam for extracted vocabulary. Rows are unique per
/// `(word, dictionary type)` pair.
pub trait VocabularyStore: Send + Sync {
    fn insert(&mut self, record: VocabularyRecord) -> Result<(), StoreError>;

    fn get(&self, word: &str, dictionary_type: DictionaryType) -> Option<&VocabularyRecord>;

    /// Replace the user-editable fields of an existing row.
    fn update_note_fields(
        &mut self,
        word: &str,
        dictionary_type: DictionaryType,
        notes: String,
        context: String,
    ) -> Result<(), StoreError>;

    fn delete(&mut self, word: &str, dictionary_type: DictionaryType) -> Result<(), StoreError>;

    fn all(&self) -> Vec<&VocabularyRecord>;

    fn len(&self) -> usize;

    /// Whether a freshly extracted entry duplicates a stored row. Goes
    /// through entry equality, which ignores pitch.
    fn contains_entry(&self, entry: &VocabularyEntry, dictionary_type: DictionaryType) -> bool {
        self.get(entry.word(), dictionary_type)
            .is_some_and(|record| record.to_entry() == *entry)
    }
}

/// In-memory store, also the backing for [`JsonFileStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<(String, DictionaryType), VocabularyRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VocabularyStore for MemoryStore {
    fn insert(&mut self, record: VocabularyRecord) -> Result<(), StoreError> {
        let key = (record.word.clone(), record.dictionary_type);
        if self.records.contains_key(&key) {
            return Err(StoreError::Duplicate {
                word: record.word,
                dictionary_type: record.dictionary_type,
            });
        }

        self.records.insert(key, record);
        Ok(())
    }

    fn get(&self, word: &str, dictionary_type: DictionaryType) -> Option<&VocabularyRecord> {
        self.records.get(&(word.to_string(), dictionary_type))
    }

    fn update_note_fields(
        &mut self,
        word: &str,
        dictionary_type: DictionaryType,
        notes: String,
        context: String,
    ) -> Result<(), StoreError> {
        let record = self
            .records
            .get_mut(&(word.to_string(), dictionary_type))
            .ok_or_else(|| StoreError::NotFound {
                word: word.to_string(),
                dictionary_type,
            })?;

        record.notes = notes;
        record.context = context;
        Ok(())
    }

    fn delete(&mut self, word: &str, dictionary_type: DictionaryType) -> Result<(), StoreError> {
        self.records
            .remove(&(word.to_string(), dictionary_type))
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                word: word.to_string(),
                dictionary_type,
            })
    }

    fn all(&self) -> Vec<&VocabularyRecord> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by(|a, b| (&a.word, a.dictionary_type.as_str())
            .cmp(&(&b.word, b.dictionary_type.as_str())));
        records
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

/// Store persisted as a JSON array of records, written back after every
/// mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open a store file, creating an empty store if the file is missing.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let mut inner = MemoryStore::new();

        if path.exists() {
            let json = std::fs::read_to_string(path)?;
            let records: Vec<VocabularyRecord> = serde_json::from_str(&json)?;
            for record in records {
                inner.insert(record)?;
            }
            tracing::info!("Loaded {} vocabulary records from {}", inner.len(), path.display());
        } else {
            tracing::info!("No store file at {}, starting empty", path.display());
        }

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let records = self.inner.all();
        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!("Saved {} vocabulary records to {}", records.len(), self.path.display());
        Ok(())
    }
}

impl VocabularyStore for JsonFileStore {
    fn insert(&mut self, record: VocabularyRecord) -> Result<(), StoreError> {
        self.inner.insert(record)?;
        self.save()
    }

    fn get(&self, word: &str, dictionary_type: DictionaryType) -> Option<&VocabularyRecord> {
        self.inner.get(word, dictionary_type)
    }

    fn update_note_fields(
        &mut self,
        word: &str,
        dictionary_type: DictionaryType,
        notes: String,
        context: String,
    ) -> Result<(), StoreError> {
        self.inner
            .update_note_fields(word, dictionary_type, notes, context)?;
        self.save()
    }

    fn delete(&mut self, word: &str, dictionary_type: DictionaryType) -> Result<(), StoreError> {
        self.inner.delete(word, dictionary_type)?;
        self.save()
    }

    fn all(&self) -> Vec<&VocabularyRecord> {
        self.inner.all()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str, pitch: &str, dt: DictionaryType) -> VocabularyRecord {
        let entry = VocabularyEntry::from_fields(
            word.to_string(),
            "ことば".to_string(),
            "word".to_string(),
            pitch.to_string(),
        );
        VocabularyRecord::new(&entry, dt, String::new(), String::new())
    }

    #[test]
    fn insert_rejects_same_word_and_dictionary() {
        let mut store = MemoryStore::new();
        store.insert(record("言葉", "1", DictionaryType::Jj)).unwrap();

        let err = store
            .insert(record("言葉", "1", DictionaryType::Jj))
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
    }

    #[test]
    fn same_word_allowed_across_dictionaries() {
        let mut store = MemoryStore::new();
        store.insert(record("言葉", "1", DictionaryType::Jj)).unwrap();
        store.insert(record("言葉", "1", DictionaryType::Je)).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn contains_entry_ignores_pitch() {
        let mut store = MemoryStore::new();
        store.insert(record("言葉", "1", DictionaryType::Jj)).unwrap();

        // A re-scrape that found different pitch digits is still a duplicate.
        let rescraped = VocabularyEntry::from_fields(
            "言葉".into(),
            "ことば".into(),
            "word".into(),
            "2".into(),
        );
        assert!(store.contains_entry(&rescraped, DictionaryType::Jj));
        assert!(!store.contains_entry(&rescraped, DictionaryType::Je));
    }

    #[test]
    fn update_and_delete_report_missing_rows() {
        let mut store = MemoryStore::new();
        let err = store.delete("言葉", DictionaryType::Jj).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));

        store.insert(record("言葉", "1", DictionaryType::Jj)).unwrap();
        store
            .update_note_fields("言葉", DictionaryType::Jj, "note".into(), "ctx".into())
            .unwrap();
        assert_eq!(store.get("言葉", DictionaryType::Jj).unwrap().notes, "note");

        store.delete("言葉", DictionaryType::Jj).unwrap();
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn json_store_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.insert(record("言葉", "1", DictionaryType::Jj)).unwrap();
            store.insert(record("ことば", "", DictionaryType::Je)).unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(
            reopened.get("言葉", DictionaryType::Jj).unwrap().pitch,
            "1"
        );
    }
}
