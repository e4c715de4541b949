use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::extract::{isolate_pitch, isolate_reading, isolate_word};

/// A vocabulary item extracted from one scraped dictionary entry.
///
/// Immutable once built. `reading` and `pitch` are never null; the empty
/// string stands for "not found". Serde field order is the transfer encoding:
/// `word`, `reading`, `definition`, `pitch`.
///
/// Equality compares `(word, reading, definition)` only — pitch is a generated
/// annotation and two extractions of the same item may disagree on it. Hashing
/// still mixes in `pitch`, so equal entries can hash differently: do not use
/// this type as a `HashMap`/`HashSet` key. Deduplication must go through `==`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyEntry {
    word: String,
    reading: String,
    definition: String,
    pitch: String,
}

impl VocabularyEntry {
    /// Build an entry by running the isolators over a raw source line.
    /// An absent source behaves as the empty string.
    pub fn from_source(raw_source: Option<&str>, definition: &str) -> Self {
        let source = raw_source.unwrap_or("");
        Self {
            word: isolate_word(source),
            reading: isolate_reading(source),
            definition: definition.to_string(),
            pitch: isolate_pitch(source),
        }
    }

    /// Rebuild an entry from its four transferred fields, bypassing extraction.
    pub fn from_fields(word: String, reading: String, definition: String, pitch: String) -> Self {
        Self {
            word,
            reading,
            definition,
            pitch,
        }
    }

    /// The four fields in transfer order.
    pub fn into_fields(self) -> (String, String, String, String) {
        (self.word, self.reading, self.definition, self.pitch)
    }

    /// The headword as it appeared in the dictionary.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The kana reading of the word.
    pub fn reading(&self) -> &str {
        &self.reading
    }

    /// The unparsed definition text.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The pitch accent digits, or `""` when none were found.
    pub fn pitch(&self) -> &str {
        &self.pitch
    }

    /// Renders the word in Anki furigana syntax: `word[reading]`, collapsing
    /// to the reading alone when the word is already pure kana.
    pub fn furigana(&self) -> String {
        if self.word == self.reading {
            return self.reading.clone();
        }

        format!("{}[{}]", self.word, self.reading)
    }
}

impl PartialEq for VocabularyEntry {
    // Pitch is deliberately left out, see the type docs.
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
            && self.reading == other.reading
            && self.definition == other.definition
    }
}

impl Eq for VocabularyEntry {}

impl Hash for VocabularyEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
        self.reading.hash(state);
        self.definition.hash(state);
        self.pitch.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{DefaultHasher, Hash, Hasher};

    use super::*;

    fn hash_of(entry: &VocabularyEntry) -> u64 {
        let mut hasher = DefaultHasher::new();
        entry.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn builds_from_raw_source() {
        let entry = VocabularyEntry::from_source(Some("△ことば 言葉 ２"), "word; language");
        assert_eq!(entry.word(), "言葉");
        assert_eq!(entry.reading(), "ことば");
        assert_eq!(entry.pitch(), "２");
        assert_eq!(entry.definition(), "word; language");
    }

    #[test]
    fn bracketed_source_wins_word_but_not_reading() {
        // The reading matcher requires a kanji/digit/space/end boundary, which
        // a closing bracket is not, so it falls back to the raw source here.
        let entry = VocabularyEntry::from_source(Some("言葉［ことば］"), "word");
        assert_eq!(entry.word(), "ことば");
        assert_eq!(entry.reading(), "言葉［ことば］");
    }

    #[test]
    fn absent_source_behaves_as_empty() {
        let entry = VocabularyEntry::from_source(None, "def");
        assert_eq!(entry.word(), "");
        assert_eq!(entry.reading(), "");
        assert_eq!(entry.pitch(), "");
        assert_eq!(entry.definition(), "def");
    }

    #[test]
    fn furigana_annotates_kanji_words() {
        let entry = VocabularyEntry::from_fields(
            "言葉".into(),
            "ことば".into(),
            "word".into(),
            "1".into(),
        );
        assert_eq!(entry.furigana(), "言葉[ことば]");
    }

    #[test]
    fn furigana_collapses_for_kana_words() {
        let entry =
            VocabularyEntry::from_fields("ことば".into(), "ことば".into(), "word".into(), "".into());
        assert_eq!(entry.furigana(), "ことば");
    }

    #[test]
    fn equality_ignores_pitch_but_hash_does_not() {
        let a = VocabularyEntry::from_fields("言葉".into(), "ことば".into(), "word".into(), "1".into());
        let b = VocabularyEntry::from_fields("言葉".into(), "ことば".into(), "word".into(), "2".into());

        assert_eq!(a, b);
        assert_ne!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn equality_covers_word_reading_definition() {
        let a = VocabularyEntry::from_fields("言葉".into(), "ことば".into(), "word".into(), "".into());
        let b = VocabularyEntry::from_fields("言葉".into(), "ことば".into(), "speech".into(), "".into());
        assert_ne!(a, b);
    }

    #[test]
    fn fields_round_trip_in_transfer_order() {
        let entry = VocabularyEntry::from_source(Some("言葉［ことば］１"), "word");
        let (word, reading, definition, pitch) = entry.clone().into_fields();
        let rebuilt = VocabularyEntry::from_fields(word, reading, definition, pitch);

        assert_eq!(rebuilt, entry);
        assert_eq!(rebuilt.pitch(), entry.pitch());
    }

    #[test]
    fn serde_encoding_keeps_field_order() {
        let entry = VocabularyEntry::from_fields(
            "言葉".into(),
            "ことば".into(),
            "word".into(),
            "1".into(),
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"word":"言葉","reading":"ことば","definition":"word","pitch":"1"}"#
        );

        let decoded: VocabularyEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, entry);
    }
}
