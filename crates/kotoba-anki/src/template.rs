use kotoba_core::VocabularyEntry;
use serde::{Deserialize, Serialize};

/// Flashcard template rendered from an extracted vocabulary entry.
///
/// Placeholders: `{word}`, `{furigana}`, `{reading}`, `{definition}`,
/// `{pitch}`. The furigana field uses Anki's `word[reading]` syntax, which
/// Anki renders as ruby text above the word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardTemplate {
    pub deck: String,
    pub model: String,
    pub front_template: String,
    pub back_template: String,
}

impl CardTemplate {
    /// Default Japanese vocabulary card: furigana-annotated word on the
    /// front, definition and pitch on the back.
    pub fn default_japanese() -> Self {
        Self {
            deck: "Japanese".to_string(),
            model: "Basic".to_string(),
            front_template: "{furigana}".to_string(),
            back_template: "{definition}\n{pitch}".to_string(),
        }
    }

    pub fn new(deck: String, model: String, front: String, back: String) -> Self {
        Self {
            deck,
            model,
            front_template: front,
            back_template: back,
        }
    }

    pub fn format_front(&self, entry: &VocabularyEntry) -> String {
        Self::fill(&self.front_template, entry)
    }

    pub fn format_back(&self, entry: &VocabularyEntry) -> String {
        Self::fill(&self.back_template, entry)
    }

    fn fill(template: &str, entry: &VocabularyEntry) -> String {
        template
            .replace("{word}", entry.word())
            .replace("{furigana}", &entry.furigana())
            .replace("{reading}", entry.reading())
            .replace("{definition}", entry.definition())
            .replace("{pitch}", entry.pitch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> VocabularyEntry {
        VocabularyEntry::from_fields(
            "言葉".to_string(),
            "ことば".to_string(),
            "word; language".to_string(),
            "2".to_string(),
        )
    }

    #[test]
    fn default_template_renders_furigana_front() {
        let template = CardTemplate::default_japanese();
        assert_eq!(template.format_front(&entry()), "言葉[ことば]");
        assert_eq!(template.format_back(&entry()), "word; language\n2");
    }

    #[test]
    fn all_placeholders_substitute() {
        let template = CardTemplate::new(
            "d".into(),
            "m".into(),
            "{word}|{reading}|{pitch}".into(),
            "{furigana}".into(),
        );
        assert_eq!(template.format_front(&entry()), "言葉|ことば|2");
        assert_eq!(template.format_back(&entry()), "言葉[ことば]");
    }
}
