use kotoba_store::VocabularyRecord;

/// Render stored records as tab-separated lines for Anki's file import:
/// furigana, definition, pitch, notes. Tabs and newlines inside fields are
/// flattened to spaces so they cannot break the column layout.
pub fn records_to_tsv(records: &[&VocabularyRecord]) -> String {
    let mut out = String::new();

    for record in records {
        let entry = record.to_entry();
        let line = [
            entry.furigana(),
            record.definition.clone(),
            record.pitch.clone(),
            record.notes.clone(),
        ]
        .map(|field| field.replace(['\t', '\n', '\r'], " "))
        .join("\t");

        out.push_str(&line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use kotoba_core::{DictionaryType, VocabularyEntry};
    use kotoba_store::VocabularyRecord;

    use super::*;

    #[test]
    fn one_line_per_record_with_furigana_first() {
        let entry = VocabularyEntry::from_fields(
            "言葉".into(),
            "ことば".into(),
            "word".into(),
            "2".into(),
        );
        let record =
            VocabularyRecord::new(&entry, DictionaryType::Jj, "note\twith tab".into(), "".into());

        let tsv = records_to_tsv(&[&record]);
        assert_eq!(tsv, "言葉[ことば]\tword\t2\tnote with tab\n");
    }
}
