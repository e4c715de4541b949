//! Pattern matching that pulls a word, its kana reading, and its pitch accent
//! digits out of a scraped dictionary source line.
//!
//! Source lines are messy: the headword is usually inside full-width brackets
//! with furigana mixed in, but plain kanji headwords, kana-only headwords, and
//! decorated variants all occur. Each isolator tries its patterns in a fixed
//! order and falls back to a defined value instead of failing, so extraction
//! is total over arbitrary input.

use std::sync::LazyLock;

use regex::Regex;

// Most headwords are enclosed in full-width brackets. Greedy on purpose:
// spans from the first ［ to the last ］, as the source format nests nothing.
static EXACT_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"［(.*)］").unwrap());

// A word beginning with or enclosed by kanji, with optional kana in between.
static WORD_WITH_KANJI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Han}+[\p{Hiragana}\p{Katakana}]*\p{Han}*").unwrap());

// A bare run of kana.
static KANA_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Hiragana}\p{Katakana}]+").unwrap());

// A kana run that ends at the end of input, a kanji, a digit, or whitespace.
// The boundary keeps the match from swallowing a trailing pitch digit run.
static READING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\p{Hiragana}\p{Katakana}]+)(?:$|[\p{Han}０-９0-9\s])").unwrap()
});

// Pitch accent position(s), written with ASCII or full-width digits.
static PITCH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9０-９]+").unwrap());

// Some messy entries decorate the headword with triangles.
static TRIANGLES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[△▲]").unwrap());

/// Strips the `△`/`▲` decoration markers from a source line. Idempotent.
pub fn normalize(source: &str) -> String {
    TRIANGLES.replace_all(source, "").into_owned()
}

/// Isolates the headword from a raw source line.
///
/// Tries, in order: bracket-enclosed content, a kanji-anchored word, a bare
/// kana run. If nothing matches, the normalized source is returned verbatim.
pub fn isolate_word(source: &str) -> String {
    let source = normalize(source);

    if let Some(caps) = EXACT_WORD.captures(&source) {
        return caps[1].to_string();
    }
    if let Some(m) = WORD_WITH_KANJI.find(&source) {
        return m.as_str().to_string();
    }
    if let Some(m) = KANA_RUN.find(&source) {
        return m.as_str().to_string();
    }

    source
}

/// Isolates the kana reading from a raw source line.
///
/// Falls back to the raw source itself when no bounded kana run is found;
/// note this fallback is the unnormalized input, unlike [`isolate_word`].
pub fn isolate_reading(source: &str) -> String {
    if source.is_empty() {
        return String::new();
    }

    match READING.captures(source) {
        Some(caps) => caps[1].to_string(),
        None => source.to_string(),
    }
}

/// Isolates the pitch accent digits from a raw source line, or `""` if the
/// line carries no pitch data.
pub fn isolate_pitch(source: &str) -> String {
    if source.is_empty() {
        return String::new();
    }

    match PITCH.find(source) {
        Some(m) => m.as_str().to_string(),
        None => String::new(),
    }
}
