use kotoba_core::DictionaryType;

/// A word the dictionary page links to from a result, searchable in turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedWordEntry {
    pub word: String,
    pub dictionary_type: DictionaryType,
}

/// One scraped dictionary result: the raw headword line for the extraction
/// engine, the definition text, and any related-word links on the page.
///
/// `raw_source` is `None` when the page had no word element (a miss); the
/// engine turns that into an entry of empty fields rather than an error.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub raw_source: Option<String>,
    pub definition: String,
    pub related_words: Vec<RelatedWordEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("dictionary page had no result body")]
    MissingBody,
}

/// Remote dictionary page that can be searched and navigated.
#[async_trait::async_trait]
pub trait DictionaryPage: Send + Sync {
    /// Search a word in the given dictionary.
    async fn search(
        &self,
        word: &str,
        dictionary_type: DictionaryType,
    ) -> Result<SearchResult, FetchError>;

    /// Follow a related-word link from a previous result.
    async fn navigate_related(
        &self,
        related: &RelatedWordEntry,
    ) -> Result<SearchResult, FetchError>;
}
