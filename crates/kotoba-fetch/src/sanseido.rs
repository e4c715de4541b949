//! Scraper for the Sanseido Word-Wise Web dictionary pages.

use std::time::Duration;

use kotoba_core::DictionaryType;
use scraper::{Html, Selector};

use crate::page::{DictionaryPage, FetchError, RelatedWordEntry, SearchResult};

const DEFAULT_BASE_URL: &str = "https://www.sanseido.biz/User/Dic/Index.aspx";

/// Sanseido result page, one HTTP fetch per search.
pub struct SanseidoPage {
    base_url: String,
    client: reqwest::Client,
}

impl SanseidoPage {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), timeout, user_agent)
    }

    pub fn with_base_url(
        base_url: String,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { base_url, client })
    }

    fn dictionary_param(dictionary_type: DictionaryType) -> &'static str {
        match dictionary_type {
            DictionaryType::Jj => "DailyJJ",
            DictionaryType::Je => "DailyJE",
            DictionaryType::Ej => "DailyEJ",
        }
    }

    /// Pull the raw headword line, definition, and related-word links out of
    /// a result page. Pure, so selector behavior is testable offline.
    pub fn parse_document(
        html: &str,
        dictionary_type: DictionaryType,
    ) -> Result<SearchResult, FetchError> {
        let document = Html::parse_document(html);
        let word_selector = Selector::parse("#word").unwrap();
        let body_selector = Selector::parse("#wordBody").unwrap();
        let related_selector = Selector::parse("#wordBody a").unwrap();

        let body = document
            .select(&body_selector)
            .next()
            .ok_or(FetchError::MissingBody)?;

        let raw_source = document
            .select(&word_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty());

        let definition = body.text().collect::<String>().trim().to_string();

        let related_words = document
            .select(&related_selector)
            .filter_map(|anchor| {
                let word = anchor.text().collect::<String>().trim().to_string();
                if word.is_empty() {
                    None
                } else {
                    Some(RelatedWordEntry {
                        word,
                        dictionary_type,
                    })
                }
            })
            .collect();

        Ok(SearchResult {
            raw_source,
            definition,
            related_words,
        })
    }
}

#[async_trait::async_trait]
impl DictionaryPage for SanseidoPage {
    async fn search(
        &self,
        word: &str,
        dictionary_type: DictionaryType,
    ) -> Result<SearchResult, FetchError> {
        tracing::info!("Searching Sanseido {} for '{}'", dictionary_type, word);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("st", word),
                (Self::dictionary_param(dictionary_type), "checkbox"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let html = response.text().await?;
        let result = Self::parse_document(&html, dictionary_type)?;

        if result.raw_source.is_none() {
            tracing::warn!("No word element for '{}', extraction will degrade", word);
        }

        Ok(result)
    }

    async fn navigate_related(
        &self,
        related: &RelatedWordEntry,
    ) -> Result<SearchResult, FetchError> {
        self.search(&related.word, related.dictionary_type).await
    }
}
