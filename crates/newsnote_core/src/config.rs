//! Immutable core configuration.
//!
//! # Responsibility
//! - Carry the values the embedding process fixes at startup: home page
//!   size and the forbidden-term list.
//!
//! # Invariants
//! - Instances are built once and injected by value; no mutable global
//!   state and no runtime reconfiguration.

use serde::Deserialize;

const DEFAULT_NEWS_PAGE_SIZE: u32 = 10;

/// Process-start configuration injected into services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// Number of news items on the home listing.
    pub news_page_size: u32,
    /// Literal substrings rejected by the moderation filter.
    pub forbidden_terms: Vec<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            news_page_size: DEFAULT_NEWS_PAGE_SIZE,
            forbidden_terms: vec!["редиска".to_string(), "негодяй".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CoreConfig;

    #[test]
    fn defaults_cover_page_size_and_terms() {
        let config = CoreConfig::default();
        assert_eq!(config.news_page_size, 10);
        assert_eq!(config.forbidden_terms.len(), 2);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: CoreConfig = serde_json::from_str(r#"{"news_page_size": 3}"#).unwrap();
        assert_eq!(config.news_page_size, 3);
        assert_eq!(config.forbidden_terms, CoreConfig::default().forbidden_terms);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<CoreConfig>(r#"{"page": 3}"#);
        assert!(result.is_err());
    }
}
