//! Comment text moderation.
//!
//! # Responsibility
//! - Scan comment text against the configured forbidden-term list before
//!   any comment write reaches storage.
//!
//! # Invariants
//! - The term list is fixed at construction; no runtime mutation.
//! - Matching is a literal case-sensitive substring check, not a
//!   word-boundary match.
//! - Which term matched never leaves the core; callers surface one fixed
//!   warning regardless of the term.

/// Fixed warning surfaced for every rejected comment.
pub const MODERATION_WARNING: &str = "comment text contains forbidden words";

/// Immutable forbidden-term scanner.
#[derive(Debug, Clone)]
pub struct ModerationFilter {
    terms: Vec<String>,
}

/// Outcome of a moderation scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// The matched term, for diagnostics inside the core only.
    Reject { term: String },
}

impl ModerationFilter {
    /// Builds a filter over the given terms. Blank terms are dropped so an
    /// empty string can never match everything.
    pub fn new(terms: impl IntoIterator<Item = String>) -> Self {
        Self {
            terms: terms
                .into_iter()
                .filter(|term| !term.trim().is_empty())
                .collect(),
        }
    }

    /// Scans `text` and reports the first forbidden term found, if any.
    pub fn check(&self, text: &str) -> Verdict {
        for term in &self.terms {
            if text.contains(term.as_str()) {
                return Verdict::Reject { term: term.clone() };
            }
        }
        Verdict::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::{ModerationFilter, Verdict};

    fn filter() -> ModerationFilter {
        ModerationFilter::new(["редиска".to_string(), "негодяй".to_string()])
    }

    #[test]
    fn clean_text_passes() {
        assert_eq!(filter().check("a perfectly nice comment"), Verdict::Pass);
    }

    #[test]
    fn every_term_is_caught_mid_text() {
        let filter = filter();
        for term in ["редиска", "негодяй"] {
            let verdict = filter.check(&format!("text with {term} inside"));
            assert_eq!(
                verdict,
                Verdict::Reject {
                    term: term.to_string()
                }
            );
        }
    }

    #[test]
    fn match_is_substring_not_word_boundary() {
        let verdict = filter().check("приредисками");
        assert!(matches!(verdict, Verdict::Reject { .. }));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(filter().check("РЕДИСКА"), Verdict::Pass);
    }

    #[test]
    fn blank_terms_are_ignored() {
        let filter = ModerationFilter::new(["".to_string(), "  ".to_string()]);
        assert_eq!(filter.check("anything"), Verdict::Pass);
    }
}
