//! The compound-token rule for numbered list items.
//!
//! Bot output lists staff as `Name - Specialty - Employment type`. When a
//! numbered item is plain text containing ` - `, its tokens are regrouped into
//! an emphasised name and a trailing category.

use chatmark_config::{EmploymentCategory, EmploymentConfig};
use regex::{Regex, RegexBuilder};

use super::types::{CompoundEntry, EmploymentTag, Trailer};
use crate::error::EngineError;

/// Compiled employment vocabulary.
///
/// Detection and categorisation are separate: the regexes decide whether a
/// token is an employment tag at all, then literal labels pick its category.
#[derive(Debug, Clone)]
pub struct EmploymentVocabulary {
    patterns: Vec<Regex>,
    categories: Vec<(String, EmploymentCategory)>,
    no_category: Regex,
}

impl EmploymentVocabulary {
    pub const SEPARATOR: &'static str = " - ";

    /// Compiles every configured pattern case-insensitively.
    pub fn from_config(config: &EmploymentConfig) -> Result<Self, EngineError> {
        let patterns = config
            .patterns
            .iter()
            .map(|pattern| compile(pattern))
            .collect::<Result<Vec<_>, EngineError>>()?;
        let categories = config
            .categories
            .iter()
            .map(|label| (label.substring.to_lowercase(), label.category))
            .collect();

        Ok(Self {
            patterns,
            categories,
            no_category: compile(&config.no_category_pattern)?,
        })
    }

    pub fn is_employment(&self, token: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(token))
    }

    /// Category of an employment token, or `None` if `token` isn't one.
    ///
    /// The first label contained in the lowercased token wins; an employment
    /// token containing no label is [`EmploymentCategory::Other`].
    pub fn employment_category(&self, token: &str) -> Option<EmploymentCategory> {
        if !self.is_employment(token) {
            return None;
        }
        let lowered = token.to_lowercase();
        let category = self
            .categories
            .iter()
            .find(|(label, _)| lowered.contains(label.as_str()))
            .map_or(EmploymentCategory::Other, |(_, category)| *category);
        Some(category)
    }

    pub fn is_no_category(&self, token: &str) -> bool {
        self.no_category.is_match(token)
    }

    /// Applies the compound-token rule to a numbered item's plain text.
    ///
    /// Returns `None` when `rest` has no separator or fewer than two non-empty
    /// tokens, in which case the item stays plain text.
    pub fn split_entry(&self, rest: &str) -> Option<CompoundEntry> {
        if !rest.contains(Self::SEPARATOR) {
            return None;
        }
        let tokens: Vec<&str> = rest
            .split(Self::SEPARATOR)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        let [first, leading @ .., last] = tokens.as_slice() else {
            return None;
        };

        let joined_name = || {
            let mut name = vec![*first];
            name.extend_from_slice(leading);
            name.join(" ")
        };

        if let Some(category) = self.employment_category(last) {
            return Some(CompoundEntry {
                name: joined_name(),
                trailer: Trailer::Employment(EmploymentTag {
                    label: last.to_string(),
                    category,
                }),
            });
        }

        if self.is_no_category(last) {
            return Some(CompoundEntry {
                name: joined_name(),
                trailer: Trailer::Text(last.to_string()),
            });
        }

        Some(CompoundEntry {
            name: first.to_string(),
            trailer: Trailer::Text(tokens[1..].join(Self::SEPARATOR)),
        })
    }
}

fn compile(pattern: &str) -> Result<Regex, EngineError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| EngineError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatmark_config::CategoryLabel;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn vocabulary() -> EmploymentVocabulary {
        EmploymentVocabulary::from_config(&EmploymentConfig::default()).unwrap()
    }

    #[rstest]
    #[case("Full Time", Some(EmploymentCategory::FullTime))]
    #[case("FULL TIME", Some(EmploymentCategory::FullTime))]
    #[case("part time", Some(EmploymentCategory::PartTime))]
    #[case("Part time consultant", Some(EmploymentCategory::PartTime))]
    #[case("Visiting Consultant", Some(EmploymentCategory::Other))]
    #[case("Locum", Some(EmploymentCategory::Other))]
    #[case("Cardiology", None)]
    fn categorises_tokens(#[case] token: &str, #[case] expected: Option<EmploymentCategory>) {
        assert_eq!(vocabulary().employment_category(token), expected);
    }

    #[test]
    fn employment_entry_merges_name_tokens() {
        let entry = vocabulary()
            .split_entry("Dr. Rao - Cardiology - Full Time")
            .unwrap();
        assert_eq!(
            entry,
            CompoundEntry {
                name: "Dr. Rao Cardiology".into(),
                trailer: Trailer::Employment(EmploymentTag {
                    label: "Full Time".into(),
                    category: EmploymentCategory::FullTime,
                }),
            }
        );
    }

    #[test]
    fn no_category_phrase_is_plain_trailer() {
        let entry = vocabulary()
            .split_entry("Dr. Iyer - Cardiac - Anesthesiology - No category mentioned")
            .unwrap();
        assert_eq!(entry.name, "Dr. Iyer Cardiac Anesthesiology");
        assert_eq!(entry.trailer, Trailer::Text("No category mentioned".into()));
    }

    #[test]
    fn unknown_trailer_keeps_first_token_as_name() {
        let entry = vocabulary()
            .split_entry("Dr. Das - Neurology - Block B")
            .unwrap();
        assert_eq!(entry.name, "Dr. Das");
        assert_eq!(entry.trailer, Trailer::Text("Neurology - Block B".into()));
    }

    #[test]
    fn empty_tokens_are_dropped() {
        let entry = vocabulary().split_entry("Dr. Sen -  - Locum").unwrap();
        assert_eq!(entry.name, "Dr. Sen");
        assert!(matches!(entry.trailer, Trailer::Employment(_)));
    }

    #[rstest]
    #[case("Dr. Rao")]
    #[case("Dr. Rao-Cardiology")]
    #[case(" - Locum")]
    fn not_a_compound_entry(#[case] rest: &str) {
        assert_eq!(vocabulary().split_entry(rest), None);
    }

    #[rstest]
    #[case("Fulltime")]
    #[case("FULLTIME")]
    #[case("Full  Time")]
    #[case("PartTime")]
    #[case("Part\tTime")]
    fn spacing_variants_are_employment_but_uncategorised(#[case] token: &str) {
        let vocabulary = vocabulary();
        assert!(vocabulary.is_employment(token));
        assert_eq!(
            vocabulary.employment_category(token),
            Some(EmploymentCategory::Other)
        );

        let entry = vocabulary.split_entry(&format!("Dr. X - {token}")).unwrap();
        assert_eq!(
            entry.trailer,
            Trailer::Employment(EmploymentTag {
                label: token.to_string(),
                category: EmploymentCategory::Other,
            })
        );
    }

    #[test]
    fn configured_patterns_replace_defaults() {
        let config = EmploymentConfig {
            patterns: vec!["honorary".into()],
            ..EmploymentConfig::default()
        };
        let vocabulary = EmploymentVocabulary::from_config(&config).unwrap();
        assert_eq!(
            vocabulary.employment_category("Honorary"),
            Some(EmploymentCategory::Other)
        );
        assert_eq!(vocabulary.employment_category("Full Time"), None);
    }

    #[test]
    fn configured_labels_are_checked_in_order() {
        let config = EmploymentConfig {
            categories: vec![
                CategoryLabel::new("Visiting", EmploymentCategory::PartTime),
                CategoryLabel::new("full time", EmploymentCategory::FullTime),
            ],
            ..EmploymentConfig::default()
        };
        let vocabulary = EmploymentVocabulary::from_config(&config).unwrap();
        assert_eq!(
            vocabulary.employment_category("Visiting, full time"),
            Some(EmploymentCategory::PartTime)
        );
        assert_eq!(
            vocabulary.employment_category("Full Time"),
            Some(EmploymentCategory::FullTime)
        );
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let config = EmploymentConfig {
            patterns: vec!["full(time".into()],
            ..EmploymentConfig::default()
        };
        let err = EmploymentVocabulary::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("full(time"));
    }
}
