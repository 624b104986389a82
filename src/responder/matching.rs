//! Keyword matching logic for the responder.

use log::debug;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::rules::{RuleEntry, RuleTable};

/// Matching strategy for rule keywords.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MatchMode {
    /// Keyword may appear anywhere, including inside a longer word.
    #[default]
    Substring,
    /// Keyword must be delimited by non-alphanumeric characters or the text edges.
    WholeWord,
}

impl MatchMode {
    /// Returns true when `keyword` occurs in the already lower-cased `normalized` text.
    pub fn matches(self, normalized: &str, keyword: &str) -> bool {
        match self {
            MatchMode::Substring => normalized.contains(keyword),
            MatchMode::WholeWord => normalized.match_indices(keyword).any(|(idx, _)| {
                let before = normalized[..idx].chars().next_back();
                let after = normalized[idx + keyword.len()..].chars().next();
                !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
            }),
        }
    }
}

impl RuleTable {
    /// Returns the first entry, in table order, with a keyword present in `utterance`.
    ///
    /// `None` means the fallback response applies.
    pub fn classify(&self, utterance: &str) -> Option<&RuleEntry> {
        let normalized = utterance.to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        for entry in self.entries() {
            if let Some(keyword) = entry
                .keywords()
                .iter()
                .find(|keyword| self.match_mode().matches(&normalized, keyword))
            {
                debug!("Responder hit: topic='{}' keyword='{keyword}'", entry.key());
                return Some(entry);
            }
        }

        debug!("Responder miss: falling back to default response");
        None
    }

    /// Returns the response text for `utterance`, or the default text when nothing matches.
    pub fn respond(&self, utterance: &str) -> &str {
        self.classify(utterance)
            .map_or(self.default_response_text(), RuleEntry::response_text)
    }
}

/// Returns the response `table` gives for `utterance`.
pub fn respond<'a>(table: &'a RuleTable, utterance: &str) -> &'a str {
    table.respond(utterance)
}
