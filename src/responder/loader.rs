//! Loads a rule table override from a JSON file.

use std::{fs, path::Path};

use log::{debug, info};
use serde::Deserialize;

use crate::error::Result;

use super::{MatchMode, RuleEntry, RuleTable};

#[derive(Debug, Deserialize)]
struct TopicConfig {
    key: String,
    response: String,
    keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RuleTableConfig {
    #[serde(default)]
    match_mode: MatchMode,
    default_response: String,
    topics: Vec<TopicConfig>,
}

impl RuleTableConfig {
    fn into_table(self) -> Result<RuleTable> {
        let entries = self
            .topics
            .into_iter()
            .map(|topic| RuleEntry::new(topic.key, topic.response, topic.keywords))
            .collect();
        Ok(RuleTable::new(entries, self.default_response)?.with_match_mode(self.match_mode))
    }
}

/// Read and validate a rule table from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or
/// describes an invalid table.
pub fn load_rule_table(path: &Path) -> Result<RuleTable> {
    debug!("Loading rule table from {}", path.display());
    let raw = fs::read_to_string(path)?;
    let config: RuleTableConfig = serde_json::from_str(&raw)?;
    let table = config.into_table()?;
    info!(
        "Loaded {} topics from {} (match mode: {})",
        table.entries().len(),
        path.display(),
        table.match_mode()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::ChatError;

    fn write_rules(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn loads_topics_in_file_order() -> Result<()> {
        let file = write_rules(
            r#"{
                "default_response": "Não sei.",
                "topics": [
                    { "key": "ship", "response": "Entrega em 3 dias.", "keywords": ["Entrega", "frete"] },
                    { "key": "pay", "response": "Aceitamos pix.", "keywords": ["pagamento"] }
                ]
            }"#,
        );
        let table = load_rule_table(file.path())?;
        assert_eq!(table.match_mode(), MatchMode::Substring);
        assert_eq!(table.entries()[0].key(), "ship");
        assert_eq!(table.entries()[0].keywords(), ["entrega", "frete"]);
        assert_eq!(table.respond("qual o FRETE?"), "Entrega em 3 dias.");
        assert_eq!(table.respond("olá"), "Não sei.");
        Ok(())
    }

    #[test]
    fn honours_match_mode() -> Result<()> {
        let file = write_rules(
            r#"{
                "match_mode": "whole_word",
                "default_response": "Não sei.",
                "topics": [{ "key": "goal", "response": "Metas!", "keywords": ["meta"] }]
            }"#,
        );
        let table = load_rule_table(file.path())?;
        assert_eq!(table.respond("metamorfose"), "Não sei.");
        assert_eq!(table.respond("uma meta"), "Metas!");
        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_rule_table(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ChatError::Io(_)));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let file = write_rules("{ not json");
        let err = load_rule_table(file.path()).unwrap_err();
        assert!(matches!(err, ChatError::Json(_)));
    }

    #[test]
    fn null_response_is_rejected() {
        let file = write_rules(r#"{ "default_response": null, "topics": [] }"#);
        let err = load_rule_table(file.path()).unwrap_err();
        assert!(matches!(err, ChatError::Json(_)));
    }

    #[test]
    fn invalid_table_is_invalid_argument() {
        let file = write_rules(
            r#"{
                "default_response": "Não sei.",
                "topics": [{ "key": "empty", "response": "x", "keywords": [] }]
            }"#,
        );
        let err = load_rule_table(file.path()).unwrap_err();
        assert!(matches!(err, ChatError::InvalidArgument(_)));
    }
}
