//! Keyword rule table and the responder that matches utterances against it.

mod loader;
mod matching;
mod rules;

pub use loader::load_rule_table;
pub use matching::{MatchMode, respond};
pub use rules::{RuleEntry, RuleTable, build_default_rule_table};
