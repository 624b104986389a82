use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::Author;

/// One authored message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    author: Author,
    text: String,
    timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn author(&self) -> Author {
        self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Append-only list of turns, oldest first.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Appends a turn. Timestamps never go backwards: an instant older than the
    /// last turn's is raised to it.
    pub(crate) fn append(
        &mut self,
        author: Author,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> &Turn {
        let timestamp = self
            .turns
            .last()
            .map_or(timestamp, |last| last.timestamp.max(timestamp));
        self.turns.push(Turn {
            author,
            text: text.into(),
            timestamp,
        });
        &self.turns[self.turns.len() - 1]
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    pub fn has_user_turns(&self) -> bool {
        self.turns.iter().any(|turn| turn.author == Author::User)
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
