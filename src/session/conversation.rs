//! Two-party conversation state for one open chat window.

use std::{collections::VecDeque, sync::Arc};

use log::{debug, info};

use crate::responder::RuleTable;
use crate::types::{Author, SessionState, SubmitOutcome};

use super::clock::{Clock, SystemClock};
use super::transcript::{Transcript, Turn};

/// Suggestion chips offered before the first user message.
pub fn default_suggestions() -> Vec<String> {
    [
        "Como adicionar uma nova tarefa?",
        "Como ver meu saldo?",
        "Como cadastrar um produto?",
        "Como definir uma meta?",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Live conversation: transcript, suggestion visibility and replies waiting to be shown.
///
/// Replies are queued by [`Session::submit_user_message`] and only appended by
/// [`Session::deliver_next_reply`], so the caller owns the "typing" delay.
#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    rules: Arc<RuleTable>,
    clock: C,
    transcript: Transcript,
    suggestions: Vec<String>,
    suggestions_visible: bool,
    pending: VecDeque<String>,
}

impl Session<SystemClock> {
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self::with_clock(rules, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(rules: Arc<RuleTable>, clock: C) -> Self {
        Self {
            rules,
            clock,
            transcript: Transcript::default(),
            suggestions: default_suggestions(),
            suggestions_visible: true,
            pending: VecDeque::new(),
        }
    }

    /// Replaces the suggestion chips.
    #[must_use]
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Appends a user turn and queues its reply. Whitespace-only text is ignored.
    ///
    /// The text is kept as typed; trimming only decides whether it is blank.
    pub fn submit_user_message(&mut self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            debug!("Ignoring empty submission");
            return SubmitOutcome::Ignored;
        }

        info!("User message: {text}");
        self.transcript
            .append(Author::User, text, self.clock.now());
        if self.suggestions_visible {
            debug!("First user message, hiding suggestions");
            self.suggestions_visible = false;
        }
        self.pending.push_back(text.to_string());

        SubmitOutcome::Accepted
    }

    /// Submits the suggestion's text and hides the chips regardless of the outcome.
    pub fn select_suggestion(&mut self, text: &str) -> SubmitOutcome {
        let outcome = self.submit_user_message(text);
        self.suggestions_visible = false;
        outcome
    }

    /// Answers the oldest queued message and appends the bot turn.
    pub fn deliver_next_reply(&mut self) -> Option<&Turn> {
        let utterance = self.pending.pop_front()?;
        let response = self.rules.respond(&utterance);
        debug!("Bot reply: {response}");
        Some(
            self.transcript
                .append(Author::Bot, response, self.clock.now()),
        )
    }

    /// Answers every queued message in submission order. Returns how many were delivered.
    pub fn deliver_pending_replies(&mut self) -> usize {
        let mut delivered = 0;
        while self.deliver_next_reply().is_some() {
            delivered += 1;
        }
        delivered
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_suggestions_visible(&self) -> bool {
        self.suggestions_visible
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn state(&self) -> SessionState {
        if self.transcript.has_user_turns() {
            SessionState::Active
        } else {
            SessionState::Idle
        }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeDelta, Utc};

    use super::*;
    use crate::responder::{RuleEntry, build_default_rule_table};
    use crate::session::ManualClock;

    fn session() -> (Session<ManualClock>, ManualClock) {
        let clock = ManualClock::new(DateTime::<Utc>::UNIX_EPOCH);
        let session = Session::with_clock(Arc::new(build_default_rule_table()), clock.clone());
        (session, clock)
    }

    fn topic_text(session: &Session<ManualClock>, key: &str) -> String {
        session
            .rules()
            .entries()
            .iter()
            .find(|entry| entry.key() == key)
            .map(|entry| entry.response_text().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn starts_idle_with_suggestions() {
        let (session, _) = session();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.is_suggestions_visible());
        assert_eq!(session.suggestions().len(), 4);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn empty_submission_changes_nothing() {
        let (mut session, _) = session();
        assert_eq!(session.submit_user_message(""), SubmitOutcome::Ignored);
        assert_eq!(session.submit_user_message("   \n\t"), SubmitOutcome::Ignored);
        assert!(session.transcript().is_empty());
        assert!(session.is_suggestions_visible());
        assert_eq!(session.pending_replies(), 0);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn first_message_hides_suggestions_for_good() {
        let (mut session, _) = session();
        assert_eq!(session.submit_user_message("oi"), SubmitOutcome::Accepted);
        assert!(!session.is_suggestions_visible());
        assert_eq!(session.state(), SessionState::Active);

        session.deliver_pending_replies();
        session.submit_user_message("tarefa");
        session.select_suggestion("Como ver meu saldo?");
        assert!(!session.is_suggestions_visible());
    }

    #[test]
    fn empty_suggestion_still_hides_chips() {
        let (mut session, _) = session();
        assert_eq!(session.select_suggestion("  "), SubmitOutcome::Ignored);
        assert!(!session.is_suggestions_visible());
        assert!(session.transcript().is_empty());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn reply_waits_for_delivery() {
        let (mut session, _) = session();
        session.submit_user_message("tarefa");
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.pending_replies(), 1);

        let reply = session.deliver_next_reply().map(Turn::author);
        assert_eq!(reply, Some(Author::Bot));
        assert_eq!(session.pending_replies(), 0);
        assert!(session.deliver_next_reply().is_none());
    }

    #[test]
    fn two_exchanges_alternate_user_and_bot() {
        let (mut session, clock) = session();
        session.submit_user_message("oi");
        clock.advance(TimeDelta::seconds(1));
        session.deliver_pending_replies();
        clock.advance(TimeDelta::seconds(3));
        session.submit_user_message("tarefa");
        clock.advance(TimeDelta::seconds(1));
        session.deliver_pending_replies();

        let default_text = session.rules().default_response_text().to_string();
        let task_text = topic_text(&session, "task");
        let turns: Vec<(Author, &str)> = session
            .transcript()
            .iter()
            .map(|turn| (turn.author(), turn.text()))
            .collect();
        assert_eq!(
            turns,
            [
                (Author::User, "oi"),
                (Author::Bot, default_text.as_str()),
                (Author::User, "tarefa"),
                (Author::Bot, task_text.as_str()),
            ]
        );

        let stamps: Vec<_> = session.transcript().iter().map(Turn::timestamp).collect();
        assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(stamps[1] - stamps[0], TimeDelta::seconds(1));
    }

    #[test]
    fn queued_replies_follow_submission_order() {
        let (mut session, _) = session();
        session.submit_user_message("saldo");
        session.submit_user_message("produto");
        assert_eq!(session.deliver_pending_replies(), 2);

        let finance = topic_text(&session, "finance");
        let product = topic_text(&session, "product");
        let texts: Vec<&str> = session.transcript().iter().map(Turn::text).collect();
        assert_eq!(texts, ["saldo", "produto", finance.as_str(), product.as_str()]);
    }

    #[test]
    fn suggestion_text_is_answered() {
        let (mut session, _) = session();
        let suggestion = session.suggestions()[0].clone();
        assert_eq!(session.select_suggestion(&suggestion), SubmitOutcome::Accepted);
        session.deliver_pending_replies();
        let task = topic_text(&session, "task");
        assert_eq!(session.transcript().last().map(Turn::text), Some(task.as_str()));
    }

    #[test]
    fn reply_matches_untrimmed_text() -> crate::error::Result<()> {
        let rules = RuleTable::new(vec![RuleEntry::new("goal", "Metas!", ["meta "])], "padrão")?;
        let clock = ManualClock::new(DateTime::<Utc>::UNIX_EPOCH);
        let mut session = Session::with_clock(Arc::new(rules), clock);

        assert_eq!(session.submit_user_message("minha meta "), SubmitOutcome::Accepted);
        session.deliver_pending_replies();

        let texts: Vec<&str> = session.transcript().iter().map(Turn::text).collect();
        assert_eq!(texts, ["minha meta ", "Metas!"]);
        assert_eq!(texts[1], session.rules().respond("minha meta "));
        Ok(())
    }

    #[test]
    fn custom_suggestions_replace_defaults() {
        let (session, _) = session();
        let session = session.with_suggestions(vec!["Ajuda".to_string()]);
        assert_eq!(session.suggestions(), ["Ajuda"]);
    }
}
