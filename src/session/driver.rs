//! Drives a session with a presentation delay before each bot reply.

use std::{future::Future, time::Duration};

use log::debug;

use crate::types::SubmitOutcome;

use super::clock::Clock;
use super::conversation::Session;
use super::transcript::Turn;

/// Waits out the "bot is typing" delay.
pub trait Scheduler {
    fn wait(&self, delay: Duration) -> impl Future<Output = ()> + Send;
}

/// Real timer backed by the tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn wait(&self, delay: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(delay)
    }
}

/// Never waits. Replies are delivered as soon as they are asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn wait(&self, _delay: Duration) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}

#[derive(Debug)]
pub struct ChatDriver<C: Clock, S: Scheduler> {
    session: Session<C>,
    scheduler: S,
    reply_delay: Duration,
}

impl<C: Clock, S: Scheduler> ChatDriver<C, S> {
    pub fn new(session: Session<C>, scheduler: S, reply_delay: Duration) -> Self {
        Self {
            session,
            scheduler,
            reply_delay,
        }
    }

    /// Sends a typed message and returns the bot's reply once the delay has elapsed.
    ///
    /// Returns `None` when the text was blank.
    pub async fn send(&mut self, text: &str) -> Option<Turn> {
        let outcome = self.session.submit_user_message(text);
        self.reply(outcome).await
    }

    /// Sends a clicked suggestion and returns the bot's reply.
    pub async fn choose_suggestion(&mut self, text: &str) -> Option<Turn> {
        let outcome = self.session.select_suggestion(text);
        self.reply(outcome).await
    }

    async fn reply(&mut self, outcome: SubmitOutcome) -> Option<Turn> {
        if outcome == SubmitOutcome::Ignored {
            return None;
        }

        debug!("Waiting {:?} before replying", self.reply_delay);
        self.scheduler.wait(self.reply_delay).await;
        self.session.deliver_next_reply().cloned()
    }

    pub fn session(&self) -> &Session<C> {
        &self.session
    }

    pub fn into_session(self) -> Session<C> {
        self.session
    }
}
