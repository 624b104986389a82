//! Common types used throughout the chat core.

use serde::Serialize;
use strum::Display;

/// Author of a turn in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Author {
    /// Message typed or picked by the person using the dashboard
    User,
    /// Canned reply produced by the responder
    Bot,
}

/// Outcome of handing text to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A user turn was appended and a reply was queued
    Accepted,
    /// Whitespace-only text; nothing changed
    Ignored,
}

/// Coarse lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No user turn yet
    Idle,
    /// At least one user turn was appended
    Active,
}
