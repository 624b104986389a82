//! Chat session state: transcript, suggestion chips and delayed bot replies.

mod clock;
mod conversation;
mod driver;
mod transcript;

pub use clock::{Clock, ManualClock, SystemClock};
pub use conversation::{Session, default_suggestions};
pub use driver::{ChatDriver, ImmediateScheduler, Scheduler, TokioScheduler};
pub use transcript::{Transcript, Turn};
