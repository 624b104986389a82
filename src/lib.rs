pub mod cli;
pub mod config;
pub mod error;
pub mod faq;
pub mod responder;
pub mod session;
pub mod types;

pub use cli::run;
