//! Transport-facing abstractions: what the bot receives and how it replies.

pub mod port;
pub mod types;
