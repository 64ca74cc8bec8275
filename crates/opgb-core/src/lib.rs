//! Core of the OPG promo bot.
//!
//! This crate is framework-agnostic: Telegram lives behind the
//! [`messaging::port::MessagingPort`] trait implemented in `opgb-telegram`.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod event_loop;
pub mod logging;
pub mod messaging;
pub mod navigation;
pub mod store;

#[cfg(test)]
mod testing;

pub use errors::{Error, Result};
