//! Dispatch shell for the wild-magic surge roller.
//!
//! Turns inbound chat messages into replies: a recognized command gets a
//! canned answer, anything else rolls on the surge table. Delivering the
//! reply is left to the caller.

pub mod config;
pub mod dispatch;

pub use config::DispatchConfig;
pub use dispatch::{Dispatcher, InboundMessage, ParseMode, Reply};
