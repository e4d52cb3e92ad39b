//! Mention field - rich text co-model for plain text inputs
//!
//! A raw value such as `"Hi {@}[Mike](7)"` is shown to the user as the plain
//! text `"Hi @Mike"`. This crate keeps the two in sync: it parses raw values
//! into parts, rebuilds the parts after the widget reports an edit, tracks
//! the keyword typed after each trigger, and turns a picked suggestion into
//! a token. Owners drive a [`MentionInput`] with [`Msg`]s through
//! [`update::update`] and act on the returned [`Cmd`]s.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod mention;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{ConfigSet, PatternConfig, TriggerConfig};
pub use messages::Msg;
pub use model::{MentionInput, TriggerState};
