//! Message types for the Elm-style architecture
//!
//! Everything the text widget and the suggestion lists report flows into
//! [`crate::update::update`] as one of these.

use std::sync::Arc;

use crate::config::ConfigSet;
use crate::mention::{Selection, Suggestion};

#[derive(Debug, Clone)]
pub enum Msg {
    /// The widget's full plain text after a user edit
    TextChanged(String),
    /// The widget's selection moved
    SelectionChanged(Selection),
    /// A suggestion was picked from the list of trigger `trigger`
    SuggestionSelected {
        trigger: String,
        suggestion: Suggestion,
    },
    /// The owner replaced the raw value
    SetValue(String),
    /// The owner installed another config set
    SetConfigs(Arc<ConfigSet>),
}
