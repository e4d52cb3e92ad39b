//! Command types for the Elm-style architecture
//!
//! Commands are the effects the owner performs after an update: notifying
//! listeners and moving the widget's caret.

use crate::mention::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// The raw value changed (`onChange`)
    Changed(String),
    /// Forwarded widget selection (`onSelectionChange`)
    SelectionChanged(Selection),
    /// Ask the widget to move its selection. Best effort on some platforms.
    SetSelection(Selection),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// The last raw value this command reports, if any
    pub fn changed_value(&self) -> Option<&str> {
        match self {
            Cmd::Changed(value) => Some(value),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(Cmd::changed_value),
            Cmd::SelectionChanged(_) | Cmd::SetSelection(_) => None,
        }
    }

    /// The selection the widget should adopt, if any
    pub fn requested_selection(&self) -> Option<Selection> {
        match self {
            Cmd::SetSelection(selection) => Some(*selection),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(Cmd::requested_selection),
            Cmd::Changed(_) | Cmd::SelectionChanged(_) => None,
        }
    }
}
