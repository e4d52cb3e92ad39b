//! Field model - the owner-side state of one rich text field
//!
//! Holds the raw value, the config set, the selection and the
//! `{plain_text, parts}` snapshot derived from the value. The snapshot is
//! always the parse of the current value, so it is the correct "before"
//! side for the next diff.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::ConfigSet;
use crate::mention::{keyword_for, parse_value, MentionState, Part, Selection};
use crate::util::char_len;

/// Suggestion state of one trigger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TriggerState {
    /// What follows the trigger up to the caret; None when not tracking
    pub keyword: Option<String>,
}

impl TriggerState {
    /// Whether suggestions should be shown for this trigger
    pub fn is_tracking(&self) -> bool {
        self.keyword.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct MentionInput {
    value: String,
    configs: Arc<ConfigSet>,
    state: MentionState,
    selection: Selection,
}

impl MentionInput {
    pub fn new(value: impl Into<String>, configs: Arc<ConfigSet>) -> Self {
        let value = value.into();
        let state = parse_value(&value, &configs);
        Self {
            value,
            configs,
            state,
            selection: Selection::default(),
        }
    }

    /// Raw value with tokens in encoded form
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Text the widget displays
    pub fn plain_text(&self) -> &str {
        &self.state.plain_text
    }

    pub fn parts(&self) -> &[Part] {
        &self.state.parts
    }

    pub fn state(&self) -> &MentionState {
        &self.state
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn configs(&self) -> &Arc<ConfigSet> {
        &self.configs
    }

    /// Replace the raw value, re-parsing only when it differs. The selection
    /// is clamped to the new plain text. Returns whether the value changed.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value == self.value {
            return false;
        }
        self.state = parse_value(&value, &self.configs);
        self.value = value;
        self.selection = self.selection.clamped(char_len(&self.state.plain_text));
        true
    }

    /// Install a config set. The same `Arc` is a no-op; a different one
    /// re-parses the current value and clamps the selection.
    pub fn set_configs(&mut self, configs: Arc<ConfigSet>) {
        if Arc::ptr_eq(&self.configs, &configs) {
            return;
        }
        self.state = parse_value(&self.value, &configs);
        self.configs = configs;
        self.selection = self.selection.clamped(char_len(&self.state.plain_text));
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Keyword of trigger `name` at the current selection
    pub fn keyword(&self, name: &str) -> Option<String> {
        let config = self.configs.trigger(name)?;
        keyword_for(&self.state, self.selection, config)
    }

    /// Suggestion state for every trigger, in precedence order
    pub fn triggers(&self) -> IndexMap<String, TriggerState> {
        self.configs
            .triggers()
            .map(|(name, config)| {
                let keyword = keyword_for(&self.state, self.selection, config);
                (name.to_string(), TriggerState { keyword })
            })
            .collect()
    }

    /// Check that the parts tile the plain text exactly
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        let mut expected_start = 0;
        let mut plain = String::with_capacity(self.state.plain_text.len());
        for part in &self.state.parts {
            debug_assert_eq!(
                part.position.start, expected_start,
                "[{}] parts are not contiguous: {:?}",
                context, self.state.parts
            );
            expected_start = part.position.end;
            plain.push_str(&part.text);
        }
        debug_assert_eq!(
            plain, self.state.plain_text,
            "[{}] parts do not spell the plain text",
            context
        );
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _context: &str) {}
}
