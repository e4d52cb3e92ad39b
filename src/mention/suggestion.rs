//! Turning an in-progress keyword into a token.

use crate::config::{ConfigRef, TriggerConfig};
use crate::util::{char_len, char_slice, char_slice_from, last_index_of};

use super::part::{MentionState, Part, Suggestion, TokenData};
use super::selection::Selection;
use super::serialize::to_raw_value;

/// Result of accepting a suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedSuggestion {
    /// New raw value
    pub value: String,
    /// Caret position just past the token and its optional trailing space.
    /// Best effort: some widgets ignore programmatic selection.
    pub cursor: usize,
    pub space_inserted: bool,
}

/// Replace the trigger text before the caret with a token for `suggestion`.
///
/// The part holding the caret is split into the text before the last
/// trigger occurrence, the new token, and the text after the caret. Returns
/// None when the caret is outside every plain part or no trigger precedes it.
pub fn insert_suggestion(
    state: &MentionState,
    selection: Selection,
    trigger_name: &str,
    config: &TriggerConfig,
    suggestion: &Suggestion,
) -> Option<AppliedSuggestion> {
    let cursor = selection.end;
    let Some(idx) = state.part_index_at(cursor, true) else {
        tracing::debug!(cursor, "no plain part at caret, suggestion ignored");
        return None;
    };
    let part = &state.parts[idx];
    let local_end = cursor - part.position.start;

    // The trigger must end at or before the caret
    let trigger_idx = local_end
        .checked_sub(char_len(&config.trigger))
        .and_then(|from| last_index_of(&part.text, &config.trigger, from));
    let Some(trigger_idx) = trigger_idx else {
        tracing::debug!(cursor, trigger = %config.trigger, "no trigger before caret");
        return None;
    };

    let after = char_slice_from(&part.text, local_end);
    let space_inserted = config.insert_space_after_token
        && (cursor == char_len(&state.plain_text) || after.starts_with('\n'));

    let data = TokenData {
        original: config.encode(suggestion),
        trigger: config.trigger.clone(),
        name: suggestion.name.clone(),
        id: suggestion.id.clone(),
    };
    let token_start = part.position.start + trigger_idx;
    let token = Part::token(
        config.display(&data),
        ConfigRef::Trigger(trigger_name.to_string()),
        data,
        token_start,
    );
    let token_end = token.position.end;

    let before = Part::plain(char_slice(&part.text, 0, trigger_idx), part.position.start);
    let rest = if space_inserted {
        format!(" {}", after)
    } else {
        after.to_string()
    };
    let rest = Part::plain(rest, token_end);

    let mut parts = Vec::with_capacity(state.parts.len() + 2);
    parts.extend_from_slice(&state.parts[..idx]);
    parts.extend([before, token, rest]);
    parts.extend_from_slice(&state.parts[idx + 1..]);

    Some(AppliedSuggestion {
        value: to_raw_value(&parts),
        cursor: token_end + usize::from(space_inserted),
        space_inserted,
    })
}

/// Raw value with `suggestion` accepted at the caret, None when nothing applies
pub fn apply_suggestion(
    state: &MentionState,
    selection: Selection,
    trigger_name: &str,
    config: &TriggerConfig,
    suggestion: &Suggestion,
) -> Option<String> {
    insert_suggestion(state, selection, trigger_name, config, suggestion)
        .map(|applied| applied.value)
}
