//! Update function for the Elm-style architecture
//!
//! All state transformations of a [`MentionInput`] flow through here.

use crate::commands::Cmd;
use crate::mention::{insert_suggestion, value_from_changed_text, Selection, Suggestion};
use crate::messages::Msg;
use crate::model::MentionInput;

#[cfg(debug_assertions)]
use crate::tracing::FieldSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

/// Main update function
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut MentionInput, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut MentionInput, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::TextChanged(text) => text_changed(model, &text),
        Msg::SelectionChanged(selection) => {
            model.set_selection(selection);
            Some(Cmd::SelectionChanged(selection))
        }
        Msg::SuggestionSelected {
            trigger,
            suggestion,
        } => suggestion_selected(model, &trigger, &suggestion),
        Msg::SetValue(value) => {
            model.set_value(value);
            None
        }
        Msg::SetConfigs(configs) => {
            model.set_configs(configs);
            None
        }
    }
}

fn text_changed(model: &mut MentionInput, text: &str) -> Option<Cmd> {
    if text == model.plain_text() {
        return None;
    }
    let value = value_from_changed_text(model.state(), text);
    model.set_value(value.clone());
    Some(Cmd::Changed(value))
}

fn suggestion_selected(
    model: &mut MentionInput,
    trigger: &str,
    suggestion: &Suggestion,
) -> Option<Cmd> {
    let Some(config) = model.configs().trigger(trigger) else {
        tracing::debug!(trigger, "unknown trigger, suggestion ignored");
        return None;
    };
    // Only a trigger whose keyword is being tracked accepts a suggestion
    if model.keyword(trigger).is_none() {
        tracing::debug!(trigger, "keyword not tracked, suggestion ignored");
        return None;
    }
    let applied = insert_suggestion(
        model.state(),
        model.selection(),
        trigger,
        config,
        suggestion,
    )?;

    let selection = Selection::collapsed(applied.cursor);
    model.set_value(applied.value.clone());
    model.set_selection(selection);
    Some(Cmd::batch(vec![
        Cmd::Changed(applied.value),
        Cmd::SetSelection(selection),
    ]))
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut MentionInput, msg: Msg) -> Option<Cmd> {
    // Caret moves fire on every keystroke
    let is_noisy = matches!(&msg, Msg::SelectionChanged(_));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = FieldSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = FieldSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "field", %diff, "state changed");
    }

    model.assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message
///
/// Uses Debug formatting to include arguments, except for config sets.
/// Example outputs:
/// - `TextChanged("hi @")`
/// - `SelectionChanged(Selection { start: 4, end: 4 })`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::SetConfigs(configs) => format!("SetConfigs({} entries)", configs.entries().len()),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigSet;
    use std::sync::Arc;

    fn field(value: &str) -> MentionInput {
        MentionInput::new(value, Arc::new(ConfigSet::mentions()))
    }

    #[test]
    fn test_unchanged_text_emits_nothing() {
        let mut model = field("hi {@}[Mike](7)");
        let cmd = update(&mut model, Msg::TextChanged("hi @Mike".into()));
        assert_eq!(cmd, None);
    }

    #[test]
    fn test_text_change_emits_raw_value() {
        let mut model = field("hi {@}[Mike](7)");
        let cmd = update(&mut model, Msg::TextChanged("hi @Mike!".into()));
        assert_eq!(cmd, Some(Cmd::Changed("hi {@}[Mike](7)!".into())));
        assert_eq!(model.value(), "hi {@}[Mike](7)!");
    }

    #[test]
    fn test_selection_is_forwarded() {
        let mut model = field("abc");
        let selection = Selection::new(1, 2);
        let cmd = update(&mut model, Msg::SelectionChanged(selection));
        assert_eq!(cmd, Some(Cmd::SelectionChanged(selection)));
        assert_eq!(model.selection(), selection);
    }

    #[test]
    fn test_suggestion_needs_tracked_keyword() {
        let mut model = field("hello mi");
        update(&mut model, Msg::SelectionChanged(Selection::collapsed(8)));
        let cmd = update(
            &mut model,
            Msg::SuggestionSelected {
                trigger: "mention".into(),
                suggestion: Suggestion::new("7", "Mike"),
            },
        );
        assert_eq!(cmd, None);
        assert_eq!(model.value(), "hello mi");
    }

    #[test]
    fn test_suggestion_replaces_keyword() {
        let mut model = field("hello @mi");
        update(&mut model, Msg::SelectionChanged(Selection::collapsed(9)));
        let cmd = update(
            &mut model,
            Msg::SuggestionSelected {
                trigger: "mention".into(),
                suggestion: Suggestion::new("7", "Mike"),
            },
        );
        let expected = Cmd::batch(vec![
            Cmd::Changed("hello {@}[Mike](7) ".into()),
            Cmd::SetSelection(Selection::collapsed(12)),
        ]);
        assert_eq!(cmd, Some(expected));
        assert_eq!(model.plain_text(), "hello @Mike ");
        assert_eq!(model.keyword("mention"), None);
    }

    #[test]
    fn test_set_value_is_silent() {
        let mut model = field("");
        assert_eq!(update(&mut model, Msg::SetValue("{@}[A](1)".into())), None);
        assert_eq!(model.plain_text(), "@A");
    }
}
