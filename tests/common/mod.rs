//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::Arc;

use mention_field::config::{ConfigSet, PatternConfig, TriggerConfig};
use mention_field::mention::{Selection, Suggestion};
use mention_field::update::update;
use mention_field::{Cmd, MentionInput, Msg};

/// Field with the default `@` mention config
pub fn field(value: &str) -> MentionInput {
    MentionInput::new(value, Arc::new(ConfigSet::mentions()))
}

/// Field with a custom config set
pub fn field_with(value: &str, configs: ConfigSet) -> MentionInput {
    MentionInput::new(value, Arc::new(configs))
}

/// `@` mentions, single-word `#` hashtags and highlighted urls
pub fn team_configs() -> ConfigSet {
    ConfigSet::mentions()
        .with_trigger("hashtag", TriggerConfig::new("#").with_allowed_spaces(0))
        .with_pattern("url", PatternConfig::new(r"https?://\S+").unwrap())
}

/// Report new plain text, as the widget does after an edit
pub fn change_text(model: &mut MentionInput, text: &str) -> Option<Cmd> {
    update(model, Msg::TextChanged(text.to_string()))
}

/// Move the caret without selecting
pub fn set_caret(model: &mut MentionInput, pos: usize) {
    update(model, Msg::SelectionChanged(Selection::collapsed(pos)));
}

/// Type `text` one char at a time at the caret, like a user would
pub fn type_text(model: &mut MentionInput, text: &str) {
    for ch in text.chars() {
        let caret = model.selection().end;
        let mut chars: Vec<char> = model.plain_text().chars().collect();
        chars.insert(caret, ch);
        let plain: String = chars.into_iter().collect();
        change_text(model, &plain);
        set_caret(model, caret + 1);
    }
}

/// Delete the char before the caret
pub fn backspace(model: &mut MentionInput) {
    let caret = model.selection().end;
    if caret == 0 {
        return;
    }
    let mut chars: Vec<char> = model.plain_text().chars().collect();
    chars.remove(caret - 1);
    let plain: String = chars.into_iter().collect();
    change_text(model, &plain);
    set_caret(model, caret - 1);
}

/// Pick a suggestion from `trigger`'s list, applying the caret hint
pub fn pick(model: &mut MentionInput, trigger: &str, id: &str, name: &str) -> Option<Cmd> {
    let cmd = update(
        model,
        Msg::SuggestionSelected {
            trigger: trigger.to_string(),
            suggestion: Suggestion::new(id, name),
        },
    );
    if let Some(selection) = cmd.as_ref().and_then(Cmd::requested_selection) {
        update(model, Msg::SelectionChanged(selection));
    }
    cmd
}

/// Number of token parts in the field
pub fn token_count(model: &MentionInput) -> usize {
    model.parts().iter().filter(|p| p.is_token()).count()
}
