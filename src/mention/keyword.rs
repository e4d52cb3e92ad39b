//! Detecting what the user is typing after a trigger.
//!
//! `None` means the trigger is not being tracked and no suggestions should
//! show; `Some("")` means the trigger was just typed. With trigger `@` and
//! one allowed space (`|` is the caret):
//!
//! ```text
//! |abc @name dfg      None
//! abc @| dfg          Some("")
//! abc @na|me dfg      Some("na")
//! abc @name |dfg      Some("name ")
//! abc @name dfg|      Some("name dfg")
//! abc @name dfg |     None (two spaces)
//! abc@name|           None (trigger inside a word)
//! ```

use indexmap::IndexMap;

use crate::config::{ConfigSet, TriggerConfig};
use crate::util::{accepts_trigger_after, char_len, char_slice};

use super::part::MentionState;
use super::selection::Selection;

/// Keyword being typed after `config`'s trigger at a collapsed selection
pub fn keyword_for(
    state: &MentionState,
    selection: Selection,
    config: &TriggerConfig,
) -> Option<String> {
    if !selection.is_collapsed() {
        return None;
    }
    let cursor = selection.end;

    let part = state
        .parts
        .iter()
        .find(|p| p.position.start < cursor && cursor <= p.position.end)?;
    // Caret inside a finalized token
    if part.is_token() {
        return None;
    }

    let trigger_len = char_len(&config.trigger);
    let mut segments = part.text.split(config.trigger.as_str());
    let leading = segments.next().unwrap_or_default();

    // Text before the first trigger never holds a keyword
    let mut local_cursor = part.position.start + char_len(leading) + trigger_len;
    let mut trigger_allowed = accepts_trigger_after(leading);
    let mut keyword = None;

    for segment in segments {
        if local_cursor > cursor {
            break;
        }
        let segment_len = char_len(segment);
        local_cursor += segment_len;

        if local_cursor >= cursor {
            // Trigger glued to the preceding word
            if !trigger_allowed {
                return None;
            }
            let typed_len = segment_len - (local_cursor - cursor);
            let typed = char_slice(segment, 0, typed_len);
            if typed.split(' ').count() <= config.allowed_spaces_count + 1 {
                keyword = Some(typed.to_string());
            }
        }

        local_cursor += trigger_len;
        trigger_allowed = accepts_trigger_after(segment);
    }

    keyword
}

/// Keyword for every trigger in `configs`, in precedence order
pub fn keywords_by_trigger(
    state: &MentionState,
    selection: Selection,
    configs: &ConfigSet,
) -> IndexMap<String, Option<String>> {
    configs
        .triggers()
        .map(|(name, config)| (name.to_string(), keyword_for(state, selection, config)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mention::parse_value;

    fn keyword(text: &str, cursor: usize) -> Option<String> {
        let configs = ConfigSet::mentions();
        let state = parse_value(text, &configs);
        keyword_for(
            &state,
            Selection::collapsed(cursor),
            configs.trigger("mention").unwrap(),
        )
    }

    #[test]
    fn test_caret_before_trigger() {
        assert_eq!(keyword("abc @name dfg", 0), None);
        assert_eq!(keyword("abc @name dfg", 3), None);
    }

    #[test]
    fn test_just_typed_trigger() {
        assert_eq!(keyword("abc @ dfg", 5), Some(String::new()));
        assert_eq!(keyword("@", 1), Some(String::new()));
    }

    #[test]
    fn test_keyword_up_to_caret() {
        assert_eq!(keyword("abc @name dfg", 9), Some("name".into()));
        assert_eq!(keyword("abc @name dfg", 7), Some("na".into()));
        assert_eq!(keyword("abc @name dfg", 10), Some("name ".into()));
        assert_eq!(keyword("abc @name dfg", 13), Some("name dfg".into()));
    }

    #[test]
    fn test_too_many_spaces_cancels() {
        assert_eq!(keyword("abc @name dfg ", 14), None);
        assert_eq!(keyword("abc @name dfg he", 16), None);
    }

    #[test]
    fn test_trigger_inside_word_is_ignored() {
        assert_eq!(keyword("abc@name", 8), None);
        assert_eq!(keyword("mail me@host", 12), None);
    }

    #[test]
    fn test_trigger_after_newline() {
        assert_eq!(keyword("hi\n@jo", 6), Some("jo".into()));
    }

    #[test]
    fn test_last_trigger_wins() {
        assert_eq!(keyword("@ann @bo", 8), Some("bo".into()));
        assert_eq!(keyword("@ann @bo", 3), Some("an".into()));
    }

    #[test]
    fn test_range_selection_tracks_nothing() {
        let configs = ConfigSet::mentions();
        let state = parse_value("abc @name", &configs);
        let keywords = keywords_by_trigger(&state, Selection::new(5, 9), &configs);
        assert_eq!(keywords.get("mention"), Some(&None));
    }

    #[test]
    fn test_caret_inside_token() {
        assert_eq!(keyword("hi {@}[Mike](7)", 6), None);
        assert_eq!(keyword("hi {@}[Mike](7)", 8), None);
    }

    #[test]
    fn test_typing_after_token() {
        // "@Mike @jo": the keyword lives in the plain part after the token
        assert_eq!(keyword("{@}[Mike](7) @jo", 9), Some("jo".into()));
    }

    #[test]
    fn test_zero_allowed_spaces() {
        let configs =
            ConfigSet::default().with_trigger("tag", TriggerConfig::new("#").with_allowed_spaces(0));
        let state = parse_value("x #rust lang", &configs);
        let tag = configs.trigger("tag").unwrap();
        assert_eq!(keyword_for(&state, Selection::collapsed(7), tag), Some("rust".into()));
        assert_eq!(keyword_for(&state, Selection::collapsed(8), tag), None);
    }

    #[test]
    fn test_keywords_by_trigger_covers_every_trigger() {
        let configs = ConfigSet::mentions().with_trigger("tag", TriggerConfig::new("#"));
        let state = parse_value("see #ru", &configs);
        let keywords = keywords_by_trigger(&state, Selection::collapsed(7), &configs);
        let names: Vec<&str> = keywords.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["mention", "tag"]);
        assert_eq!(keywords["mention"], None);
        assert_eq!(keywords["tag"], Some("ru".into()));
    }
}
