//! Recursive raw value parser.
//!
//! The head config splits the value into non-matching and matching runs.
//! Matches become token or pattern parts; everything else, plus any match the
//! head config rejects, is handed to the remaining configs. Earlier configs
//! therefore win over later ones for any region of text.

use crate::config::{ConfigEntry, ConfigSet, PartConfig};
use crate::util::char_len;

use super::part::{MentionState, Part};

/// Parse a raw value into plain text and parts
pub fn parse_value(value: &str, configs: &ConfigSet) -> MentionState {
    parse_entries(value, configs.entries(), 0)
}

/// Parse `value` with `entries` in precedence order, placing the first part
/// at plain-text offset `offset`
pub fn parse_entries(value: &str, entries: &[ConfigEntry], offset: usize) -> MentionState {
    let Some((entry, rest)) = entries.split_first() else {
        return MentionState {
            plain_text: value.to_string(),
            parts: vec![Part::plain(value, offset)],
        };
    };

    let mut builder = StateBuilder::new(offset);
    let mut last_end = 0;
    let mut matched = false;

    for found in entry.config.regex().find_iter(value) {
        // Empty matches would produce zero-length parts
        if found.as_str().is_empty() {
            continue;
        }
        matched = true;

        builder.parse_rest(&value[last_end..found.start()], rest);

        match &entry.config {
            PartConfig::Trigger(trigger) => {
                let data = trigger
                    .decode(found.as_str())
                    .filter(|data| data.trigger == trigger.trigger);
                match data {
                    Some(data) => {
                        let text = trigger.display(&data);
                        let offset = builder.cursor();
                        builder.push(Part::token(text, entry.reference(), data, offset));
                    }
                    // Not ours: another trigger (or plain text) may claim it
                    None => builder.parse_rest(found.as_str(), rest),
                }
            }
            PartConfig::Pattern(_) => {
                let offset = builder.cursor();
                builder.push(Part::matched(found.as_str(), entry.reference(), offset));
            }
        }

        last_end = found.end();
    }

    if !matched {
        return parse_entries(value, rest, offset);
    }

    builder.parse_rest(&value[last_end..], rest);
    builder.finish()
}

/// Accumulates parts and plain text while tracking the plain-text cursor
struct StateBuilder {
    plain_text: String,
    parts: Vec<Part>,
    cursor: usize,
}

impl StateBuilder {
    fn new(offset: usize) -> Self {
        Self {
            plain_text: String::new(),
            parts: Vec::new(),
            cursor: offset,
        }
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn push(&mut self, part: Part) {
        self.cursor = part.position.end;
        self.plain_text.push_str(&part.text);
        self.parts.push(part);
    }

    /// Parse a non-empty run with the remaining configs and append it
    fn parse_rest(&mut self, text: &str, rest: &[ConfigEntry]) {
        if text.is_empty() {
            return;
        }
        let nested = parse_entries(text, rest, self.cursor);
        self.cursor += char_len(&nested.plain_text);
        self.plain_text.push_str(&nested.plain_text);
        self.parts.extend(nested.parts);
    }

    fn finish(self) -> MentionState {
        MentionState {
            plain_text: self.plain_text,
            parts: self.parts,
        }
    }
}
