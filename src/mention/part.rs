//! Parts: contiguous spans of the plain text.

use serde::{Deserialize, Serialize};

use crate::config::ConfigRef;
use crate::util::char_len;

/// Char range of a part within the plain text (`end` exclusive)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub start: usize,
    pub end: usize,
}

impl Position {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Reference data of a finalized token. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenData {
    /// Raw value form, e.g. `{@}[Mike](7)`
    pub original: String,
    pub trigger: String,
    pub name: String,
    pub id: String,
}

/// An entity the user can pick while typing after a trigger
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A span of the plain text.
///
/// A part with `data` is a token part (atomic); a part without it is plain
/// and may be split freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Display text of this span
    pub text: String,
    pub position: Position,
    /// Config that produced this part (None for freeform text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<TokenData>,
}

impl Part {
    /// Freeform text starting at `offset`
    pub fn plain(text: impl Into<String>, offset: usize) -> Self {
        let text = text.into();
        let end = offset + char_len(&text);
        Self {
            text,
            position: Position::new(offset, end),
            config: None,
            data: None,
        }
    }

    /// Text matched by a pattern config
    pub fn matched(text: impl Into<String>, config: ConfigRef, offset: usize) -> Self {
        Self {
            config: Some(config),
            ..Self::plain(text, offset)
        }
    }

    /// A finalized token displayed as `text`
    pub fn token(
        text: impl Into<String>,
        config: ConfigRef,
        data: TokenData,
        offset: usize,
    ) -> Self {
        Self {
            config: Some(config),
            data: Some(data),
            ..Self::plain(text, offset)
        }
    }

    pub fn is_token(&self) -> bool {
        self.data.is_some()
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    /// Same part moved to start at `offset`
    pub fn with_offset(mut self, offset: usize) -> Self {
        let len = self.position.len();
        self.position = Position::new(offset, offset + len);
        self
    }
}

/// Lay parts out contiguously starting at `offset`
pub fn reposition(parts: Vec<Part>, offset: usize) -> Vec<Part> {
    let mut cursor = offset;
    parts
        .into_iter()
        .map(|part| {
            let part = part.with_offset(cursor);
            cursor = part.position.end;
            part
        })
        .collect()
}

/// Plain text and parts derived from a raw value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionState {
    pub plain_text: String,
    pub parts: Vec<Part>,
}

impl MentionState {
    /// Index of the first part with `start <= cursor <= end`, skipping token
    /// parts when `plain_only` is set
    pub(crate) fn part_index_at(&self, cursor: usize, plain_only: bool) -> Option<usize> {
        self.parts.iter().position(|part| {
            part.position.start <= cursor
                && cursor <= part.position.end
                && !(plain_only && part.is_token())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_part_position_counts_chars() {
        let part = Part::plain("héllo", 3);
        assert_eq!(part.position, Position::new(3, 8));
        assert_eq!(part.len(), 5);
        assert!(!part.is_token());
    }

    #[test]
    fn test_reposition_is_contiguous() {
        let parts = vec![Part::plain("ab", 0), Part::plain("cde", 0), Part::plain("", 0)];
        let parts = reposition(parts, 4);
        assert_eq!(parts[0].position, Position::new(4, 6));
        assert_eq!(parts[1].position, Position::new(6, 9));
        assert_eq!(parts[2].position, Position::new(9, 9));
    }

    #[test]
    fn test_token_part_serializes_reference() {
        let data = TokenData {
            original: "{@}[Mike](7)".into(),
            trigger: "@".into(),
            name: "Mike".into(),
            id: "7".into(),
        };
        let part = Part::token("@Mike", ConfigRef::Trigger("mention".into()), data, 0);
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["config"]["kind"], "trigger");
        assert_eq!(json["config"]["name"], "mention");
        assert_eq!(json["data"]["id"], "7");

        let plain = serde_json::to_value(Part::plain("x", 0)).unwrap();
        assert!(plain.get("data").is_none());
    }
}
