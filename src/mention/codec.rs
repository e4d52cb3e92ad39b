//! Canonical token encoding: `{trigger}[name](id)`.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::part::{Suggestion, TokenData};

/// One group spanning a whole encoded token; used to split raw values
const SINGLE_GROUP_PATTERN: &str = r"(\{[^{}^]*\}\[[^\[]*\]\([^()^]*\))";

/// Groups: original, trigger, name, id
const TOKEN_PATTERN: &str = r"(\{([^{}^]*)\}\[([^\[]*)\]\(([^()^]*)\))";

pub fn single_group_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(SINGLE_GROUP_PATTERN).expect("canonical split pattern is valid")
    })
}

pub fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("canonical token pattern is valid"))
}

fn data_from_captures(caps: &Captures<'_>) -> TokenData {
    let group = |idx: usize| caps.get(idx).map_or("", |m| m.as_str()).to_string();
    TokenData {
        original: group(1),
        trigger: group(2),
        name: group(3),
        id: group(4),
    }
}

/// Decode a canonical token. The whole input must be one encoded token.
pub fn decode_token(matched: &str) -> Option<TokenData> {
    let caps = token_regex().captures(matched)?;
    let whole = caps.get(0)?;
    if whole.start() != 0 || whole.end() != matched.len() {
        return None;
    }
    Some(data_from_captures(&caps))
}

/// Canonical raw form of a suggestion under `trigger`
pub fn encode_token(trigger: &str, suggestion: &Suggestion) -> String {
    format!("{{{}}}[{}]({})", trigger, suggestion.name, suggestion.id)
}

/// Rewrite every canonical token in `value` through `replacer`.
///
/// ```
/// use mention_field::mention::replace_trigger_values;
///
/// let text = replace_trigger_values("hi {@}[Mike](7)!", |t| format!("<{}>", t.id));
/// assert_eq!(text, "hi <7>!");
/// ```
pub fn replace_trigger_values(
    value: &str,
    mut replacer: impl FnMut(&TokenData) -> String,
) -> String {
    token_regex()
        .replace_all(value, |caps: &Captures<'_>| replacer(&data_from_captures(caps)))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_canonical() {
        let data = decode_token("{@}[Mike Smith](42)").unwrap();
        assert_eq!(data.original, "{@}[Mike Smith](42)");
        assert_eq!(data.trigger, "@");
        assert_eq!(data.name, "Mike Smith");
        assert_eq!(data.id, "42");
    }

    #[test]
    fn test_decode_rejects_partial_and_malformed() {
        assert!(decode_token("x {@}[Mike](42)").is_none());
        assert!(decode_token("{@}[Mike](42) ").is_none());
        assert!(decode_token("{@}[Mike]42").is_none());
        assert!(decode_token("@Mike").is_none());
    }

    #[test]
    fn test_decode_allows_empty_fields() {
        let data = decode_token("{#}[](1)").unwrap();
        assert_eq!(data.trigger, "#");
        assert_eq!(data.name, "");
    }

    #[test]
    fn test_encode_decode_agree() {
        let encoded = encode_token("@", &Suggestion::new("7", "Mike"));
        assert_eq!(encoded, "{@}[Mike](7)");
        assert_eq!(decode_token(&encoded).unwrap().name, "Mike");
    }

    #[test]
    fn test_split_pattern_finds_all_tokens() {
        let value = "a {@}[A](1) b {#}[B](2)";
        let found: Vec<&str> = single_group_regex()
            .find_iter(value)
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["{@}[A](1)", "{#}[B](2)"]);
    }

    #[test]
    fn test_replace_trigger_values() {
        let value = "{@}[Ann](1) and {@}[Bob](2)";
        let replaced = replace_trigger_values(value, |t| format!("{}{}", t.trigger, t.name));
        assert_eq!(replaced, "@Ann and @Bob");
    }

    #[test]
    fn test_replace_without_tokens_is_identity() {
        let value = "plain @text";
        assert_eq!(replace_trigger_values(value, |_| String::new()), value);
    }
}
