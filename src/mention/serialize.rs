//! Parts back to strings.

use super::part::Part;

/// Raw value: tokens in their encoded form, everything else verbatim
pub fn to_raw_value(parts: &[Part]) -> String {
    parts
        .iter()
        .map(|part| match &part.data {
            Some(data) => data.original.as_str(),
            None => part.text.as_str(),
        })
        .collect()
}

/// Display text: every part's text, tokens shown as their display string
pub fn to_plain_text(parts: &[Part]) -> String {
    parts.iter().map(|part| part.text.as_str()).collect()
}
