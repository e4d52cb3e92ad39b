//! Rebuilding parts after the widget reports new plain text.
//!
//! The old and new plain texts are diffed per character. Retained runs are
//! cut out of the old parts (keeping tokens that survive whole), inserted
//! runs become fresh plain parts. The result is provisional: the owner
//! serializes it and re-parses, which is what creates new tokens.

use imara_diff::{Algorithm, Diff, Hunk, InternedInput};

use super::part::{reposition, MentionState, Part};
use super::serialize::to_raw_value;
use super::slice::parts_interval;

/// One step of a character diff, in read order of the old text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharChange {
    /// Chars unchanged at the read position
    Retain(usize),
    /// New text with no counterpart in the old text
    Insert(String),
    /// Chars removed at the read position
    Delete(usize),
}

/// Character-level diff of `old` against `new`
pub fn diff_chars(old: &str, new: &str) -> Vec<CharChange> {
    let mut input: InternedInput<char> = InternedInput::default();
    input.update_before(old.chars());
    input.update_after(new.chars());

    // Myers rather than histogram: single characters recur too often for
    // the histogram heuristic to help
    let diff = Diff::compute(Algorithm::Myers, &input);

    let mut changes = Vec::new();
    let mut pos = 0u32;
    for Hunk { before, after } in diff.hunks() {
        if before.start > pos {
            changes.push(CharChange::Retain((before.start - pos) as usize));
        }
        if before.end > before.start {
            changes.push(CharChange::Delete((before.end - before.start) as usize));
        }
        if after.end > after.start {
            let inserted: String = input.after[after.start as usize..after.end as usize]
                .iter()
                .map(|&token| input.interner[token])
                .collect();
            changes.push(CharChange::Insert(inserted));
        }
        pos = before.end;
    }

    let total = input.before.len();
    if total > pos as usize {
        changes.push(CharChange::Retain(total - pos as usize));
    }

    changes
}

/// Parts for `new_plain`, reusing whatever of `old_parts` survived the edit.
///
/// `old_parts` must describe `old_plain`. The returned parts are laid out
/// contiguously from 0 and their text concatenates to `new_plain`.
pub fn reconcile(old_plain: &str, old_parts: &[Part], new_plain: &str) -> Vec<Part> {
    let changes = diff_chars(old_plain, new_plain);
    tracing::trace!(changes = changes.len(), "reconciling plain text edit");

    let mut parts = Vec::new();
    let mut cursor = 0;
    for change in changes {
        match change {
            CharChange::Delete(count) => cursor += count,
            // Never promoted to a token here; only a re-parse can do that
            CharChange::Insert(text) => parts.push(Part::plain(text, 0)),
            CharChange::Retain(count) => {
                parts.extend(parts_interval(old_parts, cursor, count));
                cursor += count;
            }
        }
    }

    reposition(parts, 0)
}

/// Raw value after the widget changed the plain text of `state` to `changed_text`
pub fn value_from_changed_text(state: &MentionState, changed_text: &str) -> String {
    to_raw_value(&reconcile(&state.plain_text, &state.parts, changed_text))
}
