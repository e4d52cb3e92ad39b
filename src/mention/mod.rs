//! Text/structure model for fields with inline tokens.
//!
//! A field's raw value interleaves plain text with encoded tokens
//! (`{@}[Mike](7)`) and spans recognized by patterns. This module converts
//! between that raw value and the structure the text widget works with:
//!
//! - [`parse_value`]: raw value -> [`MentionState`] (plain text + ordered [`Part`]s)
//! - [`parts_interval`]: sub-range of a part sequence by char offsets
//! - [`reconcile`]: previous state + newly typed plain text -> provisional parts
//! - [`keywords_by_trigger`]: what the user is typing after each trigger
//! - [`apply_suggestion`]: replace an in-progress keyword with a token
//! - [`to_raw_value`] / [`to_plain_text`]: parts -> strings
//!
//! # Architecture
//!
//! Everything here is a pure function over its inputs. The only state that
//! crosses calls is the [`MentionState`] the owner keeps from the previous
//! parse, which must be the parse of the immediately preceding raw value.
//! After every edit the owner serializes the reconciled parts and re-parses,
//! since an edit can both create and destroy tokens.
//!
//! # Example
//!
//! ```
//! use mention_field::config::ConfigSet;
//! use mention_field::mention::{parse_value, reconcile, to_raw_value};
//!
//! let configs = ConfigSet::mentions();
//! let state = parse_value("Hi {@}[Mike](7)", &configs);
//! assert_eq!(state.plain_text, "Hi @Mike");
//!
//! let parts = reconcile(&state.plain_text, &state.parts, "Hi @Mike!");
//! assert_eq!(to_raw_value(&parts), "Hi {@}[Mike](7)!");
//! ```

pub mod codec;
mod keyword;
mod parser;
mod part;
mod reconcile;
mod selection;
mod serialize;
mod slice;
mod suggestion;

pub use codec::{decode_token, encode_token, replace_trigger_values};
pub use keyword::{keyword_for, keywords_by_trigger};
pub use parser::{parse_entries, parse_value};
pub use part::{reposition, MentionState, Part, Position, Suggestion, TokenData};
pub use reconcile::{diff_chars, reconcile, value_from_changed_text, CharChange};
pub use selection::Selection;
pub use serialize::{to_plain_text, to_raw_value};
pub use slice::parts_interval;
pub use suggestion::{apply_suggestion, insert_suggestion, AppliedSuggestion};
