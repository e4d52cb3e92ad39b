//! Debug tracing for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,field=debug` - scoped filtering
//! - `RUST_LOG=mention_field::mention=trace` - module-level filtering

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::mention::Selection;
use crate::model::MentionInput;

/// Initialize the console tracing subscriber
///
/// Output goes to stderr so command output on stdout stays parseable.
/// Respects RUST_LOG, defaulting to `warn`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    tracing_subscriber::registry().with(console_layer).init();
}

/// Lightweight snapshot of field state for diffing
#[derive(Debug, Clone)]
pub struct FieldSnapshot {
    pub plain_len: usize,
    pub part_count: usize,
    pub token_count: usize,
    pub selection: Selection,
}

impl FieldSnapshot {
    pub fn from_model(model: &MentionInput) -> Self {
        Self {
            plain_len: model.plain_text().chars().count(),
            part_count: model.parts().len(),
            token_count: model.parts().iter().filter(|p| p.is_token()).count(),
            selection: model.selection(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &FieldSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.plain_len != other.plain_len {
            changes.push(format!("length: {} → {}", self.plain_len, other.plain_len));
        }
        if self.part_count != other.part_count {
            changes.push(format!("parts: {} → {}", self.part_count, other.part_count));
        }
        if self.token_count != other.token_count {
            changes.push(format!(
                "tokens: {} → {}",
                self.token_count, other.token_count
            ));
        }
        if self.selection != other.selection {
            changes.push(format!(
                "selection: {}..{} → {}..{}",
                self.selection.start, self.selection.end, other.selection.start, other.selection.end
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
