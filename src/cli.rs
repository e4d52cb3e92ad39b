//! Command-line interface
//!
//! Each subcommand drives a [`MentionInput`] through [`update`] the same way
//! a text widget would, then prints the result on stdout.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indexmap::IndexMap;

use crate::commands::Cmd;
use crate::config::{load_config_file, ConfigSet};
use crate::mention::{Selection, Suggestion};
use crate::messages::Msg;
use crate::model::MentionInput;
use crate::update::update;

/// Inspect and edit raw values with embedded mention tokens
#[derive(Parser, Debug)]
#[command(
    name = "mention-field",
    version,
    about = "Inspect and edit raw values with embedded mention tokens"
)]
pub struct CliArgs {
    /// Config file (defaults to the user config, then to the built-in `@` mention)
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the parts of a raw value as JSON
    Parse { value: String },

    /// Print the plain text of a raw value
    Plain { value: String },

    /// Print the keyword of every trigger at a selection as JSON
    Keywords {
        value: String,
        /// Selection start, in characters of the plain text
        #[arg(long, value_name = "N")]
        cursor: usize,
        /// Selection end (defaults to the cursor)
        #[arg(long, value_name = "N")]
        end: Option<usize>,
    },

    /// Accept a suggestion at the cursor and print the new raw value
    Apply {
        value: String,
        #[arg(long, value_name = "N")]
        cursor: usize,
        /// Trigger name, as configured
        #[arg(long)]
        trigger: String,
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
    },

    /// Replace the plain text and print the reconciled raw value
    Edit { value: String, new_plain: String },
}

impl CliArgs {
    /// Config set selected by `--config`, or the user's
    pub fn load_configs(&self) -> Result<ConfigSet> {
        match &self.config {
            Some(path) => load_config_file(path)
                .with_context(|| format!("failed to load config {}", path.display())),
            None => Ok(ConfigSet::load()),
        }
    }
}

impl Command {
    /// Run against `configs`, returning what to print
    pub fn run(&self, configs: Arc<ConfigSet>) -> Result<String> {
        match self {
            Command::Parse { value } => {
                let model = MentionInput::new(value.as_str(), configs);
                Ok(serde_json::to_string_pretty(model.state())?)
            }
            Command::Plain { value } => {
                let model = MentionInput::new(value.as_str(), configs);
                Ok(model.plain_text().to_string())
            }
            Command::Keywords { value, cursor, end } => {
                let mut model = MentionInput::new(value.as_str(), configs);
                let selection = Selection::new(*cursor, end.unwrap_or(*cursor));
                update(&mut model, Msg::SelectionChanged(selection));
                let keywords: IndexMap<String, Option<String>> = model
                    .triggers()
                    .into_iter()
                    .map(|(name, state)| (name, state.keyword))
                    .collect();
                Ok(serde_json::to_string_pretty(&keywords)?)
            }
            Command::Apply {
                value,
                cursor,
                trigger,
                id,
                name,
            } => {
                if configs.trigger(trigger).is_none() {
                    bail!("unknown trigger '{}'", trigger);
                }
                let mut model = MentionInput::new(value.as_str(), configs);
                update(
                    &mut model,
                    Msg::SelectionChanged(Selection::collapsed(*cursor)),
                );
                let msg = Msg::SuggestionSelected {
                    trigger: trigger.clone(),
                    suggestion: Suggestion::new(id.as_str(), name.as_str()),
                };
                match update(&mut model, msg) {
                    Some(cmd) => Ok(cmd
                        .changed_value()
                        .unwrap_or(model.value())
                        .to_string()),
                    None => bail!("no '{}' keyword at position {}", trigger, cursor),
                }
            }
            Command::Edit { value, new_plain } => {
                let mut model = MentionInput::new(value.as_str(), configs);
                let cmd = update(&mut model, Msg::TextChanged(new_plain.clone()));
                Ok(cmd
                    .as_ref()
                    .and_then(Cmd::changed_value)
                    .unwrap_or(model.value())
                    .to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: Command) -> Result<String> {
        command.run(Arc::new(ConfigSet::mentions()))
    }

    #[test]
    fn test_parse_args() {
        let args = CliArgs::parse_from(["mention-field", "plain", "{@}[Ann](1)"]);
        assert_eq!(args.config, None);
        assert_eq!(
            args.command,
            Command::Plain {
                value: "{@}[Ann](1)".into()
            }
        );
    }

    #[test]
    fn test_global_config_flag() {
        let args = CliArgs::parse_from([
            "mention-field",
            "keywords",
            "hi @a",
            "--cursor",
            "5",
            "--config",
            "custom.yaml",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("custom.yaml")));
        assert!(matches!(args.command, Command::Keywords { cursor: 5, end: None, .. }));
    }

    #[test]
    fn test_plain_command() {
        let out = run(Command::Plain {
            value: "hi {@}[Ann](1)".into(),
        });
        assert_eq!(out.unwrap(), "hi @Ann");
    }

    #[test]
    fn test_parse_command_emits_json() {
        let out = run(Command::Parse {
            value: "{@}[Ann](1)".into(),
        })
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["plain_text"], "@Ann");
        assert_eq!(json["parts"][0]["data"]["id"], "1");
    }

    #[test]
    fn test_keywords_command() {
        let out = run(Command::Keywords {
            value: "hi @an".into(),
            cursor: 6,
            end: None,
        })
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["mention"], "an");
    }

    #[test]
    fn test_apply_command() {
        let out = run(Command::Apply {
            value: "hi @an".into(),
            cursor: 6,
            trigger: "mention".into(),
            id: "1".into(),
            name: "Ann".into(),
        });
        assert_eq!(out.unwrap(), "hi {@}[Ann](1) ");
    }

    #[test]
    fn test_apply_unknown_trigger_fails() {
        let out = run(Command::Apply {
            value: "hi @an".into(),
            cursor: 6,
            trigger: "tag".into(),
            id: "1".into(),
            name: "Ann".into(),
        });
        assert!(out.is_err());
    }

    #[test]
    fn test_apply_without_keyword_fails() {
        let out = run(Command::Apply {
            value: "hi an".into(),
            cursor: 5,
            trigger: "mention".into(),
            id: "1".into(),
            name: "Ann".into(),
        });
        assert!(out.is_err());
    }

    #[test]
    fn test_edit_command() {
        let out = run(Command::Edit {
            value: "{@}[Ann](1) hi".into(),
            new_plain: "@Ann hi there".into(),
        });
        assert_eq!(out.unwrap(), "{@}[Ann](1) hi there");
    }

    #[test]
    fn test_edit_without_change_echoes_value() {
        let out = run(Command::Edit {
            value: "{@}[Ann](1)".into(),
            new_plain: "@Ann".into(),
        });
        assert_eq!(out.unwrap(), "{@}[Ann](1)");
    }
}
