//! Trigger and pattern configuration
//!
//! A [`ConfigSet`] describes which inline tokens a field recognizes: trigger
//! configs (`@` mentions, `#` tags, ...) that produce token parts with
//! suggestion support, and pattern configs (urls, ...) that only mark spans.
//!
//! Sets can be built in code or loaded from `~/.config/mention-field/config.yaml`:
//!
//! ```yaml
//! triggers:
//!   mention: { trigger: "@", insert_space_after_token: true }
//!   hashtag: { trigger: "#", allowed_spaces_count: 0 }
//! patterns:
//!   url: { pattern: "https?://\\S+" }
//! ```

use std::path::Path;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::mention::codec;
use crate::mention::{Suggestion, TokenData};

/// Spaces allowed inside a keyword before tracking is cancelled
pub const DEFAULT_ALLOWED_SPACES_COUNT: usize = 1;

/// Builds the display string of a token part
pub type PlainStringFn = fn(&TokenData) -> String;

/// Decodes a matched raw substring into token data (None = not a token)
pub type DecodeFn = fn(&str) -> Option<TokenData>;

/// Encodes a chosen suggestion into its raw value form
pub type EncodeFn = fn(&Suggestion) -> String;

/// Custom raw encoding for a trigger.
///
/// `pattern` must match exactly the strings `decode` understands and that
/// `encode` produces; the whole match is handed to `decode`.
#[derive(Debug, Clone)]
pub struct CustomCodec {
    pub pattern: Regex,
    pub decode: DecodeFn,
    pub encode: EncodeFn,
}

/// A trigger definition such as `@` for mentions
#[derive(Debug, Clone)]
pub struct TriggerConfig {
    /// Trigger string, usually one character (`@`, `#`)
    pub trigger: String,

    /// How many spaces a keyword may contain before tracking is cancelled
    pub allowed_spaces_count: usize,

    /// Insert a space after an accepted suggestion at the end of a row
    pub insert_space_after_token: bool,

    /// Custom raw encoding (None = canonical `{trigger}[name](id)`)
    pub codec: Option<CustomCodec>,

    /// Custom display string (None = trigger + name)
    pub plain_string: Option<PlainStringFn>,
}

impl TriggerConfig {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            allowed_spaces_count: DEFAULT_ALLOWED_SPACES_COUNT,
            insert_space_after_token: false,
            codec: None,
            plain_string: None,
        }
    }

    pub fn with_allowed_spaces(mut self, count: usize) -> Self {
        self.allowed_spaces_count = count;
        self
    }

    pub fn with_space_after_token(mut self, insert: bool) -> Self {
        self.insert_space_after_token = insert;
        self
    }

    pub fn with_codec(mut self, codec: CustomCodec) -> Self {
        self.codec = Some(codec);
        self
    }

    pub fn with_plain_string(mut self, plain_string: PlainStringFn) -> Self {
        self.plain_string = Some(plain_string);
        self
    }

    /// Expression that finds this trigger's tokens in a raw value
    pub fn pattern(&self) -> &Regex {
        match &self.codec {
            Some(codec) => &codec.pattern,
            None => codec::single_group_regex(),
        }
    }

    /// Decode a matched substring; None when it is not a well-formed token
    pub fn decode(&self, matched: &str) -> Option<TokenData> {
        match &self.codec {
            Some(codec) => (codec.decode)(matched),
            None => codec::decode_token(matched),
        }
    }

    /// Raw value form of a suggestion
    pub fn encode(&self, suggestion: &Suggestion) -> String {
        match &self.codec {
            Some(codec) => (codec.encode)(suggestion),
            None => codec::encode_token(&self.trigger, suggestion),
        }
    }

    /// Display text of a token
    pub fn display(&self, data: &TokenData) -> String {
        match self.plain_string {
            Some(plain_string) => plain_string(data),
            None => format!("{}{}", self.trigger, data.name),
        }
    }
}

/// A styling-only pattern such as urls
#[derive(Debug, Clone)]
pub struct PatternConfig {
    pub pattern: Regex,
}

impl PatternConfig {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        Regex::new(pattern)
            .map(|pattern| Self { pattern })
            .map_err(|e| ConfigError::InvalidPattern(format!("{}: {}", pattern, e)))
    }
}

/// Either kind of part definition
#[derive(Debug, Clone)]
pub enum PartConfig {
    Trigger(TriggerConfig),
    Pattern(PatternConfig),
}

impl PartConfig {
    /// Expression used to split raw values
    pub fn regex(&self) -> &Regex {
        match self {
            PartConfig::Trigger(trigger) => trigger.pattern(),
            PartConfig::Pattern(pattern) => &pattern.pattern,
        }
    }

    pub fn as_trigger(&self) -> Option<&TriggerConfig> {
        match self {
            PartConfig::Trigger(trigger) => Some(trigger),
            PartConfig::Pattern(_) => None,
        }
    }
}

/// Identifies the config that produced a part
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum ConfigRef {
    Trigger(String),
    Pattern(String),
}

/// A named config within a set
#[derive(Debug, Clone)]
pub struct ConfigEntry {
    pub name: String,
    pub config: PartConfig,
}

impl ConfigEntry {
    pub fn reference(&self) -> ConfigRef {
        match self.config {
            PartConfig::Trigger(_) => ConfigRef::Trigger(self.name.clone()),
            PartConfig::Pattern(_) => ConfigRef::Pattern(self.name.clone()),
        }
    }
}

/// Ordered set of configs: triggers first, then patterns.
///
/// Earlier entries take precedence when parsing. Keep one set alive for a
/// whole editing session; the controller only re-parses when handed a
/// different set.
#[derive(Debug, Clone, Default)]
pub struct ConfigSet {
    entries: Vec<ConfigEntry>,
    trigger_count: usize,
}

impl ConfigSet {
    /// Combine trigger and pattern maps into one ordered set
    pub fn new(
        triggers: IndexMap<String, TriggerConfig>,
        patterns: IndexMap<String, PatternConfig>,
    ) -> Self {
        let mut set = Self::default();
        for (name, trigger) in triggers {
            set = set.with_trigger(name, trigger);
        }
        for (name, pattern) in patterns {
            set = set.with_pattern(name, pattern);
        }
        set
    }

    /// The set used when no configuration file exists: `@` mentions
    pub fn mentions() -> Self {
        Self::default().with_trigger(
            "mention",
            TriggerConfig::new("@").with_space_after_token(true),
        )
    }

    /// Add a trigger after the existing triggers (and before all patterns).
    /// A trigger with the same name is replaced in place.
    pub fn with_trigger(mut self, name: impl Into<String>, config: TriggerConfig) -> Self {
        let name = name.into();
        let entry = ConfigEntry {
            name: name.clone(),
            config: PartConfig::Trigger(config),
        };
        match self.entries[..self.trigger_count]
            .iter()
            .position(|e| e.name == name)
        {
            Some(idx) => self.entries[idx] = entry,
            None => {
                self.entries.insert(self.trigger_count, entry);
                self.trigger_count += 1;
            }
        }
        self
    }

    /// Add a pattern after all existing entries.
    /// A pattern with the same name is replaced in place.
    pub fn with_pattern(mut self, name: impl Into<String>, config: PatternConfig) -> Self {
        let name = name.into();
        let entry = ConfigEntry {
            name: name.clone(),
            config: PartConfig::Pattern(config),
        };
        match self.entries[self.trigger_count..]
            .iter()
            .position(|e| e.name == name)
        {
            Some(idx) => self.entries[self.trigger_count + idx] = entry,
            None => self.entries.push(entry),
        }
        self
    }

    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Trigger configs in precedence order
    pub fn triggers(&self) -> impl Iterator<Item = (&str, &TriggerConfig)> {
        self.entries[..self.trigger_count]
            .iter()
            .filter_map(|e| e.config.as_trigger().map(|t| (e.name.as_str(), t)))
    }

    pub fn trigger(&self, name: &str) -> Option<&TriggerConfig> {
        self.triggers().find(|(n, _)| *n == name).map(|(_, t)| t)
    }

    /// Load the set from the default config file, or return [`ConfigSet::mentions`]
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::mentions();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::mentions();
        }

        match load_config_file(&path) {
            Ok(set) => {
                tracing::info!("Loaded config from {}", path.display());
                set
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::mentions()
            }
        }
    }
}

/// Root structure of a config YAML file
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub triggers: IndexMap<String, TriggerEntry>,
    #[serde(default)]
    pub patterns: IndexMap<String, PatternEntry>,
}

/// A trigger entry from YAML
#[derive(Debug, Deserialize)]
pub struct TriggerEntry {
    pub trigger: String,
    #[serde(default = "default_allowed_spaces")]
    pub allowed_spaces_count: usize,
    #[serde(default)]
    pub insert_space_after_token: bool,
}

/// A pattern entry from YAML
#[derive(Debug, Deserialize)]
pub struct PatternEntry {
    pub pattern: String,
}

fn default_allowed_spaces() -> usize {
    DEFAULT_ALLOWED_SPACES_COUNT
}

/// Load a config set from a YAML file
pub fn load_config_file(path: &Path) -> Result<ConfigSet, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

    parse_config_yaml(&content)
}

/// Parse a config set from a YAML string
pub fn parse_config_yaml(yaml: &str) -> Result<ConfigSet, ConfigError> {
    let file: ConfigFile =
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;

    let mut set = ConfigSet::default();
    for (name, entry) in file.triggers {
        if entry.trigger.is_empty() {
            return Err(ConfigError::InvalidTrigger(format!(
                "trigger '{}' has an empty trigger string",
                name
            )));
        }
        let trigger = TriggerConfig::new(entry.trigger)
            .with_allowed_spaces(entry.allowed_spaces_count)
            .with_space_after_token(entry.insert_space_after_token);
        set = set.with_trigger(name, trigger);
    }
    for (name, entry) in file.patterns {
        set = set.with_pattern(name, PatternConfig::new(&entry.pattern)?);
    }

    Ok(set)
}

/// Errors from building or loading a config set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    InvalidPattern(String),
    InvalidTrigger(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::InvalidPattern(p) => write!(f, "Invalid pattern: {}", p),
            ConfigError::InvalidTrigger(t) => write!(f, "Invalid trigger: {}", t),
        }
    }
}

impl std::error::Error for ConfigError {}
