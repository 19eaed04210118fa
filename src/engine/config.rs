//! Converter configuration.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// How operators leave the stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Operators are pushed without comparison and only flushed by `)` or
    /// the end of input.
    #[default]
    BracketFlush,
    /// Operators of higher (or equal, left-associative) precedence are
    /// popped before a new operator is pushed.
    Precedence,
}

/// Serializable converter settings.
///
/// ```rust
/// use infix_pda::engine::{ConverterConfig, Mode};
///
/// let config = ConverterConfig::from_json(r#"{ "mode": "precedence" }"#).unwrap();
/// assert_eq!(config.mode, Mode::Precedence);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    pub mode: Mode,
}

impl ConverterConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
