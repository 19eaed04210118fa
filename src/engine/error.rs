//! Engine and configuration errors.

use thiserror::Error;

/// Internal contract violations of the rewriting engine.
///
/// Syntax errors in the input are never reported here; they show up in the
/// trace and the verdict of the conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineFault {
    #[error("Pop from an empty stack")]
    StackUnderflow,
}

/// Errors raised while loading a converter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid converter configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}
