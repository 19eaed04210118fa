//! Builder for converters.

use super::config::{ConverterConfig, Mode};
use super::converter::Converter;

/// Fluent construction of a [`Converter`].
///
/// ```rust
/// use infix_pda::engine::{ConverterBuilder, Mode};
///
/// let mut converter = ConverterBuilder::new().mode(Mode::Precedence).build();
/// assert_eq!(converter.convert("a*b+c").unwrap().postfix, "ab*c+");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConverterBuilder {
    config: ConverterConfig,
}

impl ConverterBuilder {
    /// Builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Set the conversion mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn build(self) -> Converter {
        Converter::with_config(self.config)
    }
}
