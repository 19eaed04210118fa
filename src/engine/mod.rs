//! Rewriting engine.
//!
//! Scans an infix expression left to right with an explicit operator stack,
//! producing the postfix form and a trace of every push and pop. The
//! automaton is simulated alongside the scan; the engine keeps its own
//! verdict and never touches the shared model.
//!
//! # Modes
//!
//! - [`Mode::BracketFlush`] (default): operators are pushed without any
//!   precedence comparison and only leave the stack on `)` or at the end
//!   of input, so `a*b+c` becomes `abc+*`.
//! - [`Mode::Precedence`]: shunting-yard ordering, `a*b+c` becomes `ab*c+`.

mod builder;
mod config;
mod converter;
mod error;
mod stack;
mod trace;

pub use builder::ConverterBuilder;
pub use config::{ConverterConfig, Mode};
pub use converter::{convert, ConversionResult, Converter};
pub use error::{ConfigError, EngineFault};
pub use stack::OperatorStack;
pub use trace::{Step, StepTrace, INVALID_INPUT};
