//! Core automaton vocabulary.
//!
//! This module contains the value types everything else is built from:
//! - States via the `State` trait and the fixed `PdaState` set
//! - Tokens, input symbols and stack symbols
//! - Immutable run history
//!
//! Nothing in this module has side effects.

mod history;
mod state;
mod symbol;

pub use history::{StateHistory, StateTransition};
pub use state::{PdaState, State};
pub use symbol::{InputSymbol, Operator, StackSymbol, Token};
