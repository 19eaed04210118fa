//! infix-pda: infix to postfix rewriting checked by a pushdown automaton
//!
//! The crate is a pure core: every operation is a deterministic function of
//! its input, with no I/O and no shared mutable state. Presentation (input
//! widgets, diagram rendering) belongs to callers.
//!
//! # Core Concepts
//!
//! - **Automaton**: a fixed pushdown automaton recognizing well-formed infix
//!   expressions, exportable as a graph
//! - **Engine**: a stack-driven rewriter producing the postfix form, a
//!   push/pop trace and an accept-or-reject verdict
//! - **Validation**: an accumulate-all-errors syntax check
//! - **Reports**: versioned, serializable conversion records
//!
//! # Example
//!
//! ```rust
//! use infix_pda::{convert, Verdict};
//!
//! let result = convert("(a+b)*c").unwrap();
//! assert_eq!(result.postfix, "ab+c*");
//! assert_eq!(result.verdict, Verdict::Accept);
//! assert_eq!(result.trace.lines()[0], "Push(()");
//!
//! let result = convert("a+b#c").unwrap();
//! assert_eq!(result.verdict, Verdict::Reject);
//! ```

pub mod automaton;
pub mod core;
pub mod engine;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use crate::automaton::{AutomatonModel, Verdict};
pub use crate::core::{InputSymbol, Operator, PdaState, StackSymbol, State, Token};
pub use crate::engine::{
    convert, ConversionResult, Converter, ConverterBuilder, ConverterConfig, EngineFault, Mode,
    Step, StepTrace,
};
pub use crate::report::ConversionReport;
pub use crate::validation::{validate, SyntaxError, SyntaxErrorKind};
