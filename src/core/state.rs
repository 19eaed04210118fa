//! Automaton states.
//!
//! States are plain values with pure accessors. The `State` trait is what
//! the run history and graph export are written against; `PdaState` is the
//! fixed state set of the infix recognizer.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for automaton states.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: States are copied into the run history
/// - `PartialEq`: States must be comparable for transition lookup
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States travel inside reports and graphs
///
/// # Example
///
/// ```rust
/// use infix_pda::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Parity {
///     Even,
///     Odd,
///     Broken,
/// }
///
/// impl State for Parity {
///     fn name(&self) -> &str {
///         match self {
///             Self::Even => "even",
///             Self::Odd => "odd",
///             Self::Broken => "broken",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Even)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is an accepting state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is a reject (error) state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// States of the infix-expression pushdown automaton.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PdaState {
    /// `q0`: start, awaiting the first operand
    Start,
    /// `q1`: an operand was read, awaiting an operator, `)` or the end
    AfterOperand,
    /// `q2`: an operator was read, awaiting an operand
    AfterOperator,
    /// `q3`: a `(` was read, awaiting an operand inside the group
    Nested,
    /// `q4`: accept sink
    Accept,
    /// `q5`: a group was closed, awaiting an operator, `)` or the end
    AfterGroup,
    /// `q_dead`: reject sink, absorbing
    Dead,
}

impl PdaState {
    /// Every state, in table order.
    pub const ALL: [PdaState; 7] = [
        PdaState::Start,
        PdaState::AfterOperand,
        PdaState::AfterOperator,
        PdaState::Nested,
        PdaState::Accept,
        PdaState::AfterGroup,
        PdaState::Dead,
    ];
}

impl State for PdaState {
    fn name(&self) -> &str {
        match self {
            Self::Start => "q0",
            Self::AfterOperand => "q1",
            Self::AfterOperator => "q2",
            Self::Nested => "q3",
            Self::Accept => "q4",
            Self::AfterGroup => "q5",
            Self::Dead => "q_dead",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Accept)
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Dead)
    }
}

impl fmt::Display for PdaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
