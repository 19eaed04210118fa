//! Automaton run history.
//!
//! Records every move an automaton makes while reading one input, so
//! callers can replay the path through the state graph.

use super::state::State;
use super::symbol::InputSymbol;
use serde::{Deserialize, Serialize};

/// Record of a single move.
///
/// # Example
///
/// ```rust
/// use infix_pda::core::{InputSymbol, PdaState, StateTransition};
///
/// let transition = StateTransition {
///     from: PdaState::Start,
///     to: PdaState::AfterOperand,
///     input: InputSymbol::Operand,
/// };
/// assert_eq!(transition.to, PdaState::AfterOperand);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// The symbol that was read
    pub input: InputSymbol,
}

/// Ordered history of moves.
///
/// `record` consumes the history and hands back the extended one, so a
/// history value is never changed behind a caller's back.
///
/// # Example
///
/// ```rust
/// use infix_pda::core::{InputSymbol, PdaState, StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: PdaState::Start,
///         to: PdaState::AfterOperand,
///         input: InputSymbol::Operand,
///     })
///     .record(StateTransition {
///         from: PdaState::AfterOperand,
///         to: PdaState::Accept,
///         input: InputSymbol::Epsilon,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // q0 -> q1 -> q4
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: initial state, then
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Index of the first move that entered an error state.
    pub fn first_error(&self) -> Option<usize> {
        self.transitions
            .iter()
            .position(|t| t.to.is_error() && !t.from.is_error())
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no move was recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
