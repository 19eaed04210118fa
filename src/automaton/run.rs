//! Simulation of the automaton over one input.

use super::AutomatonModel;
use crate::core::{InputSymbol, PdaState, StackSymbol, State, StateHistory, StateTransition};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Instantaneous description: current state plus stack (top is last).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub state: PdaState,
    pub stack: Vec<StackSymbol>,
}

impl Configuration {
    /// Start state with only the start stack symbol.
    pub fn initial(model: &AutomatonModel) -> Self {
        Self {
            state: model.start_state(),
            stack: vec![model.start_stack_symbol()],
        }
    }

    /// Current stack top, `None` once the stack is empty.
    pub fn top(&self) -> Option<StackSymbol> {
        self.stack.last().copied()
    }

    /// Number of open groups on the stack.
    pub fn depth(&self) -> usize {
        self.stack
            .iter()
            .filter(|s| **s == StackSymbol::Open)
            .count()
    }
}

/// Accept-or-reject outcome of a run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    /// Verdict for a run that ended in `state`.
    pub fn of<S: State>(state: &S) -> Self {
        if state.is_final() && !state.is_error() {
            Self::Accept
        } else {
            Self::Reject
        }
    }

    /// Whether this is [`Verdict::Accept`].
    pub fn is_accept(self) -> bool {
        self == Self::Accept
    }
}

/// A single pass of the automaton over an input, one symbol at a time.
///
/// The run owns its configuration and history; the model is only read.
pub struct Run<'m> {
    model: &'m AutomatonModel,
    config: Configuration,
    history: StateHistory<PdaState>,
}

impl<'m> Run<'m> {
    /// Fresh run at the model's start configuration.
    pub fn new(model: &'m AutomatonModel) -> Self {
        Self {
            model,
            config: Configuration::initial(model),
            history: StateHistory::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> PdaState {
        self.config.state
    }

    /// Current state and stack.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Whether the run has fallen into `q_dead`.
    pub fn is_rejected(&self) -> bool {
        self.config.state.is_error()
    }

    /// Moves made so far.
    pub fn history(&self) -> &StateHistory<PdaState> {
        &self.history
    }

    /// Read one symbol and return the state entered.
    pub fn feed(&mut self, input: InputSymbol) -> PdaState {
        let from = self.config.state;
        let to = self.model.apply(&mut self.config, input);

        trace!("{from} --{input}--> {to}");
        if to.is_error() && !from.is_error() {
            debug!("automaton rejected at {from} on '{input}'");
        }

        self.history = std::mem::take(&mut self.history).record(StateTransition {
            from,
            to,
            input,
        });
        to
    }

    /// Read the end of input and return the verdict.
    pub fn finish(mut self) -> Verdict {
        self.finish_with_history().0
    }

    /// Like [`Run::finish`], also handing back the recorded history.
    pub fn finish_with_history(&mut self) -> (Verdict, StateHistory<PdaState>) {
        let state = self.feed(InputSymbol::Epsilon);
        (Verdict::of(&state), std::mem::take(&mut self.history))
    }
}
