//! Pushdown automaton recognizing well-formed infix expressions.
//!
//! The model is pure data: a transition map keyed by
//! `(state, input symbol, stack top)`. A configuration with no key is an
//! implicit rejection and moves to the absorbing `q_dead` sink. The model is
//! never mutated once built; [`model`] hands out a process-wide shared
//! instance.
//!
//! # Example
//!
//! ```rust
//! use infix_pda::automaton::{self, Verdict};
//!
//! let model = automaton::model();
//! assert_eq!(model.recognize("(a+b)*c"), Verdict::Accept);
//! assert_eq!(model.recognize("a+*b"), Verdict::Reject);
//! ```

mod graph;
mod run;

pub use graph::{Graph, GraphEdge, GraphNode};
pub use run::{Configuration, Run, Verdict};

use crate::core::{InputSymbol, Operator, PdaState, StackSymbol, State};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Lookup key of one transition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TransitionKey {
    pub state: PdaState,
    pub input: InputSymbol,
    pub top: StackSymbol,
}

/// Target of one transition: the next state and the sequence replacing the
/// stack top. The first element of `replace` becomes the new top; an empty
/// sequence pops.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Move {
    pub next: PdaState,
    pub replace: Vec<StackSymbol>,
}

/// The static automaton tuple.
#[derive(Clone, Debug)]
pub struct AutomatonModel {
    states: BTreeSet<PdaState>,
    stack_alphabet: BTreeSet<StackSymbol>,
    transitions: BTreeMap<TransitionKey, Move>,
    start_state: PdaState,
    start_stack_symbol: StackSymbol,
    final_states: BTreeSet<PdaState>,
}

impl AutomatonModel {
    /// Every state of the automaton.
    pub fn states(&self) -> &BTreeSet<PdaState> {
        &self.states
    }

    /// Symbols that can appear on the stack.
    pub fn stack_alphabet(&self) -> &BTreeSet<StackSymbol> {
        &self.stack_alphabet
    }

    /// State every run starts in.
    pub fn start_state(&self) -> PdaState {
        self.start_state
    }

    /// Symbol the stack starts with.
    pub fn start_stack_symbol(&self) -> StackSymbol {
        self.start_stack_symbol
    }

    /// Accepting states.
    pub fn final_states(&self) -> &BTreeSet<PdaState> {
        &self.final_states
    }

    /// All transitions in key order.
    pub fn transitions(&self) -> impl Iterator<Item = (&TransitionKey, &Move)> {
        self.transitions.iter()
    }

    /// Number of defined moves.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Defined move for `(state, input, top)`, if any.
    pub fn lookup(&self, state: PdaState, input: InputSymbol, top: StackSymbol) -> Option<&Move> {
        self.transitions.get(&TransitionKey { state, input, top })
    }

    /// State reached from `config` on `input`, without moving.
    pub fn next_state(&self, config: &Configuration, input: InputSymbol) -> PdaState {
        config
            .top()
            .and_then(|top| self.lookup(config.state, input, top))
            .map_or(PdaState::Dead, |m| m.next)
    }

    /// Apply one move to `config` in place and return the new state.
    ///
    /// An undefined move (or an empty stack) lands in `q_dead` and leaves the
    /// stack untouched.
    pub fn apply(&self, config: &mut Configuration, input: InputSymbol) -> PdaState {
        let found = config
            .top()
            .and_then(|top| self.lookup(config.state, input, top));

        match found {
            Some(m) => {
                config.stack.pop();
                config.stack.extend(m.replace.iter().rev().copied());
                config.state = m.next;
            }
            None => config.state = PdaState::Dead,
        }
        config.state
    }

    /// Run the automaton over a whole expression.
    pub fn recognize(&self, expression: &str) -> Verdict {
        let mut run = Run::new(self);
        for c in expression.chars() {
            run.feed(InputSymbol::from_char(c));
        }
        run.finish()
    }

    /// Directed-graph description for external renderers.
    pub fn graph(&self) -> Graph {
        Graph::from_model(self)
    }

    /// Graphviz DOT rendering of [`AutomatonModel::graph`].
    pub fn to_dot(&self) -> String {
        self.graph().to_dot()
    }
}

/// Shared, lazily built model.
pub fn model() -> &'static AutomatonModel {
    static MODEL: OnceLock<AutomatonModel> = OnceLock::new();
    MODEL.get_or_init(build)
}

/// Build the fixed transition table.
pub fn build() -> AutomatonModel {
    use InputSymbol::{Close, Epsilon, Open, Operand, Other};
    use PdaState::{AfterGroup, AfterOperand, AfterOperator, Dead, Nested, Start};

    let z0 = StackSymbol::Bottom;
    let open = StackSymbol::Open;
    let both = [z0, open];

    let mut table = TableBuilder::default();

    // q0: start, the stack only holds Z0
    table.add(Start, Operand, z0, AfterOperand, &[z0]);
    table.add(Start, Open, z0, Nested, &[open, z0]);
    table.operators(Start, z0, Dead, &[z0]);
    table.add(Start, Close, z0, Dead, &[z0]);
    table.add(Start, Epsilon, z0, PdaState::Accept, &[z0]);

    // q1: after an operand
    for top in both {
        table.add(AfterOperand, Operand, top, AfterOperand, &[top]);
        table.operators(AfterOperand, top, AfterOperator, &[top]);
        table.add(AfterOperand, Open, top, Dead, &[top]);
    }
    table.add(AfterOperand, Close, open, AfterGroup, &[]);
    table.add(AfterOperand, Close, z0, Dead, &[z0]);
    table.add(AfterOperand, Epsilon, z0, PdaState::Accept, &[z0]);

    // q5: after a closed group
    for top in both {
        table.operators(AfterGroup, top, AfterOperator, &[top]);
        table.add(AfterGroup, Operand, top, Dead, &[top]);
        table.add(AfterGroup, Open, top, Dead, &[top]);
    }
    table.add(AfterGroup, Close, open, AfterGroup, &[]);
    table.add(AfterGroup, Close, z0, Dead, &[z0]);
    table.add(AfterGroup, Epsilon, z0, PdaState::Accept, &[z0]);

    // q2: after an operator
    for top in both {
        table.add(AfterOperator, Operand, top, AfterOperand, &[top]);
        table.add(AfterOperator, Open, top, Nested, &[open, top]);
        table.operators(AfterOperator, top, Dead, &[top]);
        table.add(AfterOperator, Close, top, Dead, &[top]);
    }

    // q3: just inside a group, the top is always `(`
    table.add(Nested, Operand, open, AfterOperand, &[open]);
    table.add(Nested, Open, open, Nested, &[open, open]);
    table.operators(Nested, open, Dead, &[open]);
    table.add(Nested, Close, open, Dead, &[open]);

    // unrecognized characters reject from every live configuration
    for (state, tops) in [
        (Start, &[z0][..]),
        (AfterOperand, &both[..]),
        (AfterOperator, &both[..]),
        (Nested, &[open][..]),
        (AfterGroup, &both[..]),
        (PdaState::Accept, &[z0][..]),
    ] {
        for &top in tops {
            table.add(state, Other, top, Dead, &[top]);
        }
    }

    // q4: stable on trailing empty input
    table.add(PdaState::Accept, Epsilon, z0, PdaState::Accept, &[z0]);

    // q_dead: absorbing
    for input in InputSymbol::all() {
        for top in both {
            table.add(Dead, input, top, Dead, &[top]);
        }
    }

    AutomatonModel {
        states: PdaState::ALL.into_iter().collect(),
        stack_alphabet: both.into_iter().collect(),
        transitions: table.transitions,
        start_state: Start,
        start_stack_symbol: z0,
        final_states: PdaState::ALL.into_iter().filter(|s| s.is_final()).collect(),
    }
}

#[derive(Default)]
struct TableBuilder {
    transitions: BTreeMap<TransitionKey, Move>,
}

impl TableBuilder {
    fn add(
        &mut self,
        state: PdaState,
        input: InputSymbol,
        top: StackSymbol,
        next: PdaState,
        replace: &[StackSymbol],
    ) {
        self.transitions.insert(
            TransitionKey { state, input, top },
            Move {
                next,
                replace: replace.to_vec(),
            },
        );
    }

    fn operators(
        &mut self,
        state: PdaState,
        top: StackSymbol,
        next: PdaState,
        replace: &[StackSymbol],
    ) {
        for op in Operator::ALL {
            self.add(state, InputSymbol::Operator(op), top, next, replace);
        }
    }
}
