//! Step trace of one conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic line recorded when the input is found invalid.
pub const INVALID_INPUT: &str = "Invalid input encountered. Going to dead state.";

/// One recorded operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// A token was pushed (operands count as pushes onto the output)
    Push(char),
    /// A symbol was popped
    Pop,
    /// The input was found invalid
    Invalid,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(c) => write!(f, "Push({c})"),
            Self::Pop => f.write_str("Pop()"),
            Self::Invalid => f.write_str(INVALID_INPUT),
        }
    }
}

/// Append-only, ordered record of steps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTrace {
    steps: Vec<Step>,
}

impl StepTrace {
    /// Empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub(crate) fn clear(&mut self) {
        self.steps.clear();
    }

    /// Recorded steps, oldest first.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Human-readable form, one line per step.
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether the diagnostic line was recorded.
    pub fn has_invalid(&self) -> bool {
        self.steps.contains(&Step::Invalid)
    }

    /// How often `step` occurs.
    pub fn count(&self, step: Step) -> usize {
        self.steps.iter().filter(|s| **s == step).count()
    }
}

impl fmt::Display for StepTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_render_the_trace_vocabulary() {
        assert_eq!(Step::Push('a').to_string(), "Push(a)");
        assert_eq!(Step::Push('(').to_string(), "Push(()");
        assert_eq!(Step::Pop.to_string(), "Pop()");
        assert_eq!(Step::Invalid.to_string(), INVALID_INPUT);
    }

    #[test]
    fn trace_keeps_recording_order() {
        let mut trace = StepTrace::new();
        trace.record(Step::Push('a'));
        trace.record(Step::Push('+'));
        trace.record(Step::Pop);

        assert_eq!(trace.lines(), vec!["Push(a)", "Push(+)", "Pop()"]);
        assert_eq!(trace.to_string(), "Push(a)\nPush(+)\nPop()\n");
        assert_eq!(trace.count(Step::Pop), 1);
        assert!(!trace.has_invalid());
    }

    #[test]
    fn clear_empties_the_trace() {
        let mut trace = StepTrace::new();
        trace.record(Step::Invalid);
        assert!(trace.has_invalid());
        trace.clear();
        assert!(trace.is_empty());
    }
}
