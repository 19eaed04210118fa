//! Infix to postfix rewriting.

use super::config::{ConverterConfig, Mode};
use super::error::EngineFault;
use super::stack::OperatorStack;
use super::trace::{Step, StepTrace};
use crate::automaton::{self, AutomatonModel, Run, Verdict};
use crate::core::{InputSymbol, Operator, PdaState, StackSymbol, StateHistory, Token};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

/// Outcome of one conversion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Postfix form, no separators
    pub postfix: String,
    /// Every stack operation, in order
    pub trace: StepTrace,
    /// Accept or reject
    pub verdict: Verdict,
    /// Moves of the automaton, ending with the end-of-input move
    pub path: StateHistory<PdaState>,
}

impl ConversionResult {
    /// Whether the verdict is accept.
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accept()
    }
}

/// Reusable rewriting engine.
///
/// A converter owns its stack, output buffer and trace across calls; all of
/// them are reset at the start of every [`Converter::convert`].
///
/// # Example
///
/// ```rust
/// use infix_pda::engine::Converter;
///
/// let mut converter = Converter::new();
/// let result = converter.convert("(a+b)*c").unwrap();
/// assert_eq!(result.postfix, "ab+c*");
/// assert!(result.is_accepted());
/// ```
pub struct Converter {
    config: ConverterConfig,
    model: &'static AutomatonModel,
    stack: OperatorStack,
    output: String,
    trace: StepTrace,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Converter in the default bracket-flush mode.
    pub fn new() -> Self {
        Self::with_config(ConverterConfig::default())
    }

    /// Converter driven by `config`.
    pub fn with_config(config: ConverterConfig) -> Self {
        Self {
            config,
            model: automaton::model(),
            stack: OperatorStack::new(),
            output: String::new(),
            trace: StepTrace::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Active conversion mode.
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Rewrite `expression` into postfix.
    ///
    /// Syntax errors never fail the call: they are recorded in the trace and
    /// turn the verdict into [`Verdict::Reject`], and scanning carries on.
    /// An `Err` is only returned when the stack contract is broken.
    pub fn convert(&mut self, expression: &str) -> Result<ConversionResult, EngineFault> {
        self.reset();
        debug!("converting {expression:?} ({:?})", self.config.mode);

        let mut run = Run::new(self.model);
        let mut rejected = false;

        for c in expression.chars() {
            let token = Token::classify(c);
            run.feed(token.map_or(InputSymbol::Other, InputSymbol::from));

            let matched = match token {
                Some(Token::Operand(c)) => {
                    self.output.push(c);
                    self.trace.record(Step::Push(c));
                    true
                }
                Some(Token::Open) => {
                    self.stack.push(StackSymbol::Open);
                    self.trace.record(Step::Push('('));
                    true
                }
                Some(Token::Operator(op)) => {
                    if self.config.mode == Mode::Precedence {
                        self.yield_to(op)?;
                    }
                    self.stack.push(StackSymbol::Operator(op));
                    self.trace.record(Step::Push(op.as_char()));
                    true
                }
                Some(Token::Close) => self.close_group()?,
                None => {
                    warn!("invalid character {c:?} in {expression:?}");
                    false
                }
            };

            let now_rejected = !matched || run.is_rejected();
            if token.is_none() || (now_rejected && !rejected) {
                self.trace.record(Step::Invalid);
            }
            rejected |= now_rejected;
        }

        let (verdict, path) = run.finish_with_history();
        if !rejected && !verdict.is_accept() {
            debug!("input ended in an incomplete expression");
            self.trace.record(Step::Invalid);
        }
        let verdict = if rejected { Verdict::Reject } else { verdict };

        self.drain()?;

        Ok(ConversionResult {
            postfix: std::mem::take(&mut self.output),
            trace: std::mem::take(&mut self.trace),
            verdict,
            path,
        })
    }

    fn reset(&mut self) {
        self.stack.reset();
        self.output.clear();
        self.trace.clear();
    }

    /// Pop and emit the top symbol.
    fn emit_top(&mut self) -> Result<(), EngineFault> {
        if let Some(c) = self.stack.pop()?.emitted() {
            self.output.push(c);
        }
        self.trace.record(Step::Pop);
        Ok(())
    }

    /// Flush operators down to the nearest `(` and discard it.
    ///
    /// Returns `false` when the bottom marker is reached first, i.e. the `)`
    /// has no partner; the bottom marker stays in place.
    fn close_group(&mut self) -> Result<bool, EngineFault> {
        loop {
            match self.stack.peek().ok_or(EngineFault::StackUnderflow)? {
                StackSymbol::Open => {
                    self.stack.pop()?;
                    self.trace.record(Step::Pop);
                    return Ok(true);
                }
                StackSymbol::Bottom => {
                    debug!("unmatched ')'");
                    return Ok(false);
                }
                StackSymbol::Operator(_) => self.emit_top()?,
            }
        }
    }

    /// Pop operators that bind at least as tightly as `incoming`.
    fn yield_to(&mut self, incoming: Operator) -> Result<(), EngineFault> {
        while let Some(StackSymbol::Operator(top)) = self.stack.peek() {
            let outranks = top.precedence() > incoming.precedence()
                || (top.precedence() == incoming.precedence()
                    && !incoming.is_right_associative());
            if !outranks {
                break;
            }
            self.emit_top()?;
        }
        Ok(())
    }

    /// Empty the stack into the output. The bottom marker is dropped
    /// without a trace entry.
    fn drain(&mut self) -> Result<(), EngineFault> {
        while !self.stack.is_empty() {
            match self.stack.pop()?.emitted() {
                Some(c) => {
                    self.output.push(c);
                    self.trace.record(Step::Pop);
                }
                None => trace!("bottom marker discarded"),
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn force_pop(&mut self) -> Result<StackSymbol, EngineFault> {
        self.stack.pop()
    }
}

/// Convert with a default (bracket-flush) converter.
pub fn convert(expression: &str) -> Result<ConversionResult, EngineFault> {
    Converter::new().convert(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::trace::INVALID_INPUT;

    fn precedence() -> Converter {
        Converter::with_config(ConverterConfig {
            mode: Mode::Precedence,
        })
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let result = convert("").unwrap();
        assert_eq!(result.postfix, "");
        assert!(result.trace.is_empty());
        assert_eq!(result.verdict, Verdict::Accept);
    }

    #[test]
    fn single_operand() {
        let result = convert("x").unwrap();
        assert_eq!(result.postfix, "x");
        assert_eq!(result.trace.lines(), vec!["Push(x)"]);
        assert!(result.is_accepted());
    }

    #[test]
    fn flush_mode_emits_operators_in_stack_order() {
        let result = convert("a+b*c").unwrap();
        assert_eq!(result.postfix, "abc*+");
        assert!(result.is_accepted());

        let result = convert("a*b+c").unwrap();
        assert_eq!(result.postfix, "abc+*");
        assert!(result.is_accepted());
    }

    #[test]
    fn flush_mode_trace_for_simple_sum() {
        let result = convert("a+b*c").unwrap();
        assert_eq!(
            result.trace.lines(),
            vec![
                "Push(a)", "Push(+)", "Push(b)", "Push(*)", "Push(c)", "Pop()", "Pop()"
            ]
        );
    }

    #[test]
    fn brackets_flush_their_operators() {
        let result = convert("(a+b)*c").unwrap();
        assert_eq!(result.postfix, "ab+c*");
        assert_eq!(
            result.trace.lines(),
            vec![
                "Push(()", "Push(a)", "Push(+)", "Push(b)", "Pop()", "Pop()", "Push(*)",
                "Push(c)", "Pop()"
            ]
        );
        assert!(result.is_accepted());
    }

    #[test]
    fn precedence_mode_reorders_operators() {
        let mut converter = precedence();
        assert_eq!(converter.convert("a*b+c").unwrap().postfix, "ab*c+");
        assert_eq!(converter.convert("a+b*c").unwrap().postfix, "abc*+");
        assert_eq!(converter.convert("a-b-c").unwrap().postfix, "ab-c-");
        assert_eq!(converter.convert("a^b^c").unwrap().postfix, "abc^^");
        assert_eq!(converter.convert("(a+b)*c^d").unwrap().postfix, "ab+cd^*");
    }

    #[test]
    fn precedence_mode_traces_early_pops() {
        let result = precedence().convert("a*b+c").unwrap();
        assert_eq!(
            result.trace.lines(),
            vec!["Push(a)", "Push(*)", "Push(b)", "Pop()", "Push(+)", "Push(c)", "Pop()"]
        );
    }

    #[test]
    fn unmatched_close_rejects_and_keeps_output() {
        let result = convert("a+b)").unwrap();
        assert_eq!(result.verdict, Verdict::Reject);
        assert_eq!(result.postfix, "ab+");
        assert_eq!(
            result.trace.lines(),
            vec!["Push(a)", "Push(+)", "Push(b)", "Pop()", INVALID_INPUT]
        );
    }

    #[test]
    fn invalid_character_rejects_and_scanning_continues() {
        let result = convert("a+b#c").unwrap();
        assert_eq!(result.verdict, Verdict::Reject);
        assert!(result.trace.has_invalid());
        assert_eq!(result.postfix, "abc+");
    }

    #[test]
    fn every_invalid_character_is_reported() {
        let result = convert("a#b$").unwrap();
        assert_eq!(result.trace.count(Step::Invalid), 2);
    }

    #[test]
    fn structural_error_is_reported_once() {
        let result = convert("+*a").unwrap();
        assert_eq!(result.verdict, Verdict::Reject);
        assert_eq!(result.trace.count(Step::Invalid), 1);
        assert_eq!(result.trace.steps()[1], Step::Invalid);
    }

    #[test]
    fn incomplete_expression_rejects_at_end() {
        let result = convert("a+").unwrap();
        assert_eq!(result.verdict, Verdict::Reject);
        assert_eq!(result.postfix, "a+");
        assert_eq!(result.trace.lines(), vec!["Push(a)", "Push(+)", INVALID_INPUT, "Pop()"]);
    }

    #[test]
    fn operand_after_a_closed_group_rejects() {
        let result = convert("(a)b").unwrap();
        assert_eq!(result.verdict, Verdict::Reject);
        assert_eq!(result.postfix, "ab");
        assert_eq!(
            result.trace.lines(),
            vec!["Push(()", "Push(a)", "Pop()", "Push(b)", INVALID_INPUT]
        );
        assert_eq!(result.path.first_error(), Some(3));

        let result = convert("a+(b)c").unwrap();
        assert_eq!(result.verdict, Verdict::Reject);
        assert_eq!(result.trace.count(Step::Invalid), 1);
    }

    #[test]
    fn unclosed_group_drains_the_bracket() {
        let result = convert("(a+b").unwrap();
        assert_eq!(result.verdict, Verdict::Reject);
        assert_eq!(result.postfix, "ab+(");
    }

    #[test]
    fn multi_character_operands_are_kept_together() {
        let result = convert("ab+c1").unwrap();
        assert_eq!(result.postfix, "abc1+");
        assert!(result.is_accepted());
    }

    #[test]
    fn path_ends_in_accept_for_valid_input() {
        let result = convert("a+b").unwrap();
        let path = result.path.get_path();
        assert_eq!(path.first(), Some(&&PdaState::Start));
        assert_eq!(path.last(), Some(&&PdaState::Accept));
        assert_eq!(result.path.first_error(), None);
    }

    #[test]
    fn path_records_where_the_input_went_wrong() {
        let result = convert("a+)b").unwrap();
        assert_eq!(result.path.first_error(), Some(2));
    }

    #[test]
    fn reused_converter_resets_between_calls() {
        let mut converter = Converter::new();
        let first = converter.convert("(a+b)*c").unwrap();
        converter.convert("x#y)(").unwrap();
        let again = converter.convert("(a+b)*c").unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn popping_past_the_bottom_is_a_fault() {
        let mut converter = Converter::new();
        converter.convert("").unwrap();
        assert_eq!(converter.force_pop(), Err(EngineFault::StackUnderflow));
    }
}
