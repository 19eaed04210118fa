//! Operator stack owned by one conversion.

use super::error::EngineFault;
use crate::core::StackSymbol;

/// Stack of operators and open brackets above a bottom marker.
#[derive(Clone, Debug, Default)]
pub struct OperatorStack {
    symbols: Vec<StackSymbol>,
}

impl OperatorStack {
    /// Empty stack; [`OperatorStack::reset`] seats the bottom marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear everything and seat the bottom marker.
    pub fn reset(&mut self) {
        self.symbols.clear();
        self.symbols.push(StackSymbol::Bottom);
    }

    /// Push onto the top.
    pub fn push(&mut self, symbol: StackSymbol) {
        self.symbols.push(symbol);
    }

    /// Pop the top symbol. An empty stack is a contract violation.
    pub fn pop(&mut self) -> Result<StackSymbol, EngineFault> {
        self.symbols.pop().ok_or(EngineFault::StackUnderflow)
    }

    /// Top symbol without removing it.
    pub fn peek(&self) -> Option<StackSymbol> {
        self.symbols.last().copied()
    }

    /// True once even the bottom marker is gone.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of symbols, bottom marker included.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }
}
