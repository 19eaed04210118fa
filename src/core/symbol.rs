//! Tokens and the two alphabets of the automaton.
//!
//! A character of the raw expression classifies into a [`Token`] (or is
//! unrecognized). Tokens map onto [`InputSymbol`]s, the input alphabet of
//! the automaton. [`StackSymbol`] is shared by the automaton stack and the
//! rewriting engine's operator stack.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators, in ascending precedence groups.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// Every operator, in table order.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    /// Operator spelled by `c`, if any.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// Source spelling.
    pub fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Only `^` groups right to left.
    pub fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One semantic unit of input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Token {
    Operand(char),
    Operator(Operator),
    Open,
    Close,
}

impl Token {
    /// Classify a character. `None` means the character belongs to no token
    /// class and drives the automaton to its reject sink.
    pub fn classify(c: char) -> Option<Self> {
        if c.is_alphanumeric() {
            return Some(Self::Operand(c));
        }
        match c {
            '(' => Some(Self::Open),
            ')' => Some(Self::Close),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }
}

/// Input alphabet of the automaton.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSymbol {
    /// Any alphanumeric character
    Operand,
    Operator(Operator),
    Open,
    Close,
    /// Any character outside the token classes
    Other,
    /// End of input
    Epsilon,
}

impl InputSymbol {
    /// Every input symbol, in table order.
    pub fn all() -> Vec<InputSymbol> {
        let mut symbols = vec![InputSymbol::Operand];
        symbols.extend(Operator::ALL.iter().copied().map(InputSymbol::Operator));
        symbols.extend([
            InputSymbol::Open,
            InputSymbol::Close,
            InputSymbol::Other,
            InputSymbol::Epsilon,
        ]);
        symbols
    }

    /// Input class of `c`; anything unrecognized maps to [`InputSymbol::Other`].
    pub fn from_char(c: char) -> Self {
        Token::classify(c).map_or(Self::Other, Self::from)
    }
}

impl From<Token> for InputSymbol {
    fn from(token: Token) -> Self {
        match token {
            Token::Operand(_) => Self::Operand,
            Token::Operator(op) => Self::Operator(op),
            Token::Open => Self::Open,
            Token::Close => Self::Close,
        }
    }
}

impl fmt::Display for InputSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand => f.write_str("id"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Open => f.write_str("("),
            Self::Close => f.write_str(")"),
            Self::Other => f.write_str("?"),
            Self::Epsilon => f.write_str("ε"),
        }
    }
}

/// Symbols that may sit on a stack.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackSymbol {
    /// `Z0`, the bottom marker
    Bottom,
    Open,
    Operator(Operator),
}

impl StackSymbol {
    /// Output form of an emitted symbol. The bottom marker has none.
    pub fn emitted(self) -> Option<char> {
        match self {
            Self::Bottom => None,
            Self::Open => Some('('),
            Self::Operator(op) => Some(op.as_char()),
        }
    }
}

impl fmt::Display for StackSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bottom => f.write_str("Z0"),
            Self::Open => f.write_str("("),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}
