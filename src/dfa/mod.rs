//! A module consists of the generic automaton used for lexical analysis.
//!
//! The automaton is a directed graph of states connected by edges, where each
//! edge carries a character predicate and each state optionally marks an
//! accepting [TokenKind]. States and edges live in two bounded arenas owned by
//! a [DfaPool] and are addressed by stable integer handles; the cyclic shape of
//! a lexical automaton (self loops, default edges back into a body state) costs
//! nothing because the arenas own every node for the lifetime of the pool.
//!
//! Client code declares an automaton through the builder operations and then
//! drives [read_token](DfaPool::read_token) over an input buffer:
//!
//! ```
//! use lang_fe::{Code, DfaPool, EdgePredicate, TokenKind};
//!
//! let mut pool = DfaPool::new();
//! let root = pool.add_state(TokenKind::Invalid).unwrap();
//! let number = pool.add_state(TokenKind::IntegerLiteral).unwrap();
//! pool.add_edge_with_predicate(root, number, EdgePredicate::Digit).unwrap();
//! pool.add_edge_with_predicate(number, number, EdgePredicate::Digit).unwrap();
//!
//! let code = Code::from("1234;");
//! let token = pool.read_token(root, &code, 0);
//! assert_eq!(token.kind, TokenKind::IntegerLiteral);
//! assert_eq!(token.text, "1234");
//! ```
//!
//! Tokenization is maximal munch: every accepting state reached during the walk
//! updates the best candidate, and the longest accepted prefix wins.

mod builder;
pub mod chars;
mod walker;


use crate::TokenKind;

/// Upper bound of the state arena.
pub const MAX_STATES: usize = 256;
/// Upper bound of the edge arena.
pub const MAX_EDGES: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A stable index into the state arena of a [DfaPool].
pub struct StateHandle(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A stable index into the edge arena of a [DfaPool].
pub struct EdgeHandle(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The closed set of character tests an edge can carry.
pub enum EdgePredicate {
    /// Matches exactly one byte.
    Exact(u8),
    /// `a-z` or `A-Z`.
    Alpha,
    /// `0-9`.
    Digit,
    /// Space, tab, carriage return or line feed.
    Whitespace,
    /// One of `n`, `r`, `t`, `"`, the characters legal after a backslash.
    EscapedChar,
    /// Carriage return, line feed or NUL, so line-terminated forms also end at
    /// the end of the buffer.
    EndOfLine,
}

impl EdgePredicate {
    /// Whether the predicate fires for the byte.
    pub fn accepts(&self, byte: u8) -> bool {
        match self {
            EdgePredicate::Exact(expected) => byte == *expected,
            EdgePredicate::Alpha => chars::is_alpha(byte),
            EdgePredicate::Digit => chars::is_digit(byte),
            EdgePredicate::Whitespace => chars::is_whitespace(byte),
            EdgePredicate::EscapedChar => chars::is_escaped_char(byte),
            EdgePredicate::EndOfLine => chars::is_end_of_line(byte),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct DfaState {
    /// [TokenKind::Invalid] marks a non-accepting state.
    pub(crate) accepting: TokenKind,
    /// Outgoing edges in insertion order; the order is the tie-breaking rule
    /// during tokenization.
    pub(crate) edges: Vec<EdgeHandle>,
    /// Fall-through target consulted when no ordinary edge fires. The default
    /// edge consumes one character.
    pub(crate) default_edge: Option<StateHandle>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct DfaEdge {
    pub(crate) predicate: EdgePredicate,
    pub(crate) target: StateHandle,
}

/// The two arenas holding every state and edge of an automaton.
///
/// Handles returned by the builder stay valid until
/// [delete_state_and_children](DfaPool::delete_state_and_children) resets the
/// pool; individual states cannot be released.
pub struct DfaPool {
    pub(crate) states: Vec<DfaState>,
    pub(crate) edges: Vec<DfaEdge>,
}
