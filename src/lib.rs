//! lang-fe is the front end of a compiler for a small statically typed C-like language.
//! It turns raw source text into a typed token stream and then into an abstract syntax tree ([AST](BlockNode)).
//!
//! # Overview
//! A language front end is usually split into a tokenizer which produces a flat stream of
//! classified lexemes and a parser which recognizes the grammar over that stream.
//! Both halves of this crate are driven by declarative descriptions:
//! the tokenizer runs a hand-built deterministic finite automaton (DFA) assembled through
//! the [DfaPool] builder API, and the parser is a recursive descent recognizer whose
//! productions mirror the grammar rules one to one.
//!
//! # Design
//!
//! The automaton lives in two bounded arenas (states and edges) addressed by stable
//! integer handles. Client code declares the lexical grammar with
//! [add_state](DfaPool::add_state), [add_edge](DfaPool::add_edge) and
//! [add_default_edge](DfaPool::add_default_edge); the engine then performs maximal-munch
//! tokenization with [read_token](DfaPool::read_token): the longest prefix accepted by the
//! automaton wins, and the token carries a borrowed slice of the source buffer.
//! The concrete automaton for this language (whitespace runs, identifiers, numeric,
//! string and character literals, a symbol trie, and comment forms) is assembled by
//! [Lexicon::new], which also owns the keyword table used to re-map identifier tokens
//! after recognition.
//!
//! The parser consumes a token slice through two primitives, `accept` and `expect`, and
//! builds an owning tree of typed nodes. Expressions are parsed with a precedence ladder:
//! right-associative assignment at the bottom, five left-associative binary levels, a
//! prefix-operator chain and finally a postfix chain (member access, call, cast, index).
//! The resulting tree is traversed through the [Visitor] trait, which offers a hook per
//! node kind and a default hook per node category, and is rendered with
//! [print_tree] through the `ptree` crate.
//!
//! # Example
//!
//! ```
//! use lang_fe::{
//!     remove_whitespace_and_comments, Code, Expression, Global, Lexicon, Parser, TokenKind, Type,
//! };
//!
//! let lexicon = Lexicon::new().unwrap();
//!
//! let code = Code::from("var x : int = 42;");
//! let mut tokens = lexicon.tokenize(&code).unwrap();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert_eq!(tokens[2].kind, TokenKind::Identifier);
//! assert_eq!(tokens[2].text, "x");
//!
//! remove_whitespace_and_comments(&mut tokens);
//!
//! let block = Parser::new(&tokens).parse_block().unwrap();
//! assert_eq!(block.globals.len(), 1);
//! match &block.globals[0] {
//!     Global::Variable(variable) => {
//!         assert_eq!(variable.name.text, "x");
//!         match &variable.variable_type {
//!             Type::Named(named) => assert_eq!(named.name.text, "int"),
//!             other => panic!("Expected a named type, got {:?}", other),
//!         }
//!         match variable.initial_value.as_ref().unwrap() {
//!             Expression::Literal(literal) => assert_eq!(literal.value.text, "42"),
//!             other => panic!("Expected a literal initializer, got {:?}", other),
//!         }
//!     }
//!     other => panic!("Expected a global variable, got {:?}", other),
//! }
//!
//! // Expressions can also be parsed on their own.
//! let code = Code::from("a + b * c");
//! let mut tokens = lexicon.tokenize(&code).unwrap();
//! remove_whitespace_and_comments(&mut tokens);
//! let sum = Parser::new(&tokens).parse_expression().unwrap();
//! match &sum {
//!     Expression::Binary(binary) => assert_eq!(binary.operator.text, "+"),
//!     other => panic!("Expected a binary operator at the root, got {:?}", other),
//! }
//! ```
//!
//! # License
//! [lang-fe](crate) is provided under the MIT license.

pub mod ast;
pub mod dfa;
mod error;
pub mod lexicon;
pub mod parser;
mod token;
mod util;

pub use ast::{
    print_tree, write_tree, BinaryOperatorNode, BlockNode, CallNode, CastNode, ClassNode,
    Expression, ForNode, FunctionNode, FunctionTypeNode, Global, GotoNode, IfNode, IndexNode,
    LabelNode, LiteralNode, Member, MemberAccessNode, NameReferenceNode, NamedTypeNode,
    ParameterNode, ReturnNode, ScopeNode, Statement, TreePrinter, Type, UnaryOperatorNode,
    VariableNode, Visit, Visitor, WhileNode,
};
pub use dfa::{DfaPool, EdgeHandle, EdgePredicate, StateHandle, MAX_EDGES, MAX_STATES};
pub use lexicon::{Lexicon, KEYWORDS, SYMBOLS};
pub use parser::Parser;
pub use token::{remove_whitespace_and_comments, Token, TokenKind};

use once_cell::unsync::OnceCell;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
/// The line and column information at a code point.
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A wrapper for the input source to be tokenized, with lazily computed line information.
pub struct Code<'c> {
    pub value: &'c [u8],
    line_breaks: OnceCell<Vec<usize>>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// A enum structure to assign multiple level debugging to the lexicon and parser.
pub enum Log<T> {
    None,
    Default(T),
    Success(T),
    Result(T),
    Verbose(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An error returned when building an automaton in a [DfaPool] fails.
///
/// Builder errors are fatal: construction of the automaton halts immediately
/// and the pool content is unspecified beyond the states and edges already added.
pub enum BuilderError {
    /// The state arena is exhausted.
    StateCapacity,
    /// The edge arena is exhausted.
    EdgeCapacity,
    /// The state already carries a default edge.
    DuplicateDefaultEdge,
}

#[derive(Debug)]
/// An error returned when the input does not tokenize or does not parse as the language.
///
/// The `pointer` is a byte offset into the source buffer; [Code::obtain_position]
/// converts it to line and column information for diagnostics.
pub struct ParseError {
    pub pointer: usize,
    pub message: String,
}
