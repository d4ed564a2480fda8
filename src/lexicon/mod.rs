//! The concrete lexical definition of the language.
//!
//! A [Lexicon] owns a [DfaPool] holding the language automaton, built once from
//! the ordered symbol table, plus the keyword map consulted after recognition.
//! Keywords are deliberately kept out of the automaton: encoding every keyword
//! as a path shadowing the identifier states would inflate the graph, so the
//! tokenizer re-maps identifier tokens whose text matches a keyword instead.
//!
//! # Example
//!
//! ```
//! use lang_fe::{Code, Lexicon, TokenKind};
//!
//! let lexicon = Lexicon::new().unwrap();
//! let code = Code::from("while (count >= 10) { count -= 1; }");
//! let tokens = lexicon.tokenize(&code).unwrap();
//!
//! let kinds: Vec<TokenKind> = tokens
//!     .iter()
//!     .filter(|t| !t.kind.is_trivia())
//!     .map(|t| t.kind)
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::While,
//!         TokenKind::OpenParen,
//!         TokenKind::Identifier,
//!         TokenKind::GreaterThanOrEqual,
//!         TokenKind::IntegerLiteral,
//!         TokenKind::CloseParen,
//!         TokenKind::OpenCurly,
//!         TokenKind::Identifier,
//!         TokenKind::MinusAssignment,
//!         TokenKind::IntegerLiteral,
//!         TokenKind::Semicolon,
//!         TokenKind::CloseCurly,
//!     ]
//! );
//! ```

#[cfg(test)]
mod __tests__;

use crate::{BuilderError, Code, DfaPool, EdgePredicate, Log, ParseError, StateHandle, Token, TokenKind};
use once_cell::unsync::OnceCell;
use std::collections::HashMap;

/// The symbol lexemes of the language in band order: the kind of entry `i` is
/// `SymbolStart + 1 + i`.
pub const SYMBOLS: &[(&str, TokenKind)] = &[
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("{", TokenKind::OpenCurly),
    ("}", TokenKind::CloseCurly),
    ("[", TokenKind::OpenBracket),
    ("]", TokenKind::CloseBracket),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    (":", TokenKind::Colon),
    (".", TokenKind::Dot),
    ("->", TokenKind::Arrow),
    ("=", TokenKind::Assignment),
    ("+=", TokenKind::PlusAssignment),
    ("-=", TokenKind::MinusAssignment),
    ("*=", TokenKind::TimesAssignment),
    ("/=", TokenKind::DivideAssignment),
    ("%=", TokenKind::ModuloAssignment),
    ("==", TokenKind::Equality),
    ("!=", TokenKind::Inequality),
    ("<", TokenKind::LessThan),
    (">", TokenKind::GreaterThan),
    ("<=", TokenKind::LessThanOrEqual),
    (">=", TokenKind::GreaterThanOrEqual),
    ("||", TokenKind::LogicalOr),
    ("&&", TokenKind::LogicalAnd),
    ("!", TokenKind::LogicalNot),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Asterisk),
    ("/", TokenKind::Divide),
    ("%", TokenKind::Modulo),
    ("&", TokenKind::Ampersand),
    ("++", TokenKind::Increment),
    ("--", TokenKind::Decrement),
];

/// The keyword lexemes of the language in band order: the kind of entry `i` is
/// `KeywordStart + 1 + i`.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("class", TokenKind::Class),
    ("var", TokenKind::Var),
    ("function", TokenKind::Function),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
    ("label", TokenKind::Label),
    ("goto", TokenKind::Goto),
    ("return", TokenKind::Return),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("as", TokenKind::As),
];

/// Words recognized as identifiers but re-mapped into the literal band.
const LITERAL_WORDS: &[(&str, TokenKind)] = &[
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("null", TokenKind::Null),
];

/// The language automaton and keyword table, built once and read-only afterwards.
///
/// Construction is the only mutating phase; a built [Lexicon] can serve any
/// number of [read_token](Lexicon::read_token) and [tokenize](Lexicon::tokenize)
/// calls.
pub struct Lexicon {
    pool: DfaPool,
    root: StateHandle,
    keywords: HashMap<&'static str, TokenKind>,
    log: OnceCell<Log<&'static str>>,
}

impl Lexicon {
    /// Build the language automaton and the keyword map.
    pub fn new() -> Result<Self, BuilderError> {
        let mut pool = DfaPool::new();
        let root = Self::build(&mut pool)?;

        let mut keywords = HashMap::new();
        for (lexeme, kind) in KEYWORDS.iter().chain(LITERAL_WORDS) {
            keywords.insert(*lexeme, *kind);
        }

        Ok(Self {
            pool,
            root,
            keywords,
            log: OnceCell::new(),
        })
    }

    /// The root state of the language automaton.
    pub fn root(&self) -> StateHandle {
        self.root
    }

    /// The pool holding the language automaton.
    pub fn pool(&self) -> &DfaPool {
        &self.pool
    }

    /// Set a log label to debug tokenization.
    /// Based on the level of the [Log], tokenization will report its results.
    pub fn set_log(&self, log: Log<&'static str>) -> Result<(), String> {
        self.log
            .set(log)
            .map_err(|err| format!("Log label {} is already assigned.", err))
    }

    /// Read one token at `pointer` and re-map it through the keyword table when
    /// the automaton classified it as an identifier.
    pub fn read_token<'c>(&self, code: &Code<'c>, pointer: usize) -> Token<'c> {
        let mut token = self.pool.read_token(self.root, code, pointer);
        if token.kind == TokenKind::Identifier {
            if let Some(keyword) = self.keywords.get(token.text) {
                token.kind = *keyword;
            }
        }
        token
    }

    /// Tokenize the whole input and return the token stream, whitespace and
    /// comments included.
    ///
    /// A position where the automaton accepts nothing aborts tokenization with
    /// a [ParseError] pointing at the offending byte.
    pub fn tokenize<'c>(&self, code: &Code<'c>) -> Result<Vec<Token<'c>>, ParseError> {
        let mut tokens: Vec<Token<'c>> = Vec::new();
        let mut pointer = 0;

        #[cfg(debug_assertions)]
        let debug = self.log.get().map_or(Log::None, |s| *s);

        while pointer < code.value.len() {
            let token = self.read_token(code, pointer);
            if token.kind == TokenKind::Invalid {
                #[cfg(debug_assertions)]
                if debug.order() >= Log::Default(()).order() {
                    println!(
                        "{}: Tokenization failed at {}",
                        debug,
                        code.obtain_position(pointer)
                    );
                }
                return Err(ParseError::new(
                    pointer,
                    format!(
                        "Failed to tokenize code @ {}",
                        code.obtain_position(pointer)
                    ),
                ));
            }

            #[cfg(debug_assertions)]
            if debug.order() >= Log::Success(()).order() {
                println!(
                    "[{}; LexemeSuccess]: token: {:?} at {}",
                    debug,
                    token.kind,
                    code.obtain_position(token.start)
                );
            }

            pointer = token.end();
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Assemble the language automaton into `pool` and return its root.
    fn build(pool: &mut DfaPool) -> Result<StateHandle, BuilderError> {
        let root = pool.add_state(TokenKind::Invalid)?;

        // Symbol trie. Shorter symbols are inserted first so that a longer
        // symbol always extends an existing prefix state.
        let mut ordered: Vec<&(&str, TokenKind)> = SYMBOLS.iter().collect();
        ordered.sort_by_key(|(lexeme, _)| lexeme.len());
        for (lexeme, kind) in ordered {
            Self::insert_symbol(pool, root, lexeme.as_bytes(), *kind)?;
        }

        // Whitespace runs.
        let whitespace = pool.add_state(TokenKind::Whitespace)?;
        pool.add_edge_with_predicate(root, whitespace, EdgePredicate::Whitespace)?;
        pool.add_edge_with_predicate(whitespace, whitespace, EdgePredicate::Whitespace)?;

        // Identifiers.
        let identifier = pool.add_state(TokenKind::Identifier)?;
        pool.add_edge_with_predicate(root, identifier, EdgePredicate::Alpha)?;
        pool.add_edge(root, identifier, b'_')?;
        pool.add_edge_with_predicate(identifier, identifier, EdgePredicate::Alpha)?;
        pool.add_edge_with_predicate(identifier, identifier, EdgePredicate::Digit)?;
        pool.add_edge(identifier, identifier, b'_')?;

        // Integer and float literals. The float states hang off the integer
        // state, so "3" stays an integer until a '.' and a digit arrive.
        let integer = pool.add_state(TokenKind::IntegerLiteral)?;
        pool.add_edge_with_predicate(root, integer, EdgePredicate::Digit)?;
        pool.add_edge_with_predicate(integer, integer, EdgePredicate::Digit)?;

        let float_dot = pool.add_state(TokenKind::Invalid)?;
        pool.add_edge(integer, float_dot, b'.')?;
        let float = pool.add_state(TokenKind::FloatLiteral)?;
        pool.add_edge_with_predicate(float_dot, float, EdgePredicate::Digit)?;
        pool.add_edge_with_predicate(float, float, EdgePredicate::Digit)?;
        pool.add_edge(float, float, b'e')?;
        pool.add_edge(float, float, b'+')?;
        pool.add_edge(float, float, b'-')?;
        let float_suffix = pool.add_state(TokenKind::FloatLiteral)?;
        pool.add_edge(float, float_suffix, b'f')?;

        // String literals. The body state absorbs anything through its default
        // edge; the escape state only returns on a legal escaped character.
        let string_body = pool.add_state(TokenKind::Invalid)?;
        pool.add_edge(root, string_body, b'"')?;
        let string_end = pool.add_state(TokenKind::StringLiteral)?;
        pool.add_edge(string_body, string_end, b'"')?;
        let string_escape = pool.add_state(TokenKind::Invalid)?;
        pool.add_edge(string_body, string_escape, b'\\')?;
        pool.add_edge_with_predicate(string_escape, string_body, EdgePredicate::EscapedChar)?;
        pool.add_default_edge(string_body, string_body)?;

        // Character literals, symmetric with the string states.
        let character_body = pool.add_state(TokenKind::Invalid)?;
        pool.add_edge(root, character_body, b'\'')?;
        let character_end = pool.add_state(TokenKind::CharacterLiteral)?;
        pool.add_edge(character_body, character_end, b'\'')?;
        let character_escape = pool.add_state(TokenKind::Invalid)?;
        pool.add_edge(character_body, character_escape, b'\\')?;
        pool.add_edge_with_predicate(
            character_escape,
            character_body,
            EdgePredicate::EscapedChar,
        )?;
        pool.add_default_edge(character_body, character_body)?;

        // Comments chain off the '/' symbol state, so "/" alone still lexes as
        // the divide symbol.
        let divide = pool
            .follow_exact(root, b'/')
            .expect("the symbol table defines '/'");

        let multi_body = pool.add_state(TokenKind::Invalid)?;
        pool.add_edge(divide, multi_body, b'*')?;
        let multi_star = pool.add_state(TokenKind::Invalid)?;
        pool.add_edge(multi_body, multi_star, b'*')?;
        pool.add_default_edge(multi_body, multi_body)?;
        let multi_end = pool.add_state(TokenKind::MultiLineComment)?;
        pool.add_edge(multi_star, multi_end, b'/')?;
        // A run of stars must still be able to close the comment.
        pool.add_edge(multi_star, multi_star, b'*')?;
        pool.add_default_edge(multi_star, multi_body)?;

        // Single line comments accept on the comment state itself; the
        // end-of-line edge leads into a dead sink so the terminator is never
        // part of the comment token.
        let single = pool.add_state(TokenKind::SingleLineComment)?;
        pool.add_edge(divide, single, b'/')?;
        let terminator = pool.add_state(TokenKind::Invalid)?;
        pool.add_edge_with_predicate(single, terminator, EdgePredicate::EndOfLine)?;
        pool.add_default_edge(single, single)?;

        Ok(root)
    }

    /// Insert one symbol into the trie hanging off `root`, creating
    /// non-accepting intermediate states on demand.
    fn insert_symbol(
        pool: &mut DfaPool,
        root: StateHandle,
        lexeme: &[u8],
        kind: TokenKind,
    ) -> Result<(), BuilderError> {
        let mut current = root;
        for (index, &byte) in lexeme.iter().enumerate() {
            let last = index + 1 == lexeme.len();
            match pool.follow_exact(current, byte) {
                Some(next) => {
                    debug_assert!(!last, "symbol {:?} inserted twice", kind);
                    current = next;
                }
                None => {
                    let accepting = if last { kind } else { TokenKind::Invalid };
                    let next = pool.add_state(accepting)?;
                    pool.add_edge(current, next, byte)?;
                    current = next;
                }
            }
        }
        Ok(())
    }
}
