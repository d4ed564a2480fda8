use crate::{
    remove_whitespace_and_comments, Code, Lexicon, TokenKind, KEYWORDS, SYMBOLS,
};
use regex::Regex;

fn tokenize(source: &str) -> Vec<(TokenKind, String)> {
    let lexicon = Lexicon::new().unwrap();
    let code = Code::from(source);
    match lexicon.tokenize(&code) {
        Ok(tokens) => tokens
            .iter()
            .map(|token| (token.kind, token.text.to_string()))
            .collect(),
        Err(err) => panic!("Failed to tokenize {:?}: {:?}", source, err),
    }
}

#[test]
fn whitespace_lexes_as_one_token() {
    assert_eq!(
        tokenize("   \t\n"),
        vec![(TokenKind::Whitespace, String::from("   \t\n"))]
    );
}

#[test]
fn variable_declaration_token_stream() {
    let tokens = tokenize("var x : int = 42;");
    let structural: Vec<(TokenKind, String)> = tokens
        .into_iter()
        .filter(|(kind, _)| !kind.is_trivia())
        .collect();
    assert_eq!(
        structural,
        vec![
            (TokenKind::Var, String::from("var")),
            (TokenKind::Identifier, String::from("x")),
            (TokenKind::Colon, String::from(":")),
            (TokenKind::Identifier, String::from("int")),
            (TokenKind::Assignment, String::from("=")),
            (TokenKind::IntegerLiteral, String::from("42")),
            (TokenKind::Semicolon, String::from(";")),
        ]
    );
}

#[test]
fn comment_forms() {
    // The single line comment ends before its terminator, so the line feed
    // lexes as whitespace of its own.
    assert_eq!(
        tokenize("/* a */ // b\nfoo"),
        vec![
            (TokenKind::MultiLineComment, String::from("/* a */")),
            (TokenKind::Whitespace, String::from(" ")),
            (TokenKind::SingleLineComment, String::from("// b")),
            (TokenKind::Whitespace, String::from("\n")),
            (TokenKind::Identifier, String::from("foo")),
        ]
    );
}

#[test]
fn single_line_comment_reaches_end_of_buffer() {
    assert_eq!(
        tokenize("// trailing"),
        vec![(TokenKind::SingleLineComment, String::from("// trailing"))]
    );
}

#[test]
fn multi_line_comment_closes_on_star_run() {
    assert_eq!(
        tokenize("/* a **/"),
        vec![(TokenKind::MultiLineComment, String::from("/* a **/"))]
    );
}

#[test]
fn divide_survives_next_to_comments() {
    assert_eq!(
        tokenize("a/b"),
        vec![
            (TokenKind::Identifier, String::from("a")),
            (TokenKind::Divide, String::from("/")),
            (TokenKind::Identifier, String::from("b")),
        ]
    );
}

#[test]
fn keywords_are_remapped_after_recognition() {
    let tokens = tokenize("class classy _class");
    let kinds: Vec<TokenKind> = tokens
        .iter()
        .filter(|(kind, _)| !kind.is_trivia())
        .map(|(kind, _)| *kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Class,
            TokenKind::Identifier,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn literal_words_map_into_the_literal_band() {
    let tokens = tokenize("true false null truthy");
    let kinds: Vec<TokenKind> = tokens
        .iter()
        .filter(|(kind, _)| !kind.is_trivia())
        .map(|(kind, _)| *kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::True,
            TokenKind::False,
            TokenKind::Null,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn symbols_obey_maximal_munch() {
    assert_eq!(
        tokenize("+++"),
        vec![
            (TokenKind::Increment, String::from("++")),
            (TokenKind::Plus, String::from("+")),
        ]
    );
    assert_eq!(
        tokenize("<=->"),
        vec![
            (TokenKind::LessThanOrEqual, String::from("<=")),
            (TokenKind::Arrow, String::from("->")),
        ]
    );
    assert_eq!(
        tokenize("a--b"),
        vec![
            (TokenKind::Identifier, String::from("a")),
            (TokenKind::Decrement, String::from("--")),
            (TokenKind::Identifier, String::from("b")),
        ]
    );
}

#[test]
fn numeric_literals() {
    assert_eq!(
        tokenize("3.14"),
        vec![(TokenKind::FloatLiteral, String::from("3.14"))]
    );
    assert_eq!(
        tokenize("3.14f"),
        vec![(TokenKind::FloatLiteral, String::from("3.14f"))]
    );
    // A dot without a following digit falls back to the integer prefix.
    assert_eq!(
        tokenize("3."),
        vec![
            (TokenKind::IntegerLiteral, String::from("3")),
            (TokenKind::Dot, String::from(".")),
        ]
    );
    // An exponent without a decimal point is not a float.
    assert_eq!(
        tokenize("1e5"),
        vec![
            (TokenKind::IntegerLiteral, String::from("1")),
            (TokenKind::Identifier, String::from("e5")),
        ]
    );
}

#[test]
fn string_and_character_literals() {
    assert_eq!(
        tokenize(r#""hi\n" 'a' '\t'"#),
        vec![
            (TokenKind::StringLiteral, String::from(r#""hi\n""#)),
            (TokenKind::Whitespace, String::from(" ")),
            (TokenKind::CharacterLiteral, String::from("'a'")),
            (TokenKind::Whitespace, String::from(" ")),
            (TokenKind::CharacterLiteral, String::from(r"'\t'")),
        ]
    );
    // An escaped quote does not close the literal.
    assert_eq!(
        tokenize(r#""a\"b""#),
        vec![(TokenKind::StringLiteral, String::from(r#""a\"b""#))]
    );
}

#[test]
fn unterminated_string_fails_tokenization() {
    let lexicon = Lexicon::new().unwrap();
    let code = Code::from(r#"  "abc"#);
    let err = lexicon.tokenize(&code).unwrap_err();
    assert_eq!(err.pointer, 2);
}

#[test]
fn unknown_byte_fails_tokenization_at_its_position() {
    let lexicon = Lexicon::new().unwrap();
    let code = Code::from("ab $");
    let err = lexicon.tokenize(&code).unwrap_err();
    assert_eq!(err.pointer, 3);
    let position = code.obtain_position(err.pointer);
    assert_eq!((position.line, position.column), (1, 4));
}

#[test]
fn reading_at_an_offset() {
    let lexicon = Lexicon::new().unwrap();
    let code = Code::from("foo!=bar");
    let token = lexicon.read_token(&code, 3);
    assert_eq!(token.kind, TokenKind::Inequality);
    assert_eq!(token.start, 3);
    assert_eq!(token.end(), 5);
}

#[test]
fn filtering_is_idempotent_and_order_preserving() {
    let lexicon = Lexicon::new().unwrap();
    let code = Code::from("var x : int = 42; // tail\n");
    let mut tokens = lexicon.tokenize(&code).unwrap();
    remove_whitespace_and_comments(&mut tokens);

    let once = tokens.clone();
    remove_whitespace_and_comments(&mut tokens);
    assert_eq!(tokens, once);

    let mut starts: Vec<usize> = tokens.iter().map(|token| token.start).collect();
    starts.dedup();
    assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn symbol_kinds_follow_the_table_order() {
    for (index, (lexeme, kind)) in SYMBOLS.iter().enumerate() {
        assert_eq!(
            kind.id(),
            TokenKind::SymbolStart.id() + 1 + index as u16,
            "symbol {:?} is out of band order",
            lexeme
        );
    }
}

#[test]
fn keyword_kinds_follow_the_table_order() {
    for (index, (lexeme, kind)) in KEYWORDS.iter().enumerate() {
        assert_eq!(
            kind.id(),
            TokenKind::KeywordStart.id() + 1 + index as u16,
            "keyword {:?} is out of band order",
            lexeme
        );
    }
}

#[test]
fn kind_ids_round_trip() {
    for (index, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(kind.id() as usize, index);
        assert_eq!(TokenKind::from_id(kind.id()), *kind);
    }
    assert_eq!(
        TokenKind::from_id(TokenKind::ALL.len() as u16),
        TokenKind::Invalid
    );
}

#[test]
fn every_symbol_round_trips_through_the_automaton() {
    let lexicon = Lexicon::new().unwrap();
    for (lexeme, kind) in SYMBOLS {
        let code = Code::from(*lexeme);
        let token = lexicon.read_token(&code, 0);
        assert_eq!(token.kind, *kind, "lexeme {:?}", lexeme);
        assert_eq!(token.text, *lexeme, "lexeme {:?}", lexeme);
    }
}

#[test]
fn token_classes_agree_with_reference_patterns() {
    let lexicon = Lexicon::new().unwrap();
    let oracles: &[(&str, TokenKind, &[&str])] = &[
        (
            r"^[A-Za-z_][A-Za-z0-9_]*",
            TokenKind::Identifier,
            &["abc def", "_private", "x9", "snake_case_tail "],
        ),
        (
            r"^[0-9]+",
            TokenKind::IntegerLiteral,
            &["123", "5;6", "007)"],
        ),
        (
            r"^[ \t\r\n]+",
            TokenKind::Whitespace,
            &["   x", "\t\t", " \r\n "],
        ),
        (
            r"^[0-9]+\.[0-9][0-9e+\-]*f?",
            TokenKind::FloatLiteral,
            &["3.25", "3.25f", "10.5e+3", "2.5e-1f x"],
        ),
    ];

    for (pattern, kind, inputs) in oracles {
        let oracle = Regex::new(pattern).unwrap();
        for input in *inputs {
            let expected = oracle.find(input).unwrap();
            let code = Code::from(*input);
            let token = lexicon.read_token(&code, 0);
            assert_eq!(token.kind, *kind, "input {:?}", input);
            assert_eq!(token.len(), expected.end(), "input {:?}", input);
        }
    }
}

#[test]
fn automaton_fits_the_arenas() {
    let lexicon = Lexicon::new().unwrap();
    assert_eq!(lexicon.pool().accepting_kind(lexicon.root()), TokenKind::Invalid);
    assert!(lexicon.pool().state_count() <= crate::MAX_STATES);
    assert!(lexicon.pool().edge_count() <= crate::MAX_EDGES);
}
