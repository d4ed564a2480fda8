use crate::ast::{Expression, Global, Member, Statement, Type};
use crate::{
    remove_whitespace_and_comments, BlockNode, Code, Lexicon, ParseError, Parser, TokenKind,
};

fn parse_block(source: &str) -> Result<BlockNode<'_>, ParseError> {
    let lexicon = Lexicon::new().unwrap();
    let code = Code::from(source);
    let mut tokens = lexicon.tokenize(&code).unwrap();
    remove_whitespace_and_comments(&mut tokens);
    Parser::new(&tokens).parse_block()
}

fn parse_expression(source: &str) -> Result<Expression<'_>, ParseError> {
    let lexicon = Lexicon::new().unwrap();
    let code = Code::from(source);
    let mut tokens = lexicon.tokenize(&code).unwrap();
    remove_whitespace_and_comments(&mut tokens);
    Parser::new(&tokens).parse_expression()
}

fn name_of<'a>(expression: &'a Expression<'a>) -> &'a str {
    match expression {
        Expression::NameReference(node) => node.name.text,
        other => panic!("Expected a name reference, got {:?}", other),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expression = parse_expression("a + b * c").unwrap();
    match &expression {
        Expression::Binary(sum) => {
            assert_eq!(sum.operator.text, "+");
            assert_eq!(name_of(&sum.left), "a");
            match &sum.right {
                Expression::Binary(product) => {
                    assert_eq!(product.operator.text, "*");
                    assert_eq!(name_of(&product.left), "b");
                    assert_eq!(name_of(&product.right), "c");
                }
                other => panic!("Expected the product on the right, got {:?}", other),
            }
        }
        other => panic!("Expected a sum at the root, got {:?}", other),
    }
}

#[test]
fn assignment_is_right_associative() {
    let expression = parse_expression("a = b = c").unwrap();
    match &expression {
        Expression::Binary(outer) => {
            assert_eq!(outer.operator.kind, TokenKind::Assignment);
            assert_eq!(name_of(&outer.left), "a");
            match &outer.right {
                Expression::Binary(inner) => {
                    assert_eq!(inner.operator.kind, TokenKind::Assignment);
                    assert_eq!(name_of(&inner.left), "b");
                    assert_eq!(name_of(&inner.right), "c");
                }
                other => panic!("Expected a nested assignment, got {:?}", other),
            }
        }
        other => panic!("Expected an assignment at the root, got {:?}", other),
    }
}

#[test]
fn subtraction_is_left_associative() {
    let expression = parse_expression("a - b - c").unwrap();
    match &expression {
        Expression::Binary(outer) => {
            assert_eq!(outer.operator.text, "-");
            assert_eq!(name_of(&outer.right), "c");
            match &outer.left {
                Expression::Binary(inner) => {
                    assert_eq!(inner.operator.text, "-");
                    assert_eq!(name_of(&inner.left), "a");
                    assert_eq!(name_of(&inner.right), "b");
                }
                other => panic!("Expected a nested subtraction, got {:?}", other),
            }
        }
        other => panic!("Expected a subtraction at the root, got {:?}", other),
    }
}

#[test]
fn prefix_operators_chain_outer_to_inner() {
    let expression = parse_expression("-*x").unwrap();
    match &expression {
        Expression::Unary(negate) => {
            assert_eq!(negate.operator.kind, TokenKind::Minus);
            match &negate.operand {
                Expression::Unary(dereference) => {
                    assert_eq!(dereference.operator.kind, TokenKind::Asterisk);
                    assert_eq!(name_of(&dereference.operand), "x");
                }
                other => panic!("Expected the dereference inside, got {:?}", other),
            }
        }
        other => panic!("Expected the negation outermost, got {:?}", other),
    }
}

#[test]
fn postfix_forms_chain_left_to_right() {
    let expression = parse_expression("a.b->c[d](e)").unwrap();
    let call = match &expression {
        Expression::Call(call) => call,
        other => panic!("Expected a call at the root, got {:?}", other),
    };
    assert_eq!(call.arguments.len(), 1);
    assert_eq!(name_of(&call.arguments[0]), "e");

    let index = match &call.left {
        Expression::Index(index) => index,
        other => panic!("Expected an index below the call, got {:?}", other),
    };
    assert_eq!(name_of(&index.index), "d");

    let arrow = match &index.left {
        Expression::MemberAccess(access) => access,
        other => panic!("Expected an arrow access below the index, got {:?}", other),
    };
    assert_eq!(arrow.operator.kind, TokenKind::Arrow);
    assert_eq!(arrow.name.text, "c");

    let dot = match &arrow.left {
        Expression::MemberAccess(access) => access,
        other => panic!("Expected a dot access below the arrow, got {:?}", other),
    };
    assert_eq!(dot.operator.kind, TokenKind::Dot);
    assert_eq!(dot.name.text, "b");
    assert_eq!(name_of(&dot.left), "a");
}

#[test]
fn cast_targets_a_type() {
    let expression = parse_expression("x as int*").unwrap();
    match &expression {
        Expression::Cast(cast) => {
            assert_eq!(name_of(&cast.left), "x");
            match &cast.target_type {
                Type::Pointer(pointee) => match pointee.as_ref() {
                    Type::Named(named) => assert_eq!(named.name.text, "int"),
                    other => panic!("Expected a named pointee, got {:?}", other),
                },
                other => panic!("Expected a pointer type, got {:?}", other),
            }
        }
        other => panic!("Expected a cast at the root, got {:?}", other),
    }
}

#[test]
fn grouping_overrides_precedence() {
    let expression = parse_expression("(a + b) * c").unwrap();
    match &expression {
        Expression::Binary(product) => {
            assert_eq!(product.operator.text, "*");
            match &product.left {
                Expression::Binary(sum) => assert_eq!(sum.operator.text, "+"),
                other => panic!("Expected the grouped sum on the left, got {:?}", other),
            }
        }
        other => panic!("Expected the product at the root, got {:?}", other),
    }
}

#[test]
fn all_literal_kinds_are_values() {
    for (source, kind) in [
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("null", TokenKind::Null),
        ("42", TokenKind::IntegerLiteral),
        ("4.25", TokenKind::FloatLiteral),
        (r#""text""#, TokenKind::StringLiteral),
        ("'c'", TokenKind::CharacterLiteral),
    ] {
        match parse_expression(source).unwrap() {
            Expression::Literal(literal) => assert_eq!(literal.value.kind, kind),
            other => panic!("Expected a literal for {:?}, got {:?}", source, other),
        }
    }
}

#[test]
fn trailing_tokens_after_an_expression_fail() {
    let err = parse_expression("a b").unwrap_err();
    assert!(err.message.starts_with("Unexpected"), "{}", err.message);
    assert_eq!(err.pointer, 2);
}

#[test]
fn function_declaration_structure() {
    let block = parse_block("function f(a:int):int { return a+1; }").unwrap();
    assert_eq!(block.globals.len(), 1);
    let function = match &block.globals[0] {
        Global::Function(function) => function,
        other => panic!("Expected a function, got {:?}", other),
    };
    assert_eq!(function.name.text, "f");

    assert_eq!(function.parameters.len(), 1);
    let parameter = &function.parameters[0];
    assert_eq!(parameter.name.text, "a");
    assert!(parameter.initial_value.is_none());
    match &parameter.parameter_type {
        Type::Named(named) => assert_eq!(named.name.text, "int"),
        other => panic!("Expected a named parameter type, got {:?}", other),
    }

    match function.return_type.as_ref().unwrap() {
        Type::Named(named) => assert_eq!(named.name.text, "int"),
        other => panic!("Expected a named return type, got {:?}", other),
    }

    assert_eq!(function.scope.statements.len(), 1);
    let value = match &function.scope.statements[0] {
        Statement::Return(node) => node.value.as_ref().unwrap(),
        other => panic!("Expected a return statement, got {:?}", other),
    };
    match value {
        Expression::Binary(sum) => {
            assert_eq!(sum.operator.text, "+");
            assert_eq!(name_of(&sum.left), "a");
            match &sum.right {
                Expression::Literal(literal) => assert_eq!(literal.value.text, "1"),
                other => panic!("Expected a literal, got {:?}", other),
            }
        }
        other => panic!("Expected a sum, got {:?}", other),
    }
}

#[test]
fn else_branches_nest_as_if_nodes() {
    let block = parse_block("function f() { if (x) { } else if (y) { } else { } }").unwrap();
    let function = match &block.globals[0] {
        Global::Function(function) => function,
        other => panic!("Expected a function, got {:?}", other),
    };
    let first = match &function.scope.statements[0] {
        Statement::If(node) => node,
        other => panic!("Expected an if statement, got {:?}", other),
    };
    assert_eq!(name_of(first.condition.as_ref().unwrap()), "x");

    let second = first.else_branch.as_ref().unwrap();
    assert_eq!(name_of(second.condition.as_ref().unwrap()), "y");

    let last = second.else_branch.as_ref().unwrap();
    assert!(last.condition.is_none());
    assert!(last.else_branch.is_none());
    assert!(last.scope.statements.is_empty());
}

#[test]
fn while_loops_carry_free_statements() {
    let block = parse_block("function f() { while (x) { break; continue; } }").unwrap();
    let function = match &block.globals[0] {
        Global::Function(function) => function,
        other => panic!("Expected a function, got {:?}", other),
    };
    let node = match &function.scope.statements[0] {
        Statement::While(node) => node,
        other => panic!("Expected a while statement, got {:?}", other),
    };
    assert_eq!(name_of(&node.condition), "x");
    assert_eq!(
        node.scope.statements,
        vec![Statement::Break, Statement::Continue]
    );
}

#[test]
fn for_headers() {
    let block = parse_block("function f() { for (var i : int = 0; i < 10; i = i + 1) { } }")
        .unwrap();
    let function = match &block.globals[0] {
        Global::Function(function) => function,
        other => panic!("Expected a function, got {:?}", other),
    };
    let node = match &function.scope.statements[0] {
        Statement::For(node) => node,
        other => panic!("Expected a for statement, got {:?}", other),
    };
    assert_eq!(node.initial_variable.as_ref().unwrap().name.text, "i");
    assert!(node.initial_expression.is_none());
    assert!(node.condition.is_some());
    assert!(node.iterator.is_some());

    // Every header slot is optional.
    let block = parse_block("function f() { for (;;) { } }").unwrap();
    let function = match &block.globals[0] {
        Global::Function(function) => function,
        other => panic!("Expected a function, got {:?}", other),
    };
    let node = match &function.scope.statements[0] {
        Statement::For(node) => node,
        other => panic!("Expected a for statement, got {:?}", other),
    };
    assert!(node.initial_variable.is_none());
    assert!(node.initial_expression.is_none());
    assert!(node.condition.is_none());
    assert!(node.iterator.is_none());
}

#[test]
fn labels_and_gotos() {
    let block = parse_block("function f() { label top; goto top; }").unwrap();
    let function = match &block.globals[0] {
        Global::Function(function) => function,
        other => panic!("Expected a function, got {:?}", other),
    };
    match &function.scope.statements[0] {
        Statement::Label(node) => assert_eq!(node.name.text, "top"),
        other => panic!("Expected a label, got {:?}", other),
    }
    match &function.scope.statements[1] {
        Statement::Goto(node) => assert_eq!(node.name.text, "top"),
        other => panic!("Expected a goto, got {:?}", other),
    }
}

#[test]
fn class_members() {
    let block =
        parse_block("class Point { var x : int; var y : int; function zero() { x = 0; } }")
            .unwrap();
    let class = match &block.globals[0] {
        Global::Class(class) => class,
        other => panic!("Expected a class, got {:?}", other),
    };
    assert_eq!(class.name.text, "Point");
    assert_eq!(class.members.len(), 3);
    assert!(matches!(class.members[0], Member::Variable(_)));
    assert!(matches!(class.members[1], Member::Variable(_)));
    assert!(matches!(class.members[2], Member::Function(_)));
}

#[test]
fn pointer_and_reference_types_nest() {
    let block = parse_block("var p : int**&;").unwrap();
    let variable = match &block.globals[0] {
        Global::Variable(variable) => variable,
        other => panic!("Expected a variable, got {:?}", other),
    };
    let inner = match &variable.variable_type {
        Type::Reference(inner) => inner.as_ref(),
        other => panic!("Expected an outer reference, got {:?}", other),
    };
    let inner = match inner {
        Type::Pointer(inner) => inner.as_ref(),
        other => panic!("Expected a pointer, got {:?}", other),
    };
    let inner = match inner {
        Type::Pointer(inner) => inner.as_ref(),
        other => panic!("Expected a nested pointer, got {:?}", other),
    };
    match inner {
        Type::Named(named) => assert_eq!(named.name.text, "int"),
        other => panic!("Expected the named core, got {:?}", other),
    }
}

#[test]
fn function_types_are_wrapped_in_a_pointer() {
    let block = parse_block("var f : function*(int, float*):int;").unwrap();
    let variable = match &block.globals[0] {
        Global::Variable(variable) => variable,
        other => panic!("Expected a variable, got {:?}", other),
    };
    let function = match &variable.variable_type {
        Type::Pointer(inner) => match inner.as_ref() {
            Type::Function(function) => function,
            other => panic!("Expected the function type inside, got {:?}", other),
        },
        other => panic!("Expected the outer pointer, got {:?}", other),
    };
    assert_eq!(function.parameters.len(), 2);
    assert!(matches!(function.parameters[0], Type::Named(_)));
    assert!(matches!(function.parameters[1], Type::Pointer(_)));
    match function.return_type.as_deref().unwrap() {
        Type::Named(named) => assert_eq!(named.name.text, "int"),
        other => panic!("Expected a named return type, got {:?}", other),
    }
}

#[test]
fn parameters_may_carry_an_initial_value() {
    let block = parse_block("function f(a:int 5, b:float) { }").unwrap();
    let function = match &block.globals[0] {
        Global::Function(function) => function,
        other => panic!("Expected a function, got {:?}", other),
    };
    assert_eq!(function.parameters.len(), 2);
    match function.parameters[0].initial_value.as_ref().unwrap() {
        Expression::Literal(literal) => assert_eq!(literal.value.text, "5"),
        other => panic!("Expected a literal initial value, got {:?}", other),
    }
    assert!(function.parameters[1].initial_value.is_none());
}

#[test]
fn return_value_is_optional() {
    let block = parse_block("function f() { return; }").unwrap();
    let function = match &block.globals[0] {
        Global::Function(function) => function,
        other => panic!("Expected a function, got {:?}", other),
    };
    match &function.scope.statements[0] {
        Statement::Return(node) => assert!(node.value.is_none()),
        other => panic!("Expected a return statement, got {:?}", other),
    }
}

#[test]
fn an_empty_buffer_is_an_empty_block() {
    let block = parse_block("").unwrap();
    assert!(block.globals.is_empty());
}

#[test]
fn trailing_tokens_after_the_block_fail() {
    let err = parse_block("var x : int; )").unwrap_err();
    assert!(err.message.starts_with("Unexpected"), "{}", err.message);
    assert_eq!(err.pointer, 13);
}

#[test]
fn missing_parameter_after_comma_reports_its_context() {
    let err = parse_block("function f(a:int,) { }").unwrap_err();
    assert_eq!(
        err.message,
        "Expected parameter after ',' in function signature"
    );
}

#[test]
fn missing_semicolon_after_global_variable() {
    let err = parse_block("var x : int").unwrap_err();
    assert_eq!(err.message, "Expected ';' after global variable declaration");
}

#[test]
fn recognize_accepts_and_rejects() {
    let lexicon = Lexicon::new().unwrap();
    let code = Code::from("var x : int = 1; function f() { x += 2; }");
    let mut tokens = lexicon.tokenize(&code).unwrap();
    remove_whitespace_and_comments(&mut tokens);
    Parser::new(&tokens).recognize().unwrap();

    let code = Code::from("class { }");
    let mut tokens = lexicon.tokenize(&code).unwrap();
    remove_whitespace_and_comments(&mut tokens);
    let err = Parser::new(&tokens).recognize().unwrap_err();
    assert_eq!(err.message, "Expected class name after 'class'");
}
