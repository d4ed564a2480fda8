use crate::ast::{
    BinaryOperatorNode, Expression, LiteralNode, NameReferenceNode, ReturnNode, ScopeNode,
    Statement, TreePrinter, Visit, Visitor,
};
use crate::{Token, TokenKind};
use ptree::item::StringItem;

fn token(kind: TokenKind, text: &'static str) -> Token<'static> {
    Token::new(kind, text, 0)
}

fn name(text: &'static str) -> Expression<'static> {
    Expression::NameReference(NameReferenceNode {
        name: token(TokenKind::Identifier, text),
    })
}

fn binary(
    kind: TokenKind,
    operator: &'static str,
    left: Expression<'static>,
    right: Expression<'static>,
) -> Expression<'static> {
    Expression::Binary(Box::new(BinaryOperatorNode {
        operator: token(kind, operator),
        left,
        right,
    }))
}

/// `a + b * c` built by hand.
fn sum_of_product() -> Expression<'static> {
    binary(
        TokenKind::Plus,
        "+",
        name("a"),
        binary(TokenKind::Asterisk, "*", name("b"), name("c")),
    )
}

#[derive(Default)]
struct ExpressionCounter {
    count: usize,
}

impl<'c> Visitor<'c> for ExpressionCounter {
    fn default_expression(&mut self) -> Visit {
        self.count += 1;
        Visit::Continue
    }
}

#[test]
fn category_default_observes_every_expression() {
    let mut counter = ExpressionCounter::default();
    sum_of_product().walk(&mut counter, true);
    // Two binary operators and three name references.
    assert_eq!(counter.count, 5);
}

#[derive(Default)]
struct NodeCounter {
    count: usize,
}

impl<'c> Visitor<'c> for NodeCounter {
    fn default_node(&mut self) -> Visit {
        self.count += 1;
        Visit::Continue
    }
}

#[test]
fn concrete_hooks_chain_up_to_the_top_default() {
    let mut counter = NodeCounter::default();
    sum_of_product().walk(&mut counter, true);
    assert_eq!(counter.count, 5);
}

#[derive(Default)]
struct StatementCounter {
    count: usize,
}

impl<'c> Visitor<'c> for StatementCounter {
    fn default_statement(&mut self) -> Visit {
        self.count += 1;
        Visit::Continue
    }
}

#[test]
fn expressions_count_as_statements() {
    // The expression category chains into the statement category.
    let statement = Statement::Expression(name("a"));
    let mut counter = StatementCounter::default();
    statement.walk(&mut counter, true);
    assert_eq!(counter.count, 1);

    let scope = ScopeNode {
        statements: vec![
            Statement::Return(ReturnNode { value: None }),
            Statement::Break,
        ],
    };
    let mut counter = StatementCounter::default();
    scope.walk(&mut counter, true);
    // The scope itself, the return and the break.
    assert_eq!(counter.count, 3);
}

#[derive(Default)]
struct PruningVisitor {
    names: usize,
}

impl<'c> Visitor<'c> for PruningVisitor {
    fn visit_binary_operator(&mut self, _: &BinaryOperatorNode<'c>) -> Visit {
        Visit::Stop
    }
    fn visit_name_reference(&mut self, _: &NameReferenceNode<'c>) -> Visit {
        self.names += 1;
        Visit::Continue
    }
}

#[test]
fn stop_prunes_the_subtree() {
    let mut visitor = PruningVisitor::default();
    sum_of_product().walk(&mut visitor, true);
    assert_eq!(visitor.names, 0);
}

#[derive(Default)]
struct BinaryCounter {
    count: usize,
}

impl<'c> Visitor<'c> for BinaryCounter {
    fn visit_binary_operator(&mut self, _: &BinaryOperatorNode<'c>) -> Visit {
        self.count += 1;
        Visit::Continue
    }
}

#[test]
fn walking_without_self_skips_only_the_root() {
    let mut counter = BinaryCounter::default();
    sum_of_product().walk(&mut counter, false);
    // The outer sum is skipped; the inner product is still visited.
    assert_eq!(counter.count, 1);
}

fn render(expression: &Expression) -> StringItem {
    let mut printer = TreePrinter::new();
    expression.walk(&mut printer, true);
    printer.finish()
}

fn item_eq(left: &StringItem, right: &StringItem) -> bool {
    left.text == right.text
        && left.children.len() == right.children.len()
        && left
            .children
            .iter()
            .zip(right.children.iter())
            .all(|(l, r)| item_eq(l, r))
}

#[test]
fn printer_labels_mirror_the_tree() {
    let item = render(&sum_of_product());
    assert_eq!(item.text, "BinaryOperatorNode(+)");
    assert_eq!(item.children.len(), 2);
    assert_eq!(item.children[0].text, "NameReferenceNode(a)");
    assert_eq!(item.children[1].text, "BinaryOperatorNode(*)");
    assert_eq!(item.children[1].children[0].text, "NameReferenceNode(b)");
    assert_eq!(item.children[1].children[1].text, "NameReferenceNode(c)");
}

#[test]
fn printing_is_deterministic() {
    let expression = sum_of_product();
    assert!(item_eq(&render(&expression), &render(&expression)));
}

#[test]
fn literal_leaves_print_their_text() {
    let literal = Expression::Literal(LiteralNode {
        value: token(TokenKind::IntegerLiteral, "42"),
    });
    let item = render(&literal);
    assert_eq!(item.text, "LiteralNode(42)");
    assert!(item.children.is_empty());
}
