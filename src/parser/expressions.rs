//! The expression precedence ladder.
//!
//! Lowest to highest: right-associative assignment, then five left-associative
//! binary levels parsed by a shared fold helper, then a prefix-operator chain
//! and a postfix chain:
//!
//! | Level | Operators                       | Associativity |
//! |-------|---------------------------------|---------------|
//! | 0     | `= += -= *= /= %=`              | right         |
//! | 1     | `\|\|`                          | left          |
//! | 2     | `&&`                            | left          |
//! | 3     | `< > <= >= == !=`               | left          |
//! | 4     | `+ -`                           | left          |
//! | 5     | `* / %`                         | left          |
//! | 6     | prefix `* & + - ! ++ --`        | right chain   |
//! | 7     | postfix `.x -> x (args) as T [i]` | left chain  |
//!
//! A value at the top of the ladder is a literal, a name reference or a
//! parenthesized expression.

use super::Parser;
use crate::ast::{
    BinaryOperatorNode, CallNode, CastNode, Expression, IndexNode, LiteralNode, MemberAccessNode,
    NameReferenceNode, UnaryOperatorNode,
};
use crate::{ParseError, TokenKind};

const ASSIGNMENT_OPERATORS: &[TokenKind] = &[
    TokenKind::Assignment,
    TokenKind::PlusAssignment,
    TokenKind::MinusAssignment,
    TokenKind::TimesAssignment,
    TokenKind::DivideAssignment,
    TokenKind::ModuloAssignment,
];

/// The left-associative binary levels, loosest first.
const BINARY_LEVELS: &[&[TokenKind]] = &[
    &[TokenKind::LogicalOr],
    &[TokenKind::LogicalAnd],
    &[
        TokenKind::LessThan,
        TokenKind::GreaterThan,
        TokenKind::LessThanOrEqual,
        TokenKind::GreaterThanOrEqual,
        TokenKind::Equality,
        TokenKind::Inequality,
    ],
    &[TokenKind::Plus, TokenKind::Minus],
    &[TokenKind::Asterisk, TokenKind::Divide, TokenKind::Modulo],
];

const UNARY_OPERATORS: &[TokenKind] = &[
    TokenKind::Asterisk,
    TokenKind::Ampersand,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::LogicalNot,
    TokenKind::Increment,
    TokenKind::Decrement,
];

const MEMBER_ACCESS_OPERATORS: &[TokenKind] = &[TokenKind::Dot, TokenKind::Arrow];

const LITERAL_KINDS: &[TokenKind] = &[
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
    TokenKind::IntegerLiteral,
    TokenKind::FloatLiteral,
    TokenKind::StringLiteral,
    TokenKind::CharacterLiteral,
];

impl<'c, 'lex> Parser<'c, 'lex> {
    pub(crate) fn expression(&mut self) -> Result<Option<Expression<'c>>, ParseError> {
        self.assignment()
    }

    /// Level 0. Assignment is right-associative: the right operand is parsed
    /// by recursing into this level again.
    fn assignment(&mut self) -> Result<Option<Expression<'c>>, ParseError> {
        let left = match self.binary_expression(0)? {
            Some(left) => left,
            None => return Ok(None),
        };
        if let Some(operator) = self.accept_any(ASSIGNMENT_OPERATORS) {
            let right = match self.assignment()? {
                Some(right) => right,
                None => {
                    return Err(self.failure("Expected expression after assignment operator"))
                }
            };
            return Ok(Some(Expression::Binary(Box::new(BinaryOperatorNode {
                operator,
                left,
                right,
            }))));
        }
        Ok(Some(left))
    }

    /// Levels 1 through 5, shared by all left-associative binary operators:
    /// parse a tighter operand, then fold further operands into a left-leaning
    /// tree while the level's operators keep matching.
    fn binary_expression(&mut self, level: usize) -> Result<Option<Expression<'c>>, ParseError> {
        if level == BINARY_LEVELS.len() {
            return self.unary();
        }
        let mut left = match self.binary_expression(level + 1)? {
            Some(left) => left,
            None => return Ok(None),
        };
        while let Some(operator) = self.accept_any(BINARY_LEVELS[level]) {
            let right = match self.binary_expression(level + 1)? {
                Some(right) => right,
                None => {
                    return Err(self.failure("Expected operand after binary operator"));
                }
            };
            left = Expression::Binary(Box::new(BinaryOperatorNode {
                operator,
                left,
                right,
            }));
        }
        Ok(Some(left))
    }

    /// Level 6. A run of prefix operators binds outer to inner: the first
    /// operator read ends up as the outermost node.
    fn unary(&mut self) -> Result<Option<Expression<'c>>, ParseError> {
        let mut operators = Vec::new();
        while let Some(operator) = self.accept_any(UNARY_OPERATORS) {
            operators.push(operator);
        }
        match self.postfix()? {
            Some(mut operand) => {
                for operator in operators.into_iter().rev() {
                    operand = Expression::Unary(Box::new(UnaryOperatorNode { operator, operand }));
                }
                Ok(Some(operand))
            }
            None if operators.is_empty() => Ok(None),
            None => Err(self.failure("Expected operand after unary operator")),
        }
    }

    /// Level 7. Postfix forms chain left to right; every node owns the chain
    /// parsed so far as its left child.
    fn postfix(&mut self) -> Result<Option<Expression<'c>>, ParseError> {
        let mut left = match self.value()? {
            Some(value) => value,
            None => return Ok(None),
        };
        loop {
            if let Some(operator) = self.accept_any(MEMBER_ACCESS_OPERATORS) {
                let name = self.expect(
                    TokenKind::Identifier,
                    "Expected member name after access operator",
                )?;
                left = Expression::MemberAccess(Box::new(MemberAccessNode {
                    operator,
                    name,
                    left,
                }));
                continue;
            }
            if self.accept(TokenKind::OpenParen).is_some() {
                let mut arguments = Vec::new();
                if let Some(first) = self.expression()? {
                    arguments.push(first);
                    while self.accept(TokenKind::Comma).is_some() {
                        match self.expression()? {
                            Some(argument) => arguments.push(argument),
                            None => {
                                return Err(
                                    self.failure("Expected argument after ',' in call")
                                )
                            }
                        }
                    }
                }
                self.expect(TokenKind::CloseParen, "Expected ')' to close argument list")?;
                left = Expression::Call(Box::new(CallNode { left, arguments }));
                continue;
            }
            if self.accept(TokenKind::As).is_some() {
                let target_type = match self.parse_type()? {
                    Some(target_type) => target_type,
                    None => return Err(self.failure("Expected type after 'as'")),
                };
                left = Expression::Cast(Box::new(CastNode { left, target_type }));
                continue;
            }
            if self.accept(TokenKind::OpenBracket).is_some() {
                let index = match self.expression()? {
                    Some(index) => index,
                    None => return Err(self.failure("Expected index expression after '['")),
                };
                self.expect(
                    TokenKind::CloseBracket,
                    "Expected ']' to close index expression",
                )?;
                left = Expression::Index(Box::new(IndexNode { left, index }));
                continue;
            }
            break;
        }
        Ok(Some(left))
    }

    fn value(&mut self) -> Result<Option<Expression<'c>>, ParseError> {
        if let Some(value) = self.accept_any(LITERAL_KINDS) {
            return Ok(Some(Expression::Literal(LiteralNode { value })));
        }
        if let Some(name) = self.accept(TokenKind::Identifier) {
            return Ok(Some(Expression::NameReference(NameReferenceNode { name })));
        }
        self.grouped_expression()
    }

    pub(crate) fn grouped_expression(&mut self) -> Result<Option<Expression<'c>>, ParseError> {
        if self.accept(TokenKind::OpenParen).is_none() {
            return Ok(None);
        }
        let inner = match self.expression()? {
            Some(inner) => inner,
            None => return Err(self.failure("Expected expression inside parentheses")),
        };
        self.expect(
            TokenKind::CloseParen,
            "Expected ')' to close grouped expression",
        )?;
        Ok(Some(inner))
    }
}
