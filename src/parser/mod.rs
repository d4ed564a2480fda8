//! The recursive descent parser over a token stream.
//!
//! Every grammar production is a method returning `Result<Option<Node>, ParseError>`:
//! `Ok(None)` means the production did not match its first, distinguishing
//! token and the caller may try an alternative; `Ok(Some(node))` is a parsed
//! subtree; `Err` is a hard failure raised once a distinguishing token was
//! consumed and the rest of the production failed to complete. Failures abort
//! the whole parse and no partial tree is returned.
//!
//! The grammar, with `?` optional, `*` zero-or-more and `|` alternation:
//!
//! ```text
//! Block       := ( Class | Function | Var ";" )*
//! Class       := "class" Ident "{" ( Var ";" | Function )* "}"
//! Function    := "function" Ident "(" [ Parameter ("," Parameter)* ] ")"
//!                SpecifiedType? Scope
//! Var         := "var" Ident SpecifiedType ( "=" Expression )?
//! SpecifiedType := ":" Type
//! Type        := NamedType | FunctionType
//! NamedType   := Ident "*"* "&"?
//! FunctionType:= "function" "*" "*"* "&"? "(" Type ("," Type)* ")" SpecifiedType?
//! Parameter   := Ident SpecifiedType Expression?
//! Scope       := "{" Statement* "}"
//! Statement   := FreeStatement | DelimitedStatement ";"
//! FreeStatement      := While | For | If
//! DelimitedStatement := Var | Label | Goto | Return | "break" | "continue"
//!                     | Expression
//! If          := "if" GroupedExpression Scope Else?
//! Else        := "else" ( If | Scope )
//! While       := "while" GroupedExpression Scope
//! For         := "for" "(" (Var | Expression)? ";" Expression? ";" Expression? ")" Scope
//! Label       := "label" Ident
//! Goto        := "goto" Ident
//! Return      := "return" Expression?
//! GroupedExpression := "(" Expression ")"
//! ```
//!
//! Expression parsing follows the precedence ladder documented in the
//! `expressions` module.
//!
//! # Example
//!
//! ```
//! use lang_fe::{remove_whitespace_and_comments, Code, Lexicon, Parser};
//!
//! let lexicon = Lexicon::new().unwrap();
//! let code = Code::from("function f(a:int):int { return a + 1; }");
//! let mut tokens = lexicon.tokenize(&code).unwrap();
//! remove_whitespace_and_comments(&mut tokens);
//!
//! let block = Parser::new(&tokens).parse_block().unwrap();
//! assert_eq!(block.globals.len(), 1);
//! ```

mod expressions;

#[cfg(test)]
mod __tests__;

use crate::ast::{
    BlockNode, ClassNode, ForNode, FunctionNode, FunctionTypeNode, Global, GotoNode, IfNode,
    LabelNode, Member, NamedTypeNode, ParameterNode, ReturnNode, ScopeNode, Statement, Type,
    VariableNode, WhileNode,
};
use crate::{Expression, Log, ParseError, Token, TokenKind};
use once_cell::unsync::OnceCell;

/// The grammar recognizer over a random-access token buffer.
///
/// The buffer is expected to be free of whitespace and comment tokens; run
/// [remove_whitespace_and_comments](crate::remove_whitespace_and_comments)
/// over the tokenized stream first.
pub struct Parser<'c, 'lex> {
    tokens: &'lex [Token<'c>],
    cursor: usize,
    log: OnceCell<Log<&'static str>>,
}

impl<'c, 'lex> Parser<'c, 'lex> {
    pub fn new(tokens: &'lex [Token<'c>]) -> Self {
        Self {
            tokens,
            cursor: 0,
            log: OnceCell::new(),
        }
    }

    /// Set a log label to debug parsing.
    /// Based on the level of the [Log], the parser will report its results.
    pub fn set_log(&self, log: Log<&'static str>) -> Result<(), String> {
        self.log
            .set(log)
            .map_err(|err| format!("Log label {} is already assigned.", err))
    }

    /// Parse the whole buffer as a top level block.
    ///
    /// Trailing tokens after the block raise a [ParseError].
    pub fn parse_block(&mut self) -> Result<BlockNode<'c>, ParseError> {
        let result = self
            .block()
            .and_then(|block| self.finish("the top level block").map(|_| block));
        self.log_result(&result);
        result
    }

    /// Parse the whole buffer as a single expression.
    pub fn parse_expression(&mut self) -> Result<Expression<'c>, ParseError> {
        let result = self
            .expression()
            .and_then(|expression| match expression {
                Some(expression) => Ok(expression),
                None => Err(self.failure("Expected an expression")),
            })
            .and_then(|expression| self.finish("the expression").map(|_| expression));
        self.log_result(&result);
        result
    }

    /// Recognize the buffer as a top level block, discarding the tree.
    pub fn recognize(&mut self) -> Result<(), ParseError> {
        self.parse_block().map(|_| ())
    }

    fn log_result<T>(&self, _result: &Result<T, ParseError>) {
        #[cfg(debug_assertions)]
        if let Some(log) = self.log.get() {
            match _result {
                Ok(_) => {
                    if log.order() >= Log::Success(()).order() {
                        println!("[{}; ParseSuccess]: consumed {} tokens", log, self.cursor);
                    }
                }
                Err(err) => {
                    if log.order() >= Log::Default(()).order() {
                        println!("[{}; ParseError]: {} at byte {}", log, err.message, err.pointer);
                    }
                }
            }
        }
    }

    // ---- stream primitives ----

    /// Consume the current token when it has the given kind.
    fn accept(&mut self, kind: TokenKind) -> Option<Token<'c>> {
        let token = self.tokens.get(self.cursor)?;
        if token.kind == kind {
            self.cursor += 1;
            Some(*token)
        } else {
            None
        }
    }

    /// Consume the current token when its kind is one of the given set.
    fn accept_any(&mut self, kinds: &[TokenKind]) -> Option<Token<'c>> {
        let token = self.tokens.get(self.cursor)?;
        if kinds.contains(&token.kind) {
            self.cursor += 1;
            Some(*token)
        } else {
            None
        }
    }

    /// [accept](Parser::accept), raising a failure with `message` on a mismatch.
    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token<'c>, ParseError> {
        match self.accept(kind) {
            Some(token) => Ok(token),
            None => Err(self.failure(message)),
        }
    }

    fn failure(&self, message: &str) -> ParseError {
        ParseError::new(self.pointer(), String::from(message))
    }

    /// The byte offset of the current token, or one past the last token once
    /// the buffer is exhausted.
    fn pointer(&self) -> usize {
        match self.tokens.get(self.cursor) {
            Some(token) => token.start,
            None => self.tokens.last().map_or(0, |token| token.end()),
        }
    }

    fn finish(&self, context: &str) -> Result<(), ParseError> {
        match self.tokens.get(self.cursor) {
            Some(token) => Err(ParseError::new(
                token.start,
                format!("Unexpected {:?} token after {}", token.kind, context),
            )),
            None => Ok(()),
        }
    }

    // ---- declarations ----

    fn block(&mut self) -> Result<BlockNode<'c>, ParseError> {
        let mut globals = Vec::new();
        loop {
            if let Some(class) = self.class()? {
                globals.push(Global::Class(class));
                continue;
            }
            if let Some(function) = self.function()? {
                globals.push(Global::Function(function));
                continue;
            }
            if let Some(variable) = self.variable()? {
                self.expect(
                    TokenKind::Semicolon,
                    "Expected ';' after global variable declaration",
                )?;
                globals.push(Global::Variable(variable));
                continue;
            }
            break;
        }
        Ok(BlockNode { globals })
    }

    fn class(&mut self) -> Result<Option<ClassNode<'c>>, ParseError> {
        if self.accept(TokenKind::Class).is_none() {
            return Ok(None);
        }
        let name = self.expect(TokenKind::Identifier, "Expected class name after 'class'")?;
        self.expect(TokenKind::OpenCurly, "Expected '{' to open class body")?;

        let mut members = Vec::new();
        loop {
            if let Some(variable) = self.variable()? {
                self.expect(
                    TokenKind::Semicolon,
                    "Expected ';' after member variable declaration",
                )?;
                members.push(Member::Variable(variable));
                continue;
            }
            if let Some(function) = self.function()? {
                members.push(Member::Function(function));
                continue;
            }
            break;
        }

        self.expect(TokenKind::CloseCurly, "Expected '}' to close class body")?;
        Ok(Some(ClassNode { name, members }))
    }

    fn function(&mut self) -> Result<Option<FunctionNode<'c>>, ParseError> {
        if self.accept(TokenKind::Function).is_none() {
            return Ok(None);
        }
        let name = self.expect(
            TokenKind::Identifier,
            "Expected function name after 'function'",
        )?;
        self.expect(TokenKind::OpenParen, "Expected '(' after function name")?;

        let mut parameters = Vec::new();
        if let Some(first) = self.parameter()? {
            parameters.push(first);
            while self.accept(TokenKind::Comma).is_some() {
                match self.parameter()? {
                    Some(parameter) => parameters.push(parameter),
                    None => {
                        return Err(
                            self.failure("Expected parameter after ',' in function signature")
                        )
                    }
                }
            }
        }

        self.expect(
            TokenKind::CloseParen,
            "Expected ')' to close function signature",
        )?;
        let return_type = self.specified_type()?;
        let scope = match self.scope()? {
            Some(scope) => scope,
            None => return Err(self.failure("Expected function body scope")),
        };

        Ok(Some(FunctionNode {
            name,
            parameters,
            return_type,
            scope,
        }))
    }

    fn parameter(&mut self) -> Result<Option<ParameterNode<'c>>, ParseError> {
        let name = match self.accept(TokenKind::Identifier) {
            Some(name) => name,
            None => return Ok(None),
        };
        let parameter_type = match self.specified_type()? {
            Some(parameter_type) => parameter_type,
            None => return Err(self.failure("Expected ':' and type after parameter name")),
        };
        let initial_value = self.expression()?;
        Ok(Some(ParameterNode {
            name,
            parameter_type,
            initial_value,
        }))
    }

    fn variable(&mut self) -> Result<Option<VariableNode<'c>>, ParseError> {
        if self.accept(TokenKind::Var).is_none() {
            return Ok(None);
        }
        let name = self.expect(TokenKind::Identifier, "Expected variable name after 'var'")?;
        let variable_type = match self.specified_type()? {
            Some(variable_type) => variable_type,
            None => return Err(self.failure("Expected ':' and type after variable name")),
        };
        let initial_value = if self.accept(TokenKind::Assignment).is_some() {
            match self.expression()? {
                Some(expression) => Some(expression),
                None => return Err(self.failure("Expected initializer expression after '='")),
            }
        } else {
            None
        };
        Ok(Some(VariableNode {
            name,
            variable_type,
            initial_value,
        }))
    }

    // ---- types ----

    fn specified_type(&mut self) -> Result<Option<Type<'c>>, ParseError> {
        if self.accept(TokenKind::Colon).is_none() {
            return Ok(None);
        }
        match self.parse_type()? {
            Some(specified) => Ok(Some(specified)),
            None => Err(self.failure("Expected type after ':'")),
        }
    }

    pub(crate) fn parse_type(&mut self) -> Result<Option<Type<'c>>, ParseError> {
        if let Some(function_type) = self.function_type()? {
            return Ok(Some(function_type));
        }
        self.named_type()
    }

    fn named_type(&mut self) -> Result<Option<Type<'c>>, ParseError> {
        let name = match self.accept(TokenKind::Identifier) {
            Some(name) => name,
            None => return Ok(None),
        };
        let mut parsed = Type::Named(NamedTypeNode { name });
        while self.accept(TokenKind::Asterisk).is_some() {
            parsed = Type::Pointer(Box::new(parsed));
        }
        if self.accept(TokenKind::Ampersand).is_some() {
            parsed = Type::Reference(Box::new(parsed));
        }
        Ok(Some(parsed))
    }

    fn function_type(&mut self) -> Result<Option<Type<'c>>, ParseError> {
        if self.accept(TokenKind::Function).is_none() {
            return Ok(None);
        }
        self.expect(
            TokenKind::Asterisk,
            "Expected '*' after 'function' in a function type",
        )?;
        let mut pointers = 1;
        while self.accept(TokenKind::Asterisk).is_some() {
            pointers += 1;
        }
        let reference = self.accept(TokenKind::Ampersand).is_some();

        self.expect(
            TokenKind::OpenParen,
            "Expected '(' to open function type parameter list",
        )?;
        let mut parameters = Vec::new();
        match self.parse_type()? {
            Some(first) => parameters.push(first),
            None => return Err(self.failure("Expected parameter type in function type")),
        }
        while self.accept(TokenKind::Comma).is_some() {
            match self.parse_type()? {
                Some(parameter) => parameters.push(parameter),
                None => {
                    return Err(self.failure("Expected parameter type after ',' in function type"))
                }
            }
        }
        self.expect(
            TokenKind::CloseParen,
            "Expected ')' to close function type parameter list",
        )?;
        let return_type = self.specified_type()?.map(Box::new);

        // A function type is always carried behind at least one pointer.
        let mut parsed = Type::Function(FunctionTypeNode {
            parameters,
            return_type,
        });
        for _ in 0..pointers {
            parsed = Type::Pointer(Box::new(parsed));
        }
        if reference {
            parsed = Type::Reference(Box::new(parsed));
        }
        Ok(Some(parsed))
    }

    // ---- statements ----

    fn scope(&mut self) -> Result<Option<ScopeNode<'c>>, ParseError> {
        if self.accept(TokenKind::OpenCurly).is_none() {
            return Ok(None);
        }
        let mut statements = Vec::new();
        while let Some(statement) = self.statement()? {
            statements.push(statement);
        }
        self.expect(TokenKind::CloseCurly, "Expected '}' to close scope")?;
        Ok(Some(ScopeNode { statements }))
    }

    fn statement(&mut self) -> Result<Option<Statement<'c>>, ParseError> {
        if let Some(statement) = self.free_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.delimited_statement()? {
            self.expect(TokenKind::Semicolon, "Expected ';' after statement")?;
            return Ok(Some(statement));
        }
        Ok(None)
    }

    fn free_statement(&mut self) -> Result<Option<Statement<'c>>, ParseError> {
        if let Some(node) = self.while_statement()? {
            return Ok(Some(Statement::While(node)));
        }
        if let Some(node) = self.for_statement()? {
            return Ok(Some(Statement::For(Box::new(node))));
        }
        if let Some(node) = self.if_statement()? {
            return Ok(Some(Statement::If(node)));
        }
        Ok(None)
    }

    fn delimited_statement(&mut self) -> Result<Option<Statement<'c>>, ParseError> {
        if let Some(variable) = self.variable()? {
            return Ok(Some(Statement::Variable(variable)));
        }
        if self.accept(TokenKind::Label).is_some() {
            let name = self.expect(TokenKind::Identifier, "Expected label name after 'label'")?;
            return Ok(Some(Statement::Label(LabelNode { name })));
        }
        if self.accept(TokenKind::Goto).is_some() {
            let name = self.expect(TokenKind::Identifier, "Expected label name after 'goto'")?;
            return Ok(Some(Statement::Goto(GotoNode { name })));
        }
        if self.accept(TokenKind::Return).is_some() {
            let value = self.expression()?;
            return Ok(Some(Statement::Return(ReturnNode { value })));
        }
        if self.accept(TokenKind::Break).is_some() {
            return Ok(Some(Statement::Break));
        }
        if self.accept(TokenKind::Continue).is_some() {
            return Ok(Some(Statement::Continue));
        }
        if let Some(expression) = self.expression()? {
            return Ok(Some(Statement::Expression(expression)));
        }
        Ok(None)
    }

    fn if_statement(&mut self) -> Result<Option<IfNode<'c>>, ParseError> {
        if self.accept(TokenKind::If).is_none() {
            return Ok(None);
        }
        let condition = match self.grouped_expression()? {
            Some(condition) => condition,
            None => return Err(self.failure("Expected '(' condition ')' after 'if'")),
        };
        let scope = match self.scope()? {
            Some(scope) => scope,
            None => return Err(self.failure("Expected scope after if condition")),
        };
        let else_branch = self.else_branch()?;
        Ok(Some(IfNode {
            condition: Some(condition),
            scope,
            else_branch,
        }))
    }

    fn else_branch(&mut self) -> Result<Option<Box<IfNode<'c>>>, ParseError> {
        if self.accept(TokenKind::Else).is_none() {
            return Ok(None);
        }
        if let Some(nested) = self.if_statement()? {
            return Ok(Some(Box::new(nested)));
        }
        let scope = match self.scope()? {
            Some(scope) => scope,
            None => return Err(self.failure("Expected 'if' or scope after 'else'")),
        };
        Ok(Some(Box::new(IfNode {
            condition: None,
            scope,
            else_branch: None,
        })))
    }

    fn while_statement(&mut self) -> Result<Option<WhileNode<'c>>, ParseError> {
        if self.accept(TokenKind::While).is_none() {
            return Ok(None);
        }
        let condition = match self.grouped_expression()? {
            Some(condition) => condition,
            None => return Err(self.failure("Expected '(' condition ')' after 'while'")),
        };
        let scope = match self.scope()? {
            Some(scope) => scope,
            None => return Err(self.failure("Expected scope after while condition")),
        };
        Ok(Some(WhileNode { condition, scope }))
    }

    fn for_statement(&mut self) -> Result<Option<ForNode<'c>>, ParseError> {
        if self.accept(TokenKind::For).is_none() {
            return Ok(None);
        }
        self.expect(TokenKind::OpenParen, "Expected '(' after 'for'")?;

        let initial_variable = self.variable()?;
        let initial_expression = if initial_variable.is_none() {
            self.expression()?
        } else {
            None
        };
        self.expect(TokenKind::Semicolon, "Expected ';' after for initializer")?;

        let condition = self.expression()?;
        self.expect(TokenKind::Semicolon, "Expected ';' after for condition")?;

        let iterator = self.expression()?;
        self.expect(TokenKind::CloseParen, "Expected ')' to close for header")?;

        let scope = match self.scope()? {
            Some(scope) => scope,
            None => return Err(self.failure("Expected scope after for header")),
        };

        Ok(Some(ForNode {
            initial_variable,
            initial_expression,
            condition,
            iterator,
            scope,
        }))
    }
}
