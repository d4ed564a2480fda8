//! Polymorphic traversal over the node family.
//!
//! A [Visitor] is a set of hooks, one per concrete node kind plus one default
//! per abstract category. An unoverridden concrete hook delegates to its
//! category default, category defaults chain up to [default_node](Visitor::default_node),
//! and the top default continues, so a visitor can implement coarse behavior by
//! overriding only the category hooks.
//!
//! Every node exposes `walk(visitor, visit_self)`. With `visit_self` the hook
//! for the node's own kind runs first; returning [Visit::Continue] descends
//! into the children while [Visit::Stop] prunes the subtree, which lets a hook
//! take over the recursion and walk the children itself. With `visit_self`
//! set to false the node's own hook is skipped and the children are walked
//! directly.

use super::{
    BinaryOperatorNode, BlockNode, CallNode, CastNode, ClassNode, Expression, ForNode,
    FunctionNode, FunctionTypeNode, Global, GotoNode, IfNode, IndexNode, LabelNode, LiteralNode,
    Member, MemberAccessNode, NameReferenceNode, NamedTypeNode, ParameterNode, ReturnNode,
    ScopeNode, Statement, Type, UnaryOperatorNode, VariableNode, WhileNode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The flow decision returned by every visitor hook.
pub enum Visit {
    /// Descend into the children of the visited node.
    Continue,
    /// Do not descend further through this subtree.
    Stop,
}

/// Traversal hooks over the node family.
pub trait Visitor<'c> {
    // Category defaults.

    /// Fallback for any node kind without a more specific hook.
    fn default_node(&mut self) -> Visit {
        Visit::Continue
    }
    fn default_statement(&mut self) -> Visit {
        self.default_node()
    }
    fn default_expression(&mut self) -> Visit {
        self.default_statement()
    }
    fn default_post_expression(&mut self) -> Visit {
        self.default_expression()
    }
    fn default_type(&mut self) -> Visit {
        self.default_node()
    }

    // Structural nodes.

    fn visit_block(&mut self, _node: &BlockNode<'c>) -> Visit {
        self.default_node()
    }
    fn visit_class(&mut self, _node: &ClassNode<'c>) -> Visit {
        self.default_node()
    }
    fn visit_function(&mut self, _node: &FunctionNode<'c>) -> Visit {
        self.default_node()
    }
    fn visit_parameter(&mut self, _node: &ParameterNode<'c>) -> Visit {
        self.default_node()
    }
    fn visit_variable(&mut self, _node: &VariableNode<'c>) -> Visit {
        self.default_node()
    }

    // Types.

    fn visit_named_type(&mut self, _node: &NamedTypeNode<'c>) -> Visit {
        self.default_type()
    }
    fn visit_pointer_type(&mut self, _pointee: &Type<'c>) -> Visit {
        self.default_type()
    }
    fn visit_reference_type(&mut self, _referent: &Type<'c>) -> Visit {
        self.default_type()
    }
    fn visit_function_type(&mut self, _node: &FunctionTypeNode<'c>) -> Visit {
        self.default_type()
    }

    // Statements.

    fn visit_scope(&mut self, _node: &ScopeNode<'c>) -> Visit {
        self.default_statement()
    }
    fn visit_if(&mut self, _node: &IfNode<'c>) -> Visit {
        self.default_statement()
    }
    fn visit_while(&mut self, _node: &WhileNode<'c>) -> Visit {
        self.default_statement()
    }
    fn visit_for(&mut self, _node: &ForNode<'c>) -> Visit {
        self.default_statement()
    }
    fn visit_return(&mut self, _node: &ReturnNode<'c>) -> Visit {
        self.default_statement()
    }
    fn visit_break(&mut self) -> Visit {
        self.default_statement()
    }
    fn visit_continue(&mut self) -> Visit {
        self.default_statement()
    }
    fn visit_label(&mut self, _node: &LabelNode<'c>) -> Visit {
        self.default_statement()
    }
    fn visit_goto(&mut self, _node: &GotoNode<'c>) -> Visit {
        self.default_statement()
    }

    // Expressions.

    fn visit_literal(&mut self, _node: &LiteralNode<'c>) -> Visit {
        self.default_expression()
    }
    fn visit_name_reference(&mut self, _node: &NameReferenceNode<'c>) -> Visit {
        self.default_expression()
    }
    fn visit_binary_operator(&mut self, _node: &BinaryOperatorNode<'c>) -> Visit {
        self.default_expression()
    }
    fn visit_unary_operator(&mut self, _node: &UnaryOperatorNode<'c>) -> Visit {
        self.default_expression()
    }

    // Postfix expressions.

    fn visit_member_access(&mut self, _node: &MemberAccessNode<'c>) -> Visit {
        self.default_post_expression()
    }
    fn visit_call(&mut self, _node: &CallNode<'c>) -> Visit {
        self.default_post_expression()
    }
    fn visit_cast(&mut self, _node: &CastNode<'c>) -> Visit {
        self.default_post_expression()
    }
    fn visit_index(&mut self, _node: &IndexNode<'c>) -> Visit {
        self.default_post_expression()
    }
}

impl<'c> BlockNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_block(self) {
                return;
            }
        }
        for global in &self.globals {
            global.walk(visitor, true);
        }
    }
}

impl<'c> Global<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        match self {
            Global::Class(node) => node.walk(visitor, visit_self),
            Global::Function(node) => node.walk(visitor, visit_self),
            Global::Variable(node) => node.walk(visitor, visit_self),
        }
    }
}

impl<'c> ClassNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_class(self) {
                return;
            }
        }
        for member in &self.members {
            member.walk(visitor, true);
        }
    }
}

impl<'c> Member<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        match self {
            Member::Variable(node) => node.walk(visitor, visit_self),
            Member::Function(node) => node.walk(visitor, visit_self),
        }
    }
}

impl<'c> FunctionNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_function(self) {
                return;
            }
        }
        for parameter in &self.parameters {
            parameter.walk(visitor, true);
        }
        if let Some(return_type) = &self.return_type {
            return_type.walk(visitor, true);
        }
        self.scope.walk(visitor, true);
    }
}

impl<'c> ParameterNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_parameter(self) {
                return;
            }
        }
        self.parameter_type.walk(visitor, true);
        if let Some(initial_value) = &self.initial_value {
            initial_value.walk(visitor, true);
        }
    }
}

impl<'c> VariableNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_variable(self) {
                return;
            }
        }
        self.variable_type.walk(visitor, true);
        if let Some(initial_value) = &self.initial_value {
            initial_value.walk(visitor, true);
        }
    }
}

impl<'c> ScopeNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_scope(self) {
                return;
            }
        }
        for statement in &self.statements {
            statement.walk(visitor, true);
        }
    }
}

impl<'c> Type<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        match self {
            Type::Named(node) => node.walk(visitor, visit_self),
            Type::Pointer(pointee) => {
                if visit_self {
                    if let Visit::Stop = visitor.visit_pointer_type(pointee) {
                        return;
                    }
                }
                pointee.walk(visitor, true);
            }
            Type::Reference(referent) => {
                if visit_self {
                    if let Visit::Stop = visitor.visit_reference_type(referent) {
                        return;
                    }
                }
                referent.walk(visitor, true);
            }
            Type::Function(node) => node.walk(visitor, visit_self),
        }
    }
}

impl<'c> NamedTypeNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            visitor.visit_named_type(self);
        }
    }
}

impl<'c> FunctionTypeNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_function_type(self) {
                return;
            }
        }
        for parameter in &self.parameters {
            parameter.walk(visitor, true);
        }
        if let Some(return_type) = &self.return_type {
            return_type.walk(visitor, true);
        }
    }
}

impl<'c> Statement<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        match self {
            Statement::Variable(node) => node.walk(visitor, visit_self),
            Statement::Expression(node) => node.walk(visitor, visit_self),
            Statement::If(node) => node.walk(visitor, visit_self),
            Statement::While(node) => node.walk(visitor, visit_self),
            Statement::For(node) => node.walk(visitor, visit_self),
            Statement::Return(node) => node.walk(visitor, visit_self),
            Statement::Break => {
                if visit_self {
                    visitor.visit_break();
                }
            }
            Statement::Continue => {
                if visit_self {
                    visitor.visit_continue();
                }
            }
            Statement::Label(node) => node.walk(visitor, visit_self),
            Statement::Goto(node) => node.walk(visitor, visit_self),
        }
    }
}

impl<'c> IfNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_if(self) {
                return;
            }
        }
        if let Some(condition) = &self.condition {
            condition.walk(visitor, true);
        }
        self.scope.walk(visitor, true);
        if let Some(else_branch) = &self.else_branch {
            else_branch.walk(visitor, true);
        }
    }
}

impl<'c> WhileNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_while(self) {
                return;
            }
        }
        self.condition.walk(visitor, true);
        self.scope.walk(visitor, true);
    }
}

impl<'c> ForNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_for(self) {
                return;
            }
        }
        if let Some(initial_variable) = &self.initial_variable {
            initial_variable.walk(visitor, true);
        }
        if let Some(initial_expression) = &self.initial_expression {
            initial_expression.walk(visitor, true);
        }
        if let Some(condition) = &self.condition {
            condition.walk(visitor, true);
        }
        if let Some(iterator) = &self.iterator {
            iterator.walk(visitor, true);
        }
        self.scope.walk(visitor, true);
    }
}

impl<'c> ReturnNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_return(self) {
                return;
            }
        }
        if let Some(value) = &self.value {
            value.walk(visitor, true);
        }
    }
}

impl<'c> LabelNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            visitor.visit_label(self);
        }
    }
}

impl<'c> GotoNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            visitor.visit_goto(self);
        }
    }
}

impl<'c> Expression<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        match self {
            Expression::Literal(node) => node.walk(visitor, visit_self),
            Expression::NameReference(node) => node.walk(visitor, visit_self),
            Expression::Binary(node) => node.walk(visitor, visit_self),
            Expression::Unary(node) => node.walk(visitor, visit_self),
            Expression::MemberAccess(node) => node.walk(visitor, visit_self),
            Expression::Call(node) => node.walk(visitor, visit_self),
            Expression::Cast(node) => node.walk(visitor, visit_self),
            Expression::Index(node) => node.walk(visitor, visit_self),
        }
    }
}

impl<'c> LiteralNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            visitor.visit_literal(self);
        }
    }
}

impl<'c> NameReferenceNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            visitor.visit_name_reference(self);
        }
    }
}

impl<'c> BinaryOperatorNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_binary_operator(self) {
                return;
            }
        }
        self.left.walk(visitor, true);
        self.right.walk(visitor, true);
    }
}

impl<'c> UnaryOperatorNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_unary_operator(self) {
                return;
            }
        }
        self.operand.walk(visitor, true);
    }
}

impl<'c> MemberAccessNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_member_access(self) {
                return;
            }
        }
        self.left.walk(visitor, true);
    }
}

impl<'c> CallNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_call(self) {
                return;
            }
        }
        self.left.walk(visitor, true);
        for argument in &self.arguments {
            argument.walk(visitor, true);
        }
    }
}

impl<'c> CastNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_cast(self) {
                return;
            }
        }
        self.left.walk(visitor, true);
        self.target_type.walk(visitor, true);
    }
}

impl<'c> IndexNode<'c> {
    pub fn walk(&self, visitor: &mut dyn Visitor<'c>, visit_self: bool) {
        if visit_self {
            if let Visit::Stop = visitor.visit_index(self) {
                return;
            }
        }
        self.left.walk(visitor, true);
        self.index.walk(visitor, true);
    }
}
