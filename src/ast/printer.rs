//! Tree rendering through the visitor framework.
//!
//! [TreePrinter] is the built-in printing visitor: every hook opens a labeled
//! child on a [ptree::TreeBuilder], walks the node's children itself and
//! returns [Visit::Stop] to take over the recursion. The finished
//! [StringItem] renders through `ptree`, either to standard output with
//! [print_tree] or to any writer with [write_tree].

use super::{
    BinaryOperatorNode, BlockNode, CallNode, CastNode, ClassNode, ForNode, FunctionNode,
    FunctionTypeNode, GotoNode, IfNode, IndexNode, LabelNode, LiteralNode, MemberAccessNode,
    NameReferenceNode, NamedTypeNode, ParameterNode, ReturnNode, ScopeNode, Type,
    UnaryOperatorNode, VariableNode, Visit, Visitor, WhileNode,
};
use ptree::{item::StringItem, TreeBuilder};
use std::io;

/// The built-in printing visitor.
pub struct TreePrinter {
    builder: TreeBuilder,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self {
            builder: TreeBuilder::new(String::from("Tree")),
        }
    }

    /// The collected tree. When exactly one node was walked the artificial
    /// builder root is peeled off and the node itself becomes the root.
    pub fn finish(mut self) -> StringItem {
        let mut root = self.builder.build();
        if root.children.len() == 1 {
            root.children.pop().unwrap()
        } else {
            root
        }
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the tree rooted at `block` to standard output.
pub fn print_tree(block: &BlockNode) -> io::Result<()> {
    let mut printer = TreePrinter::new();
    block.walk(&mut printer, true);
    ptree::print_tree(&printer.finish())
}

/// Render the tree rooted at `block` into `writer`.
pub fn write_tree<W: io::Write>(block: &BlockNode, writer: W) -> io::Result<()> {
    let mut printer = TreePrinter::new();
    block.walk(&mut printer, true);
    ptree::write_tree(&printer.finish(), writer)
}

impl<'c> Visitor<'c> for TreePrinter {
    fn visit_block(&mut self, node: &BlockNode<'c>) -> Visit {
        self.builder.begin_child(String::from("BlockNode"));
        for global in &node.globals {
            global.walk(self, true);
        }
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_class(&mut self, node: &ClassNode<'c>) -> Visit {
        self.builder
            .begin_child(format!("ClassNode({})", node.name.text));
        for member in &node.members {
            member.walk(self, true);
        }
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_function(&mut self, node: &FunctionNode<'c>) -> Visit {
        self.builder
            .begin_child(format!("FunctionNode({})", node.name.text));
        for parameter in &node.parameters {
            parameter.walk(self, true);
        }
        if let Some(return_type) = &node.return_type {
            return_type.walk(self, true);
        }
        node.scope.walk(self, true);
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_parameter(&mut self, node: &ParameterNode<'c>) -> Visit {
        self.builder
            .begin_child(format!("ParameterNode({})", node.name.text));
        node.parameter_type.walk(self, true);
        if let Some(initial_value) = &node.initial_value {
            initial_value.walk(self, true);
        }
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_variable(&mut self, node: &VariableNode<'c>) -> Visit {
        self.builder
            .begin_child(format!("VariableNode({})", node.name.text));
        node.variable_type.walk(self, true);
        if let Some(initial_value) = &node.initial_value {
            initial_value.walk(self, true);
        }
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_scope(&mut self, node: &ScopeNode<'c>) -> Visit {
        self.builder.begin_child(String::from("ScopeNode"));
        for statement in &node.statements {
            statement.walk(self, true);
        }
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_named_type(&mut self, node: &NamedTypeNode<'c>) -> Visit {
        self.builder
            .add_empty_child(format!("NamedTypeNode({})", node.name.text));
        Visit::Stop
    }

    fn visit_pointer_type(&mut self, pointee: &Type<'c>) -> Visit {
        self.builder.begin_child(String::from("PointerTypeNode"));
        pointee.walk(self, true);
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_reference_type(&mut self, referent: &Type<'c>) -> Visit {
        self.builder.begin_child(String::from("ReferenceTypeNode"));
        referent.walk(self, true);
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_function_type(&mut self, node: &FunctionTypeNode<'c>) -> Visit {
        self.builder.begin_child(String::from("FunctionTypeNode"));
        for parameter in &node.parameters {
            parameter.walk(self, true);
        }
        if let Some(return_type) = &node.return_type {
            return_type.walk(self, true);
        }
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_if(&mut self, node: &IfNode<'c>) -> Visit {
        self.builder.begin_child(String::from("IfNode"));
        if let Some(condition) = &node.condition {
            condition.walk(self, true);
        }
        node.scope.walk(self, true);
        if let Some(else_branch) = &node.else_branch {
            else_branch.walk(self, true);
        }
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_while(&mut self, node: &WhileNode<'c>) -> Visit {
        self.builder.begin_child(String::from("WhileNode"));
        node.condition.walk(self, true);
        node.scope.walk(self, true);
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_for(&mut self, node: &ForNode<'c>) -> Visit {
        self.builder.begin_child(String::from("ForNode"));
        if let Some(initial_variable) = &node.initial_variable {
            initial_variable.walk(self, true);
        }
        if let Some(initial_expression) = &node.initial_expression {
            initial_expression.walk(self, true);
        }
        if let Some(condition) = &node.condition {
            condition.walk(self, true);
        }
        if let Some(iterator) = &node.iterator {
            iterator.walk(self, true);
        }
        node.scope.walk(self, true);
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_return(&mut self, node: &ReturnNode<'c>) -> Visit {
        self.builder.begin_child(String::from("ReturnNode"));
        if let Some(value) = &node.value {
            value.walk(self, true);
        }
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_break(&mut self) -> Visit {
        self.builder.add_empty_child(String::from("BreakNode"));
        Visit::Stop
    }

    fn visit_continue(&mut self) -> Visit {
        self.builder.add_empty_child(String::from("ContinueNode"));
        Visit::Stop
    }

    fn visit_label(&mut self, node: &LabelNode<'c>) -> Visit {
        self.builder
            .add_empty_child(format!("LabelNode({})", node.name.text));
        Visit::Stop
    }

    fn visit_goto(&mut self, node: &GotoNode<'c>) -> Visit {
        self.builder
            .add_empty_child(format!("GotoNode({})", node.name.text));
        Visit::Stop
    }

    fn visit_literal(&mut self, node: &LiteralNode<'c>) -> Visit {
        self.builder
            .add_empty_child(format!("LiteralNode({})", node.value.text));
        Visit::Stop
    }

    fn visit_name_reference(&mut self, node: &NameReferenceNode<'c>) -> Visit {
        self.builder
            .add_empty_child(format!("NameReferenceNode({})", node.name.text));
        Visit::Stop
    }

    fn visit_binary_operator(&mut self, node: &BinaryOperatorNode<'c>) -> Visit {
        self.builder
            .begin_child(format!("BinaryOperatorNode({})", node.operator.text));
        node.left.walk(self, true);
        node.right.walk(self, true);
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_unary_operator(&mut self, node: &UnaryOperatorNode<'c>) -> Visit {
        self.builder
            .begin_child(format!("UnaryOperatorNode({})", node.operator.text));
        node.operand.walk(self, true);
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_member_access(&mut self, node: &MemberAccessNode<'c>) -> Visit {
        self.builder.begin_child(format!(
            "MemberAccessNode({}, {})",
            node.operator.text, node.name.text
        ));
        node.left.walk(self, true);
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_call(&mut self, node: &CallNode<'c>) -> Visit {
        self.builder.begin_child(String::from("CallNode"));
        node.left.walk(self, true);
        for argument in &node.arguments {
            argument.walk(self, true);
        }
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_cast(&mut self, node: &CastNode<'c>) -> Visit {
        self.builder.begin_child(String::from("CastNode"));
        node.left.walk(self, true);
        node.target_type.walk(self, true);
        self.builder.end_child();
        Visit::Stop
    }

    fn visit_index(&mut self, node: &IndexNode<'c>) -> Visit {
        self.builder.begin_child(String::from("IndexNode"));
        node.left.walk(self, true);
        node.index.walk(self, true);
        self.builder.end_child();
        Visit::Stop
    }
}
