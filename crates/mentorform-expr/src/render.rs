//! Rendering expressions down to XPath 1.0 / XLSForm source text.
//!
//! Rendering never fails — only construction can, and by the time an
//! [`Expr`] exists it is already well-typed.

use std::fmt;

use crate::expr::{BinOp, Expr, ExprNode, UnaryOp};
use crate::func::Func;
use crate::literal::Literal;

/// The rendered XPath source of an expression, as would be placed verbatim
/// into an XLSForm cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPathText(String);

impl XPathText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for XPathText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<XPathText> for String {
    fn from(t: XPathText) -> Self {
        t.0
    }
}

/// Renders `expr` to its XPath source text.
pub fn evaluate(expr: &Expr) -> XPathText {
    XPathText(render_node(&expr.node))
}

fn render_node(node: &ExprNode) -> String {
    match node {
        ExprNode::Literal(lit) => render_literal(lit),
        ExprNode::Var(id) => format!("${{{id}}}"),
        ExprNode::SelfRef => ".".to_string(),
        ExprNode::Unary(UnaryOp::Not, inner) => format!("not({})", render_node(&inner.node)),
        ExprNode::Binary(op, left, right) => render_binary(*op, left, right),
        ExprNode::Call(func, args) => render_call(*func, args),
        ExprNode::Paren(inner) => format!("({})", render_node(&inner.node)),
    }
}

fn render_literal(lit: &Literal) -> String {
    match lit {
        Literal::Bool(true) => "true()".to_string(),
        Literal::Bool(false) => "false()".to_string(),
        Literal::Int(n) => n.to_string(),
        Literal::Number(x) => format!("{x}"),
        Literal::Text(s) => format!("'{s}'"),
    }
}

fn render_binary(op: BinOp, left: &Expr, right: &Expr) -> String {
    format!(
        "{} {} {}",
        render_node(&left.node),
        op.xpath_keyword(),
        render_node(&right.node)
    )
}

fn render_call(func: Func, args: &[Expr]) -> String {
    let rendered: Vec<String> = args.iter().map(|a| render_node(&a.node)).collect();
    format!("{}({})", func.xpath_name(), rendered.join(", "))
}
