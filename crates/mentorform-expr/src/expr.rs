use mentorform_common::CoreError;

use crate::func::Func;
use crate::kind::Kind;
use crate::literal::Literal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

impl BinOp {
    /// The surrounding-whitespace keyword this operator renders as.
    pub(crate) fn xpath_keyword(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "div",
            BinOp::Eq => "=",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::And => "and",
            BinOp::Or => "or",
        }
    }

    fn operand_kind(self) -> Kind {
        match self {
            BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div => Kind::Number,
            BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge => Kind::Number,
            BinOp::Eq | BinOp::Ne => Kind::Any, // Number,Number or Text,Text — checked by caller
            BinOp::And | BinOp::Or => Kind::Bool,
        }
    }

    fn result_kind(self) -> Kind {
        match self {
            BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div => Kind::Number,
            _ => Kind::Bool,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
}

/// The sum type underlying every expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
    Literal(Literal),
    Var(String),
    SelfRef,
    Unary(UnaryOp, Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    Call(Func, Vec<Expr>),
    Paren(Box<Expr>),
}

/// A typed expression node: the payload plus the [`Kind`] it was built as.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub node: ExprNode,
    pub(crate) kind: Kind,
}

impl Expr {
    pub fn kind(&self) -> Kind {
        self.kind
    }

    fn new(node: ExprNode, kind: Kind) -> Self {
        Expr { node, kind }
    }

    fn check(self, want: Kind) -> Result<Expr, CoreError> {
        if self.kind.satisfies(want) {
            Ok(self)
        } else {
            Err(CoreError::invalid_expression(format!(
                "expected a {want} operand, found {}",
                self.kind
            )))
        }
    }

    /// Like [`Expr::check`] against [`Kind::Number`], but also accepts
    /// [`Kind::Int`] — arithmetic and comparison operators don't distinguish
    /// the two at the value level, only at the literal-spelling level.
    fn check_numeric(self) -> Result<Expr, CoreError> {
        if self.kind.is_numeric() {
            Ok(self)
        } else {
            Err(CoreError::invalid_expression(format!(
                "expected a numeric operand, found {}",
                self.kind
            )))
        }
    }
}

/* ---------------------------- Literals ---------------------------- */

pub fn bool_(b: bool) -> Expr {
    Expr::new(ExprNode::Literal(Literal::Bool(b)), Kind::Bool)
}

pub fn int_(n: i64) -> Expr {
    Expr::new(ExprNode::Literal(Literal::Int(n)), Kind::Int)
}

pub fn num(x: f64) -> Expr {
    Expr::new(ExprNode::Literal(Literal::Number(x)), Kind::Number)
}

pub fn str_(s: impl Into<String>) -> Expr {
    Expr::new(ExprNode::Literal(Literal::Text(s.into())), Kind::Text)
}

/* --------------------------- References ---------------------------- */

/// A reference to another question's answer cell: renders `${q_id}`.
///
/// A reference's true answer type belongs to the referenced question, not
/// to the expression node itself, so it carries [`Kind::Any`] and is
/// accepted wherever any other kind is expected. Callers that need a
/// specific interpretation wrap it in [`number`], [`intf`], or [`boolean`].
pub fn var(question_id: impl Into<String>) -> Expr {
    Expr::new(ExprNode::Var(question_id.into()), Kind::Any)
}

/// The current node (`.`), used inside a group context.
pub fn self_() -> Expr {
    Expr::new(ExprNode::SelfRef, Kind::Any)
}

/* --------------------------- Constants ------------------------------ */

pub fn zero() -> Expr {
    int_(0)
}
pub fn one() -> Expr {
    int_(1)
}
pub fn two() -> Expr {
    int_(2)
}
pub fn three() -> Expr {
    int_(3)
}
pub fn false_() -> Expr {
    bool_(false)
}
pub fn true_() -> Expr {
    bool_(true)
}

/* --------------------------- Arithmetic ------------------------------ */

fn binary(op: BinOp, a: Expr, b: Expr) -> Result<Expr, CoreError> {
    let want = op.operand_kind();
    let (a, b) = if want == Kind::Number {
        (a.check_numeric()?, b.check_numeric()?)
    } else {
        (a.check(want)?, b.check(want)?)
    };
    if op == BinOp::Eq || op == BinOp::Ne {
        // Number,Number or Text,Text — but not Number,Text.
        let both_numeric = a.kind.is_numeric() && b.kind.is_numeric();
        let both_text = a.kind == Kind::Text && b.kind == Kind::Text;
        let either_any = a.kind == Kind::Any || b.kind == Kind::Any;
        if !(both_numeric || both_text || either_any) {
            return Err(CoreError::invalid_expression(format!(
                "`{}` requires Number,Number or Text,Text operands, found {},{}",
                op.xpath_keyword(),
                a.kind,
                b.kind
            )));
        }
    }
    Ok(Expr::new(
        ExprNode::Binary(op, Box::new(a), Box::new(b)),
        op.result_kind(),
    ))
}

pub fn add(a: Expr, b: Expr) -> Result<Expr, CoreError> {
    binary(BinOp::Add, a, b)
}
pub fn sub(a: Expr, b: Expr) -> Result<Expr, CoreError> {
    binary(BinOp::Sub, a, b)
}
pub fn mul(a: Expr, b: Expr) -> Result<Expr, CoreError> {
    binary(BinOp::Mul, a, b)
}
pub fn div(a: Expr, b: Expr) -> Result<Expr, CoreError> {
    binary(BinOp::Div, a, b)
}

/* --------------------------- Comparison ------------------------------ */

pub fn eq(a: Expr, b: Expr) -> Result<Expr, CoreError> {
    binary(BinOp::Eq, a, b)
}
pub fn ne(a: Expr, b: Expr) -> Result<Expr, CoreError> {
    binary(BinOp::Ne, a, b)
}
pub fn lt(a: Expr, b: Expr) -> Result<Expr, CoreError> {
    binary(BinOp::Lt, a, b)
}
pub fn le(a: Expr, b: Expr) -> Result<Expr, CoreError> {
    binary(BinOp::Le, a, b)
}
pub fn gt(a: Expr, b: Expr) -> Result<Expr, CoreError> {
    binary(BinOp::Gt, a, b)
}
pub fn ge(a: Expr, b: Expr) -> Result<Expr, CoreError> {
    binary(BinOp::Ge, a, b)
}

/* ----------------------------- Logical -------------------------------- */

pub fn and_(a: Expr, b: Expr) -> Result<Expr, CoreError> {
    binary(BinOp::And, a, b)
}
pub fn or_(a: Expr, b: Expr) -> Result<Expr, CoreError> {
    binary(BinOp::Or, a, b)
}

pub fn not_(b: Expr) -> Result<Expr, CoreError> {
    let b = b.check(Kind::Bool)?;
    Ok(Expr::new(
        ExprNode::Unary(UnaryOp::Not, Box::new(b)),
        Kind::Bool,
    ))
}

/* ----------------------------- Functions ------------------------------- */

fn call(func: Func, args: Vec<Expr>, result: Kind) -> Result<Expr, CoreError> {
    if args.len() != func.arity() {
        return Err(CoreError::invalid_expression(format!(
            "`{}` takes {} argument(s), got {}",
            func.xpath_name(),
            func.arity(),
            args.len()
        )));
    }
    Ok(Expr::new(ExprNode::Call(func, args), result))
}

pub fn abs_(x: Expr) -> Result<Expr, CoreError> {
    let x = x.check_numeric()?;
    call(Func::Abs, vec![x], Kind::Number)
}

pub fn round_(x: Expr, places: Expr) -> Result<Expr, CoreError> {
    let x = x.check_numeric()?;
    let places = places.check(Kind::Int)?;
    call(Func::Round, vec![x, places], Kind::Number)
}

/// `int(...)` — truncates a number to an integer.
pub fn intf(x: Expr) -> Result<Expr, CoreError> {
    let x = x.check(Kind::Any)?;
    call(Func::Intf, vec![x], Kind::Int)
}

pub fn number(x: Expr) -> Result<Expr, CoreError> {
    let x = x.check(Kind::Any)?;
    call(Func::Number, vec![x], Kind::Number)
}

pub fn pow_(base: Expr, exp: Expr) -> Result<Expr, CoreError> {
    let base = base.check_numeric()?;
    let exp = exp.check_numeric()?;
    call(Func::Pow, vec![base, exp], Kind::Number)
}

pub fn boolean(x: Expr) -> Result<Expr, CoreError> {
    let x = x.check(Kind::Any)?;
    call(Func::Boolean, vec![x], Kind::Bool)
}

/// Accepted wherever Bool/Int/Number/Text is expected — the one
/// polymorphic node in the algebra.
pub fn coalesce(a: Expr, b: Expr) -> Expr {
    Expr::new(ExprNode::Call(Func::Coalesce, vec![a, b]), Kind::Any)
}

pub fn selected(arr: Expr, s: Expr) -> Result<Expr, CoreError> {
    let arr = arr.check(Kind::Any)?;
    let s = s.check(Kind::Text)?;
    call(Func::Selected, vec![arr, s], Kind::Bool)
}

pub fn count_selected(arr: Expr) -> Result<Expr, CoreError> {
    let arr = arr.check(Kind::Any)?;
    call(Func::CountSelected, vec![arr], Kind::Int)
}

pub fn if_(cond: Expr, then: Expr, else_: Expr) -> Result<Expr, CoreError> {
    let cond = cond.check(Kind::Bool)?;
    let result_kind = if then.kind == else_.kind {
        then.kind
    } else {
        Kind::Any
    };
    call(Func::If, vec![cond, then, else_], result_kind)
}

/* ----------------------------- Grouping -------------------------------- */

pub fn brkt(e: Expr) -> Expr {
    let kind = e.kind;
    Expr::new(ExprNode::Paren(Box::new(e)), kind)
}

impl std::ops::BitXor for Expr {
    type Output = Expr;

    /// `a ^ b` is shorthand for [`coalesce`]`(a, b)`.
    fn bitxor(self, rhs: Expr) -> Expr {
        coalesce(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_text_operands() {
        let err = add(str_("a"), str_("b")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidExpression { .. }));
    }

    #[test]
    fn eq_accepts_text_text_and_number_number() {
        assert!(eq(str_("a"), str_("b")).is_ok());
        assert!(eq(num(1.0), int_(2)).is_ok());
    }

    #[test]
    fn eq_rejects_number_text_mix() {
        assert!(eq(num(1.0), str_("a")).is_err());
    }

    #[test]
    fn coalesce_is_accepted_anywhere() {
        let c = coalesce(var("q"), zero());
        assert!(add(c.clone(), one()).is_ok());
        assert!(eq(c, str_("x")).is_ok());
    }

    #[test]
    fn bitxor_operator_matches_coalesce() {
        let a = var("q") ^ zero();
        let b = coalesce(var("q"), zero());
        assert_eq!(a, b);
    }

    #[test]
    fn comparisons_accept_int_and_number_mixed() {
        assert!(gt(int_(3), num(1.5)).is_ok());
        assert!(lt(num(1.0), int_(2)).is_ok());
    }

    #[test]
    fn if_arity_is_enforced() {
        let err = call(Func::If, vec![bool_(true)], Kind::Any).unwrap_err();
        assert!(matches!(err, CoreError::InvalidExpression { .. }));
    }
}
