//! Tokenizer, recursive-descent parser, and question-kind-aware lowering
//! for the mentorship checklist scoring-rule DSL (a semicolon-separated
//! list of `If <condition> = <colour>` rules).
//!
//! The pipeline is [`tokenize`] → [`parse_rules`] → [`lower_rules`] →
//! [`assemble`], mirroring the tokenizer/parser split of the wider
//! expression toolchain this crate builds on top of.

mod ast;
mod lower;
mod parser;
mod token;

pub use ast::{LogicOp, Rule, RuleForm, Term};
pub use lower::{Scored, assemble, lower_rules};
pub use parser::{ParseError, parse_rules};
pub use token::{CmpOp, Token, TokenKind, TokenizerError, tokenize};

use mentorform_common::{AnswerType, CoreResult, QuestionKind};
use mentorform_expr::Expr;

/// Convenience entry point: tokenizes, parses, and lowers a rule string in
/// one call, then assembles the result into a single scoring expression.
///
/// `outer_else` is forwarded to [`assemble`]; pass `None` to terminate the
/// chain with the literal `'gray'` default.
pub fn compile_rules(
    src: &str,
    question_id: &str,
    kind: QuestionKind,
    answer_type: AnswerType,
    outer_else: Option<Expr>,
) -> CoreResult<Expr> {
    let tokens = tokenize(src).map_err(|e| {
        mentorform_common::CoreError::rule_syntax(question_id, e.to_string())
    })?;
    let rules = parse_rules(&tokens).map_err(|e| {
        mentorform_common::CoreError::rule_syntax(question_id, e.to_string())
    })?;
    let scored = lower_rules(&rules, question_id, kind, answer_type)?;
    assemble(scored, outer_else, question_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentorform_expr::evaluate;

    #[test]
    fn compiles_a_full_perc_rule_set() {
        let expr = compile_rules(
            "If >10% = Red ; If >5% and =<10% = Yellow ; If <5% = Green",
            "S1_Q1",
            QuestionKind::Perc,
            AnswerType::Float,
            None,
        )
        .unwrap();
        let text = evaluate(&expr).into_string();
        assert!(text.contains("number(${S1_Q1})"));
        assert!(text.ends_with("'green', 'gray')))"));
    }

    #[test]
    fn surfaces_tokenizer_errors_as_rule_syntax_errors() {
        let err = compile_rules("If Maybe = Red", "S1_Q1", QuestionKind::Bool, AnswerType::Boolean, None)
            .unwrap_err();
        assert_eq!(err.offending_id(), Some("S1_Q1"));
    }
}
