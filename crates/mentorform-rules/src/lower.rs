//! Question-kind-aware lowering: [`crate::ast::Rule`] → [`mentorform_expr::Expr`].
//!
//! Parsing produces a kind-agnostic [`crate::ast::Rule`] list; this pass
//! validates each rule against the question's kind and answer type, then
//! walks it into a boolean condition plus a score colour.

use mentorform_common::{AnswerType, CoreError, CoreResult, QuestionKind, ScoreColor};
use mentorform_expr::{
    Expr, and_, count_selected, eq, ge, gt, if_, int_, intf, le, lt, not_, num, number, or_,
    selected, str_, var,
};

use crate::ast::{LogicOp, Rule, RuleForm, Term};
use crate::token::CmpOp;

/// One walked rule: a condition and the score it contributes when true.
pub struct Scored {
    pub cond: Expr,
    pub score: ScoreColor,
}

/// Walks a rule list against a question's kind, producing one [`Scored`]
/// per rule in source order.
///
/// `question_id` names the cell the rules refer to (`${question_id}` in the
/// rendered XPath). Returns [`CoreError::MetadataExpressionSyntaxError`] when
/// a rule form is not accepted by `kind`.
pub fn lower_rules(
    rules: &[Rule],
    question_id: &str,
    kind: QuestionKind,
    answer_type: AnswerType,
) -> CoreResult<Vec<Scored>> {
    rules
        .iter()
        .map(|rule| lower_one(rule, question_id, kind, answer_type))
        .collect()
}

fn lower_one(
    rule: &Rule,
    q: &str,
    kind: QuestionKind,
    answer_type: AnswerType,
) -> CoreResult<Scored> {
    let (cond, score) = match &rule.form {
        RuleForm::Bool(b) => (lower_bool(*b, q, kind)?, rule.score),
        RuleForm::Count(n) => (lower_count(*n, q, kind)?, rule.score),
        RuleForm::Cmp(terms) => (lower_cmp(terms, q, kind, answer_type)?, rule.score),
        RuleForm::Range(lo, hi) => (lower_range(*lo, *hi, q, kind)?, rule.score),
        RuleForm::Select(indices) => (lower_select(indices, q, kind)?, rule.score),
    };
    Ok(Scored { cond, score })
}

fn syntax_err(q: &str, detail: impl Into<String>) -> CoreError {
    CoreError::rule_syntax(q, detail)
}

fn lower_bool(value: bool, q: &str, kind: QuestionKind) -> CoreResult<Expr> {
    if kind != QuestionKind::Bool {
        return Err(syntax_err(
            q,
            format!("`If Y/N = ...` requires a BOOL question, found {kind}"),
        ));
    }
    let is_yes = selected(var(q), str_("yes")).map_err(|e| syntax_err(q, e.to_string()))?;
    // Both forms phrase their condition in terms of the `yes` option rather
    // than ever testing equality against a negative `'no'` literal; the
    // rule's score is used as written, not inverted.
    if value {
        not_(is_yes).map_err(|e| syntax_err(q, e.to_string()))
    } else {
        Ok(is_yes)
    }
}

fn lower_count(n: u32, q: &str, kind: QuestionKind) -> CoreResult<Expr> {
    match kind {
        QuestionKind::Multi => {
            let lhs = count_selected(var(q)).map_err(|e| syntax_err(q, e.to_string()))?;
            eq(lhs, int_(n as i64)).map_err(|e| syntax_err(q, e.to_string()))
        }
        QuestionKind::Count => {
            let lhs = intf(number(var(q)).map_err(|e| syntax_err(q, e.to_string()))?)
                .map_err(|e| syntax_err(q, e.to_string()))?;
            eq(lhs, int_(n as i64)).map_err(|e| syntax_err(q, e.to_string()))
        }
        other => Err(syntax_err(
            q,
            format!("`If <digits> = ...` requires MULTI or COUNT, found {other}"),
        )),
    }
}

fn cmp_accepts(kind: QuestionKind, answer_type: AnswerType) -> bool {
    matches!(
        kind,
        QuestionKind::Perc | QuestionKind::Multi | QuestionKind::Count | QuestionKind::Num | QuestionKind::Rate
    ) || answer_type == AnswerType::Float
}

fn lower_cmp(
    terms: &[(Option<LogicOp>, Term)],
    q: &str,
    kind: QuestionKind,
    answer_type: AnswerType,
) -> CoreResult<Expr> {
    if !cmp_accepts(kind, answer_type) {
        return Err(syntax_err(
            q,
            format!("comparison rules require PERC, MULTI, COUNT, NUM, RATE, or a float-valued question, found {kind}"),
        ));
    }
    let mut acc: Option<Expr> = None;
    for (connector, term) in terms {
        let piece = lower_term(*term, q, kind)?;
        acc = Some(match (acc, connector) {
            (None, _) => piece,
            (Some(prior), Some(LogicOp::And)) => {
                and_(prior, piece).map_err(|e| syntax_err(q, e.to_string()))?
            }
            (Some(prior), Some(LogicOp::Or)) => {
                or_(prior, piece).map_err(|e| syntax_err(q, e.to_string()))?
            }
            (Some(_), None) => {
                return Err(syntax_err(q, "comparison term missing a connector"));
            }
        });
    }
    acc.ok_or_else(|| syntax_err(q, "empty comparison expression"))
}

fn lower_term(term: Term, q: &str, kind: QuestionKind) -> CoreResult<Expr> {
    let wants_percent = kind == QuestionKind::Perc;
    if term.percent != wants_percent {
        return Err(syntax_err(
            q,
            if wants_percent {
                "a `%` suffix is required for PERC comparisons"
            } else {
                "a `%` suffix is only valid for PERC comparisons"
            },
        ));
    }

    let (lhs, rhs) = match kind {
        QuestionKind::Multi => (
            count_selected(var(q)).map_err(|e| syntax_err(q, e.to_string()))?,
            int_(term.value as i64),
        ),
        QuestionKind::Count => (
            intf(number(var(q)).map_err(|e| syntax_err(q, e.to_string()))?)
                .map_err(|e| syntax_err(q, e.to_string()))?,
            int_(term.value as i64),
        ),
        _ => (
            number(var(q)).map_err(|e| syntax_err(q, e.to_string()))?,
            num(term.value as f64),
        ),
    };

    match term.op {
        CmpOp::Gt => gt(lhs, rhs),
        CmpOp::Ge => ge(lhs, rhs),
        CmpOp::Lt => lt(lhs, rhs),
        CmpOp::Le => le(lhs, rhs),
    }
    .map_err(|e| syntax_err(q, e.to_string()))
}

fn lower_range(lo: u32, hi: u32, q: &str, kind: QuestionKind) -> CoreResult<Expr> {
    if kind != QuestionKind::Multi {
        return Err(syntax_err(
            q,
            format!("range rules require MULTI, found {kind}"),
        ));
    }
    let count_ge = {
        let c = count_selected(var(q)).map_err(|e| syntax_err(q, e.to_string()))?;
        ge(c, int_(lo as i64)).map_err(|e| syntax_err(q, e.to_string()))?
    };
    let count_le = {
        let c = count_selected(var(q)).map_err(|e| syntax_err(q, e.to_string()))?;
        le(c, int_(hi as i64)).map_err(|e| syntax_err(q, e.to_string()))?
    };
    and_(count_ge, count_le).map_err(|e| syntax_err(q, e.to_string()))
}

fn lower_select(indices: &[u32], q: &str, kind: QuestionKind) -> CoreResult<Expr> {
    if kind != QuestionKind::Select {
        return Err(syntax_err(
            q,
            format!("`If select ...` requires SELECT, found {kind}"),
        ));
    }
    let mut acc: Option<Expr> = None;
    for i in indices {
        let option_name = format!("{q}_{i}");
        let piece =
            selected(var(q), str_(option_name)).map_err(|e| syntax_err(q, e.to_string()))?;
        acc = Some(match acc {
            None => piece,
            Some(prior) => or_(prior, piece).map_err(|e| syntax_err(q, e.to_string()))?,
        });
    }
    acc.ok_or_else(|| syntax_err(q, "`If select` requires at least one option index"))
}

/// Folds a walked rule list right-to-left into one scoring expression, per
/// rule (cond, then-colour) pair.
///
/// Every rule, including the last, contributes its own `if`. The terminal
/// else is `outer_else` when the caller supplies one, or the literal
/// `'gray'` otherwise — the same default a question with no scoring rule
/// at all renders. An empty rule list with no `outer_else` has nothing to
/// build and raises `InvalidRuleSet`.
pub fn assemble(scored: Vec<Scored>, outer_else: Option<Expr>, q: &str) -> CoreResult<Expr> {
    if scored.is_empty() && outer_else.is_none() {
        return Err(CoreError::invalid_rule_set(q));
    }

    let mut acc = outer_else.unwrap_or_else(|| score_literal(ScoreColor::Gray));
    for item in scored.into_iter().rev() {
        acc = if_(item.cond, score_literal(item.score), acc).map_err(|e| syntax_err(q, e.to_string()))?;
    }
    Ok(acc)
}

fn score_literal(c: ScoreColor) -> Expr {
    str_(c.as_cell_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_rules;
    use crate::token::tokenize;
    use mentorform_expr::evaluate;

    fn walk(src: &str, q: &str, kind: QuestionKind, answer_type: AnswerType) -> Vec<Scored> {
        let tokens = tokenize(src).unwrap();
        let rules = parse_rules(&tokens).unwrap();
        lower_rules(&rules, q, kind, answer_type).unwrap()
    }

    #[test]
    fn bool_rule_negates_condition_and_keeps_its_own_score() {
        let scored = walk("If Y = Red", "q1", QuestionKind::Bool, AnswerType::Boolean);
        assert_eq!(scored[0].score, ScoreColor::Red);
        let text = evaluate(&scored[0].cond).into_string();
        assert_eq!(text, "not(selected(${q1}, 'yes'))");
    }

    #[test]
    fn bool_rule_n_form_is_symmetric() {
        let scored = walk("If N = Red", "q1", QuestionKind::Bool, AnswerType::Boolean);
        assert_eq!(scored[0].score, ScoreColor::Red);
        let text = evaluate(&scored[0].cond).into_string();
        assert_eq!(text, "selected(${q1}, 'yes')");
    }

    #[test]
    fn count_rule_rejects_wrong_kind() {
        let tokens = tokenize("If 3 = Red").unwrap();
        let rules = parse_rules(&tokens).unwrap();
        let err = lower_rules(&rules, "q1", QuestionKind::Text, AnswerType::String).unwrap_err();
        assert!(matches!(err, CoreError::MetadataExpressionSyntaxError { .. }));
    }

    #[test]
    fn perc_term_requires_percent_suffix() {
        let tokens = tokenize("If >10 = Red").unwrap();
        let rules = parse_rules(&tokens).unwrap();
        let err = lower_rules(&rules, "q1", QuestionKind::Perc, AnswerType::Float).unwrap_err();
        assert!(matches!(err, CoreError::MetadataExpressionSyntaxError { .. }));
    }

    #[test]
    fn compound_cmp_folds_left_to_right() {
        let scored = walk(
            "If >5% and =<10% = Yellow",
            "q1",
            QuestionKind::Perc,
            AnswerType::Float,
        );
        let text = evaluate(&scored[0].cond).into_string();
        assert_eq!(text, "number(${q1}) > 5 and number(${q1}) <= 10");
    }

    #[test]
    fn range_rule_renders_bounded_count() {
        let scored = walk("If 3-5 = Yellow", "q1", QuestionKind::Multi, AnswerType::IntegerZeroOrPositive);
        let text = evaluate(&scored[0].cond).into_string();
        assert_eq!(
            text,
            "count-selected(${q1}) >= 3 and count-selected(${q1}) <= 5"
        );
    }

    #[test]
    fn select_chain_ors_option_names() {
        let scored = walk("If select 1 or 3 = Green", "q1", QuestionKind::Select, AnswerType::String);
        let text = evaluate(&scored[0].cond).into_string();
        assert_eq!(text, "selected(${q1}, 'q1_1') or selected(${q1}, 'q1_3')");
    }

    #[test]
    fn assemble_without_outer_else_defaults_the_terminal_to_gray() {
        let scored = walk(
            "If >10% = Red ; If >5% and =<10% = Yellow ; If <5% = Green",
            "q1",
            QuestionKind::Perc,
            AnswerType::Float,
        );
        let expr = assemble(scored, None, "q1").unwrap();
        let text = evaluate(&expr).into_string();
        assert_eq!(
            text,
            "if(number(${q1}) > 10, 'red', if(number(${q1}) > 5 and number(${q1}) <= 10, 'yellow', if(number(${q1}) < 5, 'green', 'gray')))"
        );
    }

    #[test]
    fn assemble_accepts_a_single_rule_without_outer_else() {
        let scored = walk("If Y = Red", "q1", QuestionKind::Bool, AnswerType::Boolean);
        let expr = assemble(scored, None, "q1").unwrap();
        let text = evaluate(&expr).into_string();
        assert_eq!(text, "if(not(selected(${q1}, 'yes')), 'red', 'gray')");
    }

    #[test]
    fn assemble_with_outer_else_wraps_every_rule_including_the_last() {
        let scored = walk("If select 1 or 3 = Green", "q1", QuestionKind::Select, AnswerType::String);
        let expr = assemble(scored, Some(str_("red")), "q1").unwrap();
        let text = evaluate(&expr).into_string();
        assert_eq!(
            text,
            "if(selected(${q1}, 'q1_1') or selected(${q1}, 'q1_3'), 'green', 'red')"
        );
    }

    #[test]
    fn assemble_rejects_an_empty_rule_list_without_outer_else() {
        let err = assemble(Vec::new(), None, "q1").unwrap_err();
        assert!(matches!(err, CoreError::InvalidRuleSet { .. }));
    }
}
