//! Small expression-building helpers shared by question/section/checklist
//! lowering. Nothing here knows about the domain model's shape, only the
//! naming conventions (`{q}_RELEVANCE`, `{q}_SCORE`, ...) spec §4.D/§4.E
//! fix for generated record names.

use mentorform_common::{CoreError, CoreResult};
use mentorform_expr::{
    Expr, add, div, eq, evaluate, if_, int_, lt, mul, number, round_, str_, var,
};

/// `if(<short_circuit>, true(), ${q}_RELEVANCE = 'yes')`, §4.D's
/// "Relevance binding" — the `relevant` cell shared by every body row.
pub fn relevance_expr(question_id: &str, na_option: bool) -> CoreResult<Expr> {
    let short_circuit = if na_option {
        mentorform_expr::false_()
    } else {
        mentorform_expr::true_()
    };
    let gate = eq(var(format!("{question_id}_RELEVANCE")), str_("yes"))
        .map_err(expr_err(question_id))?;
    if_(short_circuit, mentorform_expr::true_(), gate).map_err(expr_err(question_id))
}

pub fn relevance_text(question_id: &str, na_option: bool) -> CoreResult<String> {
    Ok(evaluate(&relevance_expr(question_id, na_option)?).into_string())
}

/// `if(${q}_SCORE = 'green', 3, if(${q}_SCORE = 'yellow', 2,
/// if(${q}_SCORE = 'red', 1, 0)))` — §4.D item 4.
pub fn int_score_text(question_id: &str) -> CoreResult<String> {
    let score_name = format!("{question_id}_SCORE");
    let branch = |colour: &str| eq(var(score_name.clone()), str_(colour)).map_err(expr_err(question_id));
    let expr = if_(
        branch("green")?,
        int_(3),
        if_(
            branch("yellow")?,
            int_(2),
            if_(branch("red")?, int_(1), int_(0)).map_err(expr_err(question_id))?,
        )
        .map_err(expr_err(question_id))?,
    )
    .map_err(expr_err(question_id))?;
    Ok(evaluate(&expr).into_string())
}

/// `round((number(${num}) div number(${den})) * 100, 2)` style ratio
/// calculation shared by `PERC`'s own calc row and a section's
/// `_PERCENTAGE_SCORE` row — only the two variable names differ.
pub fn percentage_ratio_text(numerator_id: &str, denominator_id: &str) -> CoreResult<String> {
    let num = number(var(numerator_id)).map_err(expr_err(numerator_id))?;
    let den = number(var(denominator_id)).map_err(expr_err(denominator_id))?;
    let ratio = mentorform_expr::brkt(div(num, den).map_err(expr_err(numerator_id))?);
    let scaled = mul(ratio, mentorform_expr::num(100.0)).map_err(expr_err(numerator_id))?;
    let rounded = round_(scaled, int_(2)).map_err(expr_err(numerator_id))?;
    Ok(evaluate(&rounded).into_string())
}

/// `round((number(coalesce(${num}, 0)) div number(coalesce(${den}, 1))) *
/// 100, 2)` — the `PERC` sub-question ratio (§4.D). The coalesce defaults
/// guard against a `NUM`/`DEN` pair that hasn't been answered yet.
pub fn perc_ratio_text(num_id: &str, den_id: &str) -> CoreResult<String> {
    use mentorform_expr::{coalesce, one, zero};
    let num = number(coalesce(var(num_id), zero())).map_err(expr_err(num_id))?;
    let den = number(coalesce(var(den_id), one())).map_err(expr_err(den_id))?;
    let ratio = mentorform_expr::brkt(div(num, den).map_err(expr_err(num_id))?);
    let scaled = mul(ratio, mentorform_expr::num(100.0)).map_err(expr_err(num_id))?;
    let rounded = round_(scaled, int_(2)).map_err(expr_err(num_id))?;
    Ok(evaluate(&rounded).into_string())
}

/// `if(p < 90, 'red', if(p < 95, 'yellow', 'green'))` where `p` is the
/// supplied percentage expression — shared by both the §4.E colour band
/// calculation and nothing else, but factored out since S5 is an exact
/// test vector for it. Returned as an [`Expr`], not pre-rendered text, so
/// a caller that needs to wrap it further (the `na_option` gate) composes
/// at the expression level instead of re-parsing rendered XPath.
pub fn colour_band_expr(percentage: Expr, question_or_section_id: &str) -> CoreResult<Expr> {
    if_(
        lt(percentage.clone(), mentorform_expr::num(90.0)).map_err(expr_err(question_or_section_id))?,
        str_("red"),
        if_(
            lt(percentage, mentorform_expr::num(95.0)).map_err(expr_err(question_or_section_id))?,
            str_("yellow"),
            str_("green"),
        )
        .map_err(expr_err(question_or_section_id))?,
    )
    .map_err(expr_err(question_or_section_id))
}

/// Folds `names` right-to-left into `number(${name}) + number(${name}) +
/// ... + 0` — §4.E's `{s}_INT_SCORE`/`{s}_MAX_SCORE` sum.
pub fn sum_fold_text(names: &[String], id: &str) -> CoreResult<String> {
    let mut acc = int_(0);
    for name in names.iter().rev() {
        let term = number(var(name.clone())).map_err(expr_err(id))?;
        acc = add(term, acc).map_err(expr_err(id))?;
    }
    Ok(evaluate(&acc).into_string())
}

/// Escapes the Markdown special characters XLSForm's label renderer
/// treats specially, so a checklist name with e.g. `*` or `_` in it
/// doesn't accidentally turn into emphasis in the rendered form title.
pub fn markdown_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '*' | '_' | '[' | ']' | '(' | ')' | '`' | '#') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn expr_err(id: &str) -> impl Fn(CoreError) -> CoreError + '_ {
    move |e| match e {
        CoreError::InvalidExpression { detail } => CoreError::invalid_expression(format!("{id}: {detail}")),
        other => other,
    }
}
