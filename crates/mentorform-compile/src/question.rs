//! One question → an [`XLSFormItem`] (spec §4.D).

use mentorform_common::{CoreResult, QuestionKind};
use mentorform_expr::{eq, evaluate, if_, int_, str_, var};
use mentorform_model::Question;
use mentorform_rules::compile_rules;
use mentorform_xlsform::{RowType, XLSFormChoice, XLSFormRecord};

use crate::item::XLSFormItem;
use crate::support::{int_score_text, perc_ratio_text, relevance_text};

/// Lowers one question, including recursive lowering of any sub-questions
/// a "generic compound" kind might carry (`PERC`'s `NUM`/`DEN` pair is
/// handled inline, not via recursion — see the `PERC` arm below).
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(question_id = %q.id())))]
pub fn lower_question(q: &Question) -> CoreResult<XLSFormItem> {
    let qid = q.id().as_str().to_string();

    let relevance_gate = relevance_gate_record(q, &qid)?;

    let (body_records, body_choices, needs_scores) = match q.kind() {
        QuestionKind::Bool => (vec![bool_body(q, &qid)?], Vec::new(), true),
        QuestionKind::Count => (
            vec![plain_body(q, &qid, RowType::Integer, true)?],
            Vec::new(),
            true,
        ),
        QuestionKind::Rate => (
            vec![plain_body(q, &qid, RowType::Decimal, false)?],
            Vec::new(),
            true,
        ),
        QuestionKind::Text if q.sub_questions().is_empty() => (
            vec![plain_body(q, &qid, RowType::Text, false)?],
            Vec::new(),
            true,
        ),
        QuestionKind::Multi => {
            let (row, choices) = multi_body(q, &qid)?;
            (vec![row], choices, true)
        }
        QuestionKind::Select => {
            let (row, choices) = select_body(q, &qid)?;
            (vec![row], choices, true)
        }
        QuestionKind::Perc => {
            let (records, choices) = perc_body(q, &qid)?;
            (records, choices, false)
        }
        _ if !q.sub_questions().is_empty() => {
            let (records, choices) = generic_compound_body(q, &qid)?;
            (records, choices, false)
        }
        _ => (
            vec![plain_body(q, &qid, RowType::Text, false)?],
            Vec::new(),
            true,
        ),
    };

    let mut records = vec![relevance_gate];
    records.extend(body_records);
    if needs_scores {
        records.extend(score_records(q, &qid)?);
    }

    Ok(XLSFormItem {
        records,
        choices: body_choices,
    })
}

/// §4.D item 1 — the relevance gate row.
fn relevance_gate_record(q: &Question, qid: &str) -> CoreResult<XLSFormRecord> {
    let label = match q.display_ordinal() {
        Some(n) => format!("{n}. Is the question below applicable?"),
        None => "Is the question below applicable?".to_string(),
    };
    let relevant = if q.na_option() { "yes" } else { "no" };
    Ok(XLSFormRecord::new(RowType::SelectOne("yes_no".into()))
        .appearance("columns-pack")
        .default("yes")
        .name(format!("{qid}_RELEVANCE"))
        .label(label)
        .relevant(relevant))
}

/// §4.D items 3-5 — the three fixed score records.
fn score_records(q: &Question, qid: &str) -> CoreResult<Vec<XLSFormRecord>> {
    let score_calc = match q.rule_source() {
        Some(src) => evaluate(&compile_rules(src, qid, q.kind(), q.answer_type(), None)?).into_string(),
        None => evaluate(&str_("gray")).into_string(),
    };
    let score = XLSFormRecord::new(RowType::Calculate)
        .name(format!("{qid}_SCORE"))
        .calculation(score_calc)
        .default("gray");

    let int_score = XLSFormRecord::new(RowType::Calculate)
        .name(format!("{qid}_INT_SCORE"))
        .calculation(int_score_text(qid)?)
        .default("0");

    let max_calc = if q.rule_source().is_none() {
        "0".to_string()
    } else if q.na_option() {
        let gated = if_(
            eq(var(format!("{qid}_RELEVANCE")), str_("yes"))?,
            int_(3),
            int_(0),
        )?;
        evaluate(&gated).into_string()
    } else {
        "3".to_string()
    };
    let max_score = XLSFormRecord::new(RowType::Calculate)
        .name(format!("{qid}_MAX_SCORE"))
        .calculation(max_calc)
        .default("0");

    Ok(vec![score, int_score, max_score])
}

fn bool_body(q: &Question, qid: &str) -> CoreResult<XLSFormRecord> {
    Ok(XLSFormRecord::new(RowType::SelectOne("yes_no".into()))
        .appearance("columns-pack")
        .name(qid)
        .label(q.label())
        .relevant(relevance_text(qid, q.na_option())?))
}

/// The `COUNT`/`RATE`/generic-`TEXT`/generic-simple body: one plain input
/// row, optionally carrying the `.>=0` constraint for positive integers.
fn plain_body(q: &Question, qid: &str, row_type: RowType, positive_integer: bool) -> CoreResult<XLSFormRecord> {
    let mut row = XLSFormRecord::new(row_type)
        .name(qid)
        .label(q.label())
        .relevant(relevance_text(qid, q.na_option())?);
    if positive_integer {
        row = row.constraint(".>=0");
    }
    Ok(row)
}

fn multi_body(q: &Question, qid: &str) -> CoreResult<(XLSFormRecord, Vec<XLSFormChoice>)> {
    let row = XLSFormRecord::new(RowType::SelectMultiple(qid.to_string()))
        .name(qid)
        .label(q.label())
        .relevant(relevance_text(qid, q.na_option())?);
    let choices = q
        .sub_questions()
        .values()
        .map(|sub| XLSFormChoice::new(qid, sub.id().as_str(), sub.label()))
        .collect();
    Ok((row, choices))
}

fn select_body(q: &Question, qid: &str) -> CoreResult<(XLSFormRecord, Vec<XLSFormChoice>)> {
    let row = XLSFormRecord::new(RowType::SelectOne(qid.to_string()))
        .name(qid)
        .label(q.label())
        .relevant(relevance_text(qid, q.na_option())?);
    let choices = q
        .options_set()
        .iter()
        .enumerate()
        .map(|(i, opt)| XLSFormChoice::new(qid, format!("{qid}_{}", i + 1), opt.clone()))
        .collect();
    Ok((row, choices))
}

/// `PERC` — a `begin_group`/`end_group` pair wrapping its `NUM`/`DEN`
/// sub-questions, the ratio `calculate` row, the percent-display note,
/// and (unlike the other kinds) the three score records nested inside
/// the group rather than appended after it (§4.D).
fn perc_body(q: &Question, qid: &str) -> CoreResult<(Vec<XLSFormRecord>, Vec<XLSFormChoice>)> {
    let num_q = q
        .sub_questions()
        .values()
        .find(|s| s.kind() == QuestionKind::Num)
        .expect("PERC question invariant guarantees exactly one NUM sub-question");
    let den_q = q
        .sub_questions()
        .values()
        .find(|s| s.kind() == QuestionKind::Den)
        .expect("PERC question invariant guarantees exactly one DEN sub-question");

    let begin = XLSFormRecord::new(RowType::BeginGroup)
        .appearance("table-list")
        .name(format!("{qid}_PERC_GRP"))
        .label(q.label())
        .relevant(relevance_text(qid, q.na_option())?);

    let num_row = XLSFormRecord::new(RowType::Integer)
        .name(num_q.id().as_str())
        .label(num_q.label())
        .constraint(".>=0");
    let den_row = XLSFormRecord::new(RowType::Integer)
        .name(den_q.id().as_str())
        .label(den_q.label())
        .constraint(".>=0");

    let ratio_calc = perc_ratio_text(num_q.id().as_str(), den_q.id().as_str())?;
    let ratio_row = XLSFormRecord::new(RowType::Calculate)
        .name(qid)
        .calculation(ratio_calc);

    let display_row = XLSFormRecord::new(RowType::Note)
        .name(format!("{qid}_PERC_CALC_DISPLAY"))
        .hint(format!("${{{qid}}}%"));

    let mut records = vec![begin, num_row, den_row, ratio_row, display_row];
    records.extend(score_records(q, qid)?);
    records.push(XLSFormRecord::new(RowType::EndGroup));

    Ok((records, Vec::new()))
}

/// Any other kind that carries sub-questions: a `begin_group` around a
/// recursive lowering of each child, the parent's own three score
/// records, then `end_group`.
fn generic_compound_body(q: &Question, qid: &str) -> CoreResult<(Vec<XLSFormRecord>, Vec<XLSFormChoice>)> {
    let begin = XLSFormRecord::new(RowType::BeginGroup)
        .name(format!("{qid}_GRP"))
        .label(q.label())
        .relevant(relevance_text(qid, q.na_option())?);

    let mut records = vec![begin];
    let mut choices = Vec::new();
    for sub in q.sub_questions().values() {
        let item = lower_question(sub)?;
        records.extend(item.records);
        choices.extend(item.choices);
    }
    records.extend(score_records(q, qid)?);
    records.push(XLSFormRecord::new(RowType::EndGroup));

    Ok((records, choices))
}
