//! One section → an [`XLSFormItem`] (spec §4.E).

use mentorform_common::CoreResult;
use mentorform_expr::{eq, evaluate, if_, str_, var};
use mentorform_model::Section;
use mentorform_xlsform::{RowType, XLSFormRecord};

use crate::item::XLSFormItem;
use crate::question::lower_question;
use crate::support::{colour_band_expr, percentage_ratio_text, sum_fold_text};

#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(section_id = %s.id())))]
pub fn lower_section(s: &Section) -> CoreResult<XLSFormItem> {
    let sid = s.id().as_str().to_string();

    let mut records = vec![XLSFormRecord::new(RowType::BeginGroup)
        .appearance("field-list")
        .name(sid.clone())
        .label(format!("SEC #: {sid} {}", s.title()))];

    if let Some(standard) = s.standard() {
        records.push(
            XLSFormRecord::new(RowType::Note)
                .name(format!("{sid}_STANDARD"))
                .label(format!("**STANDARD:** {standard}")),
        );
    }
    if let Some(instructions) = s.instructions() {
        records.push(
            XLSFormRecord::new(RowType::Note)
                .name(format!("{sid}_INSTRUCTIONS"))
                .label(instructions),
        );
    }
    if s.na_option() {
        records.push(
            XLSFormRecord::new(RowType::Trigger)
                .name(format!("{sid}_NA"))
                .label("This section does not apply"),
        );
    }

    let mut choices = Vec::new();
    let mut question_int_scores = Vec::new();
    let mut question_max_scores = Vec::new();
    for question in s.questions().values() {
        let item = lower_question(question)?;
        records.extend(item.records);
        choices.extend(item.choices);
        let qid = question.id().as_str();
        question_int_scores.push(format!("{qid}_INT_SCORE"));
        question_max_scores.push(format!("{qid}_MAX_SCORE"));
    }

    records.push(
        XLSFormRecord::new(RowType::Text)
            .appearance("multiline")
            .name(format!("{sid}_COMMENTS"))
            .label("Comments"),
    );

    records.push(
        XLSFormRecord::new(RowType::Calculate)
            .name(format!("{sid}_INT_SCORE"))
            .calculation(sum_fold_text(&question_int_scores, &sid)?)
            .default("0"),
    );
    records.push(
        XLSFormRecord::new(RowType::Calculate)
            .name(format!("{sid}_MAX_SCORE"))
            .calculation(sum_fold_text(&question_max_scores, &sid)?)
            .default("1"),
    );
    records.push(
        XLSFormRecord::new(RowType::Calculate)
            .name(format!("{sid}_PERCENTAGE_SCORE"))
            .calculation(percentage_ratio_text(
                &format!("{sid}_INT_SCORE"),
                &format!("{sid}_MAX_SCORE"),
            )?),
    );

    let percentage = mentorform_expr::number(var(format!("{sid}_PERCENTAGE_SCORE")))?;
    let band = colour_band_expr(percentage, &sid)?;
    let final_calc = if s.na_option() {
        let gate = eq(var(format!("{sid}_NA")), str_("OK"))?;
        if_(gate, str_("gray"), band)?
    } else {
        band
    };
    let band_calc = evaluate(&final_calc).into_string();
    records.push(
        XLSFormRecord::new(RowType::SelectOne("cee_score".into()))
            .appearance("minimal")
            .read_only("yes")
            .default("red")
            .name(format!("{sid}_SCORE"))
            .calculation(band_calc),
    );

    records.push(XLSFormRecord::new(RowType::EndGroup));

    Ok(XLSFormItem { records, choices })
}
