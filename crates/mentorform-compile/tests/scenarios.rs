//! End-to-end `compile()` scenarios spanning a full checklist: a BOOL, a
//! MULTI, and a SELECT question across two sections, one of them
//! `na_option`, plus a small facility feed.

use mentorform_common::{AnswerType, ChecklistId, OrderedMap, QuestionId, QuestionKind, SectionId};
use mentorform_model::{Checklist, Facility, Question, Section};

fn bool_question(id: &str) -> Question {
    Question::new(
        QuestionId::new(id),
        "Is the roof intact?",
        QuestionKind::Bool,
        AnswerType::Boolean,
        Vec::new(),
        None,
        Some("If Y = Red".to_string()),
        OrderedMap::new(),
        false,
        None,
    )
    .unwrap()
}

fn multi_question(id: &str) -> Question {
    let sub_a = Question::new(
        QuestionId::new(format!("{id}_A")),
        "Has running water",
        QuestionKind::Choice,
        AnswerType::String,
        Vec::new(),
        None,
        None,
        OrderedMap::new(),
        false,
        None,
    )
    .unwrap();
    let sub_b = Question::new(
        QuestionId::new(format!("{id}_B")),
        "Has electricity",
        QuestionKind::Choice,
        AnswerType::String,
        Vec::new(),
        None,
        None,
        OrderedMap::new(),
        false,
        None,
    )
    .unwrap();
    let subs = OrderedMap::from_entries(vec![(sub_a.id().clone(), sub_a), (sub_b.id().clone(), sub_b)]).unwrap();
    Question::new(
        QuestionId::new(id),
        "Which amenities are present?",
        QuestionKind::Multi,
        AnswerType::String,
        Vec::new(),
        None,
        Some("If 3-5 = Yellow ; If >5 = Green".to_string()),
        subs,
        false,
        None,
    )
    .unwrap()
}

fn select_question(id: &str) -> Question {
    Question::new(
        QuestionId::new(id),
        "Overall condition",
        QuestionKind::Select,
        AnswerType::String,
        vec!["Good".into(), "Fair".into(), "Poor".into()],
        None,
        Some("If select 1 or 3 = Green".to_string()),
        OrderedMap::new(),
        false,
        None,
    )
    .unwrap()
}

fn sample_checklist() -> Checklist {
    let cid = ChecklistId::new("AUDIT");

    let s1_q1 = bool_question("AUDIT_S1_Q1");
    let s1_questions = OrderedMap::from_entries(vec![(s1_q1.id().clone(), s1_q1)]).unwrap();
    let s1 = Section::new(
        &cid,
        SectionId::new("AUDIT_S1"),
        "Infrastructure",
        Some("WHO facility guideline 4.2".to_string()),
        None,
        false,
        false,
        s1_questions,
    )
    .unwrap();

    let s2_q1 = multi_question("AUDIT_S2_Q1");
    let s2_q2 = select_question("AUDIT_S2_Q2");
    let s2_questions =
        OrderedMap::from_entries(vec![(s2_q1.id().clone(), s2_q1), (s2_q2.id().clone(), s2_q2)]).unwrap();
    let s2 = Section::new(
        &cid,
        SectionId::new("AUDIT_S2"),
        "Amenities",
        None,
        Some("Assess all amenities present at the time of visit.".to_string()),
        true,
        false,
        s2_questions,
    )
    .unwrap();

    let sections = OrderedMap::from_entries(vec![(s1.id().clone(), s1), (s2.id().clone(), s2)]).unwrap();
    Checklist::new(cid, "Facility Audit", sections).unwrap()
}

fn sample_facilities() -> Vec<Facility> {
    vec![
        Facility::new("Garissa General Hospital", "12345", "Garissa", "Garissa Township", "Waberi"),
        Facility::new("Dadaab Health Centre", "54321", "Garissa", "Dadaab", "Dadaab East"),
    ]
}

#[test]
fn invariant_1_every_survey_record_name_is_unique() {
    let form = mentorform_compile::compile(&sample_checklist(), sample_facilities()).unwrap();
    let mut names: Vec<&str> = form
        .survey
        .iter()
        .filter_map(|r| r.name.as_deref())
        .filter(|n| !n.is_empty())
        .collect();
    let before = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), before, "duplicate survey record name found");
}

#[test]
fn invariant_2_every_scored_question_carries_its_four_records_after_the_body() {
    let form = mentorform_compile::compile(&sample_checklist(), sample_facilities()).unwrap();
    let names: Vec<&str> = form.survey.iter().filter_map(|r| r.name.as_deref()).collect();
    let body = names.iter().position(|n| *n == "AUDIT_S1_Q1").unwrap();
    assert_eq!(names[body + 1], "AUDIT_S1_Q1_SCORE");
    assert_eq!(names[body + 2], "AUDIT_S1_Q1_INT_SCORE");
    assert_eq!(names[body + 3], "AUDIT_S1_Q1_MAX_SCORE");
    let relevance = names.iter().position(|n| *n == "AUDIT_S1_Q1_RELEVANCE").unwrap();
    assert_eq!(relevance + 1, body);
}

#[test]
fn invariant_5_multi_question_contributes_one_choice_per_sub_question() {
    let form = mentorform_compile::compile(&sample_checklist(), sample_facilities()).unwrap();
    let count = form.choices.iter().filter(|c| c.list_name == "AUDIT_S2_Q1").count();
    assert_eq!(count, 2);
}

#[test]
fn invariant_6_select_question_contributes_options_len_choices_named_by_ordinal() {
    let form = mentorform_compile::compile(&sample_checklist(), sample_facilities()).unwrap();
    let mut names: Vec<&str> = form
        .choices
        .iter()
        .filter(|c| c.list_name == "AUDIT_S2_Q2")
        .map(|c| c.name.as_str())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["AUDIT_S2_Q2_1", "AUDIT_S2_Q2_2", "AUDIT_S2_Q2_3"]);
}

#[test]
fn invariant_7_org_unit_lists_precede_everything_else_in_order() {
    let form = mentorform_compile::compile(&sample_checklist(), sample_facilities()).unwrap();
    let last_county = form.choices.iter().rposition(|c| c.list_name == "counties").unwrap();
    let first_sub_county = form.choices.iter().position(|c| c.list_name == "sub_counties").unwrap();
    let last_sub_county = form.choices.iter().rposition(|c| c.list_name == "sub_counties").unwrap();
    let first_ward = form.choices.iter().position(|c| c.list_name == "wards").unwrap();
    assert!(last_county < first_sub_county);
    assert!(last_sub_county < first_ward);
}

#[test]
fn s3_multi_range_rule_renders_the_worked_scenario() {
    let form = mentorform_compile::compile(&sample_checklist(), Vec::new()).unwrap();
    let score = form
        .survey
        .iter()
        .find(|r| r.name.as_deref() == Some("AUDIT_S2_Q1_SCORE"))
        .unwrap();
    assert_eq!(
        score.calculation.as_deref(),
        Some(
            "if((count-selected(${AUDIT_S2_Q1}) >= 3) and (count-selected(${AUDIT_S2_Q1}) <= 5), \
             'yellow', if(count-selected(${AUDIT_S2_Q1}) > 5, 'green', 'gray'))"
        )
    );
}

#[test]
fn s4_select_compound_rule_renders_the_worked_scenario() {
    let form = mentorform_compile::compile(&sample_checklist(), Vec::new()).unwrap();
    let score = form
        .survey
        .iter()
        .find(|r| r.name.as_deref() == Some("AUDIT_S2_Q2_SCORE"))
        .unwrap();
    assert_eq!(
        score.calculation.as_deref(),
        Some(
            "if(selected(${AUDIT_S2_Q2}, 'AUDIT_S2_Q2_1') or selected(${AUDIT_S2_Q2}, 'AUDIT_S2_Q2_3'), \
             'green', 'gray')"
        )
    );
}

#[test]
fn na_option_section_carries_a_trigger_and_gates_its_aggregate_score() {
    let form = mentorform_compile::compile(&sample_checklist(), Vec::new()).unwrap();
    assert!(form.survey.iter().any(|r| r.name.as_deref() == Some("AUDIT_S2_NA")));
    let score = form
        .survey
        .iter()
        .find(|r| r.name.as_deref() == Some("AUDIT_S2_SCORE"))
        .unwrap();
    assert!(score.calculation.as_deref().unwrap().starts_with("if(${AUDIT_S2_NA} = 'OK', 'gray',"));
}

#[test]
fn facilities_are_lowered_with_slugged_org_unit_columns() {
    let form = mentorform_compile::compile(&sample_checklist(), sample_facilities()).unwrap();
    let garissa_hospital = form
        .choices
        .iter()
        .find(|c| c.list_name == "facilities" && c.label == "Garissa General Hospital")
        .unwrap();
    assert_eq!(garissa_hospital.county.as_deref(), Some("garissa"));
    assert_eq!(garissa_hospital.sub_county.as_deref(), Some("garissa_township"));
    assert_eq!(garissa_hospital.ward.as_deref(), Some("waberi"));
}

#[test]
fn settings_carry_the_checklist_identity_and_markdown_escaped_title() {
    let form = mentorform_compile::compile(&sample_checklist(), Vec::new()).unwrap();
    assert_eq!(form.settings.form_id, "AUDIT");
    assert_eq!(form.settings.form_title, "Facility Audit");
    assert_eq!(form.settings.default_language, "English (en)");
    assert_eq!(form.settings.style, "pages");
    assert_eq!(form.settings.version, "1.0.0");
}
