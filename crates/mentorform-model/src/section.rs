//! The [`Section`] value object and its construction-time invariants.

use mentorform_common::{ChecklistId, CoreError, CoreResult, OrderedMap, QuestionId, SectionId};

use crate::question::Question;

/// A checklist section: a titled group of top-level questions.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    id: SectionId,
    title: String,
    standard: Option<String>,
    instructions: Option<String>,
    na_option: bool,
    required: bool,
    questions: OrderedMap<QuestionId, Question>,
}

impl Section {
    /// Builds a section, checking that its id is prefixed by its owning
    /// checklist's id, that it carries at least one question, that every
    /// question's map key matches its own id, and that every question is a
    /// *parent kind* whose id is itself prefixed by this section's id —
    /// the definition of "top-level question" from spec §3.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        checklist_id: &ChecklistId,
        id: SectionId,
        title: impl Into<String>,
        standard: Option<String>,
        instructions: Option<String>,
        na_option: bool,
        required: bool,
        questions: OrderedMap<QuestionId, Question>,
    ) -> CoreResult<Self> {
        let expected_prefix = format!("{checklist_id}_");
        if !id.as_str().starts_with(&expected_prefix) {
            return Err(CoreError::invalid_metadata(
                id.as_str(),
                format!("section id must begin with `{expected_prefix}`"),
            ));
        }

        if questions.is_empty() {
            return Err(CoreError::invalid_metadata(
                id.as_str(),
                "a section requires at least one top-level question",
            ));
        }

        let question_prefix = format!("{id}_");
        for (key, question) in questions.iter() {
            if question.id() != key {
                return Err(CoreError::invalid_metadata(
                    id.as_str(),
                    format!(
                        "question map key `{key}` does not match child id `{}`",
                        question.id()
                    ),
                ));
            }
            if !question.kind().is_parent_kind() {
                return Err(CoreError::invalid_metadata(
                    id.as_str(),
                    format!(
                        "top-level question `{}` has non-parent kind {}",
                        question.id(),
                        question.kind()
                    ),
                ));
            }
            if !question.id().as_str().starts_with(&question_prefix) {
                return Err(CoreError::invalid_metadata(
                    id.as_str(),
                    format!(
                        "top-level question id `{}` must begin with `{question_prefix}`",
                        question.id()
                    ),
                ));
            }
        }

        Ok(Section {
            id,
            title: title.into(),
            standard,
            instructions,
            na_option,
            required,
            questions,
        })
    }

    pub fn id(&self) -> &SectionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn standard(&self) -> Option<&str> {
        self.standard.as_deref()
    }

    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    pub fn na_option(&self) -> bool {
        self.na_option
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn questions(&self) -> &OrderedMap<QuestionId, Question> {
        &self.questions
    }
}
