//! The [`Question`] value object and its construction-time invariants.

use mentorform_common::{AnswerType, CoreError, CoreResult, OrderedMap, QuestionId, QuestionKind};

/// A single checklist question.
///
/// Parent kinds (`BOOL, COUNT, MULTI, PERC, RATE, SELECT, TEXT`) may head a
/// section's question list; `NUM`/`DEN` only ever appear nested inside a
/// `PERC` question's `sub_questions`; `CHOICE` never appears as a
/// standalone question at all (it only labels an option).
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    id: QuestionId,
    label: String,
    kind: QuestionKind,
    answer_type: AnswerType,
    options_set: Vec<String>,
    prompt: Option<String>,
    rule_source: Option<String>,
    sub_questions: OrderedMap<QuestionId, Question>,
    na_option: bool,
    display_ordinal: Option<u32>,
}

impl Question {
    /// Builds a question, checking the invariants of spec §3 that are
    /// local to this question and its own sub-questions: `SELECT` must
    /// carry a non-empty option set, `MULTI` must carry at least one
    /// sub-question, `PERC` must carry exactly a `NUM` and a `DEN`
    /// sub-question, every sub-question's map key must match its own id,
    /// and a scoring rule string (if present) must parse under the §6.2
    /// grammar.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: QuestionId,
        label: impl Into<String>,
        kind: QuestionKind,
        answer_type: AnswerType,
        options_set: Vec<String>,
        prompt: Option<String>,
        rule_source: Option<String>,
        sub_questions: OrderedMap<QuestionId, Question>,
        na_option: bool,
        display_ordinal: Option<u32>,
    ) -> CoreResult<Self> {
        for (key, child) in sub_questions.iter() {
            if child.id() != key {
                return Err(CoreError::invalid_metadata(
                    id.as_str(),
                    format!(
                        "sub-question map key `{}` does not match child id `{}`",
                        key,
                        child.id()
                    ),
                ));
            }
        }

        match kind {
            QuestionKind::Select if options_set.is_empty() => {
                return Err(CoreError::invalid_metadata(
                    id.as_str(),
                    "SELECT questions require a non-empty options_set",
                ));
            }
            QuestionKind::Multi if sub_questions.is_empty() => {
                return Err(CoreError::invalid_metadata(
                    id.as_str(),
                    "MULTI questions require at least one sub-question",
                ));
            }
            QuestionKind::Perc => {
                let num_count = sub_questions
                    .values()
                    .filter(|q| q.kind() == QuestionKind::Num)
                    .count();
                let den_count = sub_questions
                    .values()
                    .filter(|q| q.kind() == QuestionKind::Den)
                    .count();
                if sub_questions.len() != 2 || num_count != 1 || den_count != 1 {
                    return Err(CoreError::invalid_metadata(
                        id.as_str(),
                        "PERC questions require exactly two sub-questions, one NUM and one DEN",
                    ));
                }
            }
            _ => {}
        }

        if let Some(src) = &rule_source {
            let tokens = mentorform_rules::tokenize(src)
                .map_err(|e| CoreError::rule_syntax(id.as_str(), e.to_string()))?;
            mentorform_rules::parse_rules(&tokens)
                .map_err(|e| CoreError::rule_syntax(id.as_str(), e.to_string()))?;
        }

        Ok(Question {
            id,
            label: label.into(),
            kind,
            answer_type,
            options_set,
            prompt,
            rule_source,
            sub_questions,
            na_option,
            display_ordinal,
        })
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn answer_type(&self) -> AnswerType {
        self.answer_type
    }

    pub fn options_set(&self) -> &[String] {
        &self.options_set
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn rule_source(&self) -> Option<&str> {
        self.rule_source.as_deref()
    }

    pub fn sub_questions(&self) -> &OrderedMap<QuestionId, Question> {
        &self.sub_questions
    }

    pub fn na_option(&self) -> bool {
        self.na_option
    }

    pub fn display_ordinal(&self) -> Option<u32> {
        self.display_ordinal
    }
}
