//! The closed question-kind and answer-type vocabularies.
//!
//! These live in `mentorform-common` (rather than the domain model crate)
//! because both the domain model and the scoring-rule parser need to name
//! them, and neither should depend on the other.

use std::fmt;

/// The closed set of question kinds a checklist question may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    Bool,
    Choice,
    Count,
    Den,
    Multi,
    Num,
    Perc,
    Rate,
    Select,
    Text,
}

impl QuestionKind {
    /// Kinds that may head a section's top-level question list.
    ///
    /// `Num` and `Den` only ever appear as `Perc`'s sub-questions; `Choice`
    /// is an answer-option label carrier, never a standalone question.
    pub fn is_parent_kind(self) -> bool {
        matches!(
            self,
            QuestionKind::Bool
                | QuestionKind::Count
                | QuestionKind::Multi
                | QuestionKind::Perc
                | QuestionKind::Rate
                | QuestionKind::Select
                | QuestionKind::Text
        )
    }

    /// Whether a scoring rule's comparison form (`if_cmp`, §4.B) accepts
    /// this kind's answer cell as a bare number without a `%` suffix.
    pub fn accepts_bare_comparison(self) -> bool {
        matches!(
            self,
            QuestionKind::Multi | QuestionKind::Count | QuestionKind::Num | QuestionKind::Rate
        )
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionKind::Bool => "BOOL",
            QuestionKind::Choice => "CHOICE",
            QuestionKind::Count => "COUNT",
            QuestionKind::Den => "DEN",
            QuestionKind::Multi => "MULTI",
            QuestionKind::Num => "NUM",
            QuestionKind::Perc => "PERC",
            QuestionKind::Rate => "RATE",
            QuestionKind::Select => "SELECT",
            QuestionKind::Text => "TEXT",
        };
        f.write_str(s)
    }
}

/// The closed set of answer types a question's answer cell may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerType {
    Boolean,
    Float,
    IntegerZeroOrPositive,
    String,
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnswerType::Boolean => "BOOLEAN",
            AnswerType::Float => "FLOAT",
            AnswerType::IntegerZeroOrPositive => "INTEGER_ZERO_OR_POSITIVE",
            AnswerType::String => "STRING",
        };
        f.write_str(s)
    }
}

/// The four-valued outcome colour band (§ Glossary: "CEE score / colour band").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreColor {
    Gray,
    Green,
    Red,
    Yellow,
}

impl ScoreColor {
    /// The lowercase text literal this colour renders as inside a
    /// `calculate` cell (e.g. `'red'`).
    pub fn as_cell_text(self) -> &'static str {
        match self {
            ScoreColor::Gray => "gray",
            ScoreColor::Green => "green",
            ScoreColor::Red => "red",
            ScoreColor::Yellow => "yellow",
        }
    }

    /// The integer weight used by `{q}_INT_SCORE` (§4.D item 4).
    pub fn int_weight(self) -> i64 {
        match self {
            ScoreColor::Green => 3,
            ScoreColor::Yellow => 2,
            ScoreColor::Red => 1,
            ScoreColor::Gray => 0,
        }
    }
}

impl fmt::Display for ScoreColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_cell_text())
    }
}
