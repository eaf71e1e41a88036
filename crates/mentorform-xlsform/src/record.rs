//! The `survey` sheet row (spec §6.1).

use crate::row_type::RowType;

/// Exact column order of the `survey` sheet, fixed by the wire schema.
pub const SURVEY_COLUMNS: [&str; 18] = [
    "type",
    "appearance",
    "calculation",
    "choice_filter",
    "constraint",
    "constraint_message",
    "default",
    "hint",
    "label",
    "name",
    "note",
    "repeat_count",
    "parameters",
    "read_only",
    "relevant",
    "required",
    "required_message",
    "trigger",
];

/// One row of the `survey` sheet. `row_type` is the only required field;
/// everything else serialises as an empty cell when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XLSFormRecord {
    pub row_type: RowType,
    pub appearance: Option<String>,
    pub calculation: Option<String>,
    pub choice_filter: Option<String>,
    pub constraint: Option<String>,
    pub constraint_message: Option<String>,
    pub default: Option<String>,
    pub hint: Option<String>,
    pub label: Option<String>,
    pub name: Option<String>,
    pub note: Option<String>,
    pub repeat_count: Option<String>,
    pub parameters: Option<String>,
    pub read_only: Option<String>,
    pub relevant: Option<String>,
    pub required: Option<String>,
    pub required_message: Option<String>,
    pub trigger: Option<String>,
}

impl XLSFormRecord {
    /// A bare row of the given type; every optional field starts empty.
    pub fn new(row_type: RowType) -> Self {
        XLSFormRecord {
            row_type,
            appearance: None,
            calculation: None,
            choice_filter: None,
            constraint: None,
            constraint_message: None,
            default: None,
            hint: None,
            label: None,
            name: None,
            note: None,
            repeat_count: None,
            parameters: None,
            read_only: None,
            relevant: None,
            required: None,
            required_message: None,
            trigger: None,
        }
    }

    pub fn appearance(mut self, value: impl Into<String>) -> Self {
        self.appearance = Some(value.into());
        self
    }

    pub fn calculation(mut self, value: impl Into<String>) -> Self {
        self.calculation = Some(value.into());
        self
    }

    pub fn choice_filter(mut self, value: impl Into<String>) -> Self {
        self.choice_filter = Some(value.into());
        self
    }

    pub fn constraint(mut self, value: impl Into<String>) -> Self {
        self.constraint = Some(value.into());
        self
    }

    pub fn constraint_message(mut self, value: impl Into<String>) -> Self {
        self.constraint_message = Some(value.into());
        self
    }

    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn hint(mut self, value: impl Into<String>) -> Self {
        self.hint = Some(value.into());
        self
    }

    pub fn label(mut self, value: impl Into<String>) -> Self {
        self.label = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn note(mut self, value: impl Into<String>) -> Self {
        self.note = Some(value.into());
        self
    }

    pub fn repeat_count(mut self, value: impl Into<String>) -> Self {
        self.repeat_count = Some(value.into());
        self
    }

    pub fn parameters(mut self, value: impl Into<String>) -> Self {
        self.parameters = Some(value.into());
        self
    }

    pub fn read_only(mut self, value: impl Into<String>) -> Self {
        self.read_only = Some(value.into());
        self
    }

    pub fn relevant(mut self, value: impl Into<String>) -> Self {
        self.relevant = Some(value.into());
        self
    }

    pub fn required(mut self, value: impl Into<String>) -> Self {
        self.required = Some(value.into());
        self
    }

    pub fn required_message(mut self, value: impl Into<String>) -> Self {
        self.required_message = Some(value.into());
        self
    }

    pub fn trigger(mut self, value: impl Into<String>) -> Self {
        self.trigger = Some(value.into());
        self
    }

    /// The row as 18 cells, in [`SURVEY_COLUMNS`] order, ready for a writer
    /// to hand to a sheet backend. Unset fields are empty strings.
    pub fn to_row(&self) -> [String; 18] {
        [
            self.row_type.to_string(),
            self.appearance.clone().unwrap_or_default(),
            self.calculation.clone().unwrap_or_default(),
            self.choice_filter.clone().unwrap_or_default(),
            self.constraint.clone().unwrap_or_default(),
            self.constraint_message.clone().unwrap_or_default(),
            self.default.clone().unwrap_or_default(),
            self.hint.clone().unwrap_or_default(),
            self.label.clone().unwrap_or_default(),
            self.name.clone().unwrap_or_default(),
            self.note.clone().unwrap_or_default(),
            self.repeat_count.clone().unwrap_or_default(),
            self.parameters.clone().unwrap_or_default(),
            self.read_only.clone().unwrap_or_default(),
            self.relevant.clone().unwrap_or_default(),
            self.required.clone().unwrap_or_default(),
            self.required_message.clone().unwrap_or_default(),
            self.trigger.clone().unwrap_or_default(),
        ]
    }
}
