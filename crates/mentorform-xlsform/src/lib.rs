//! The XLSForm wire model: a transparent tabular description of the
//! `survey`/`choices`/`settings` sheets (spec §4.G, §6.1). Pure value
//! types only — no I/O. A writer that persists these rows into an actual
//! `.xlsx` workbook is an external collaborator, typed by
//! `mentorform-compile::contracts::XLSFormWriter`.

mod choice;
mod form;
mod record;
mod row_type;
mod settings;

pub use choice::{CHOICES_COLUMNS, XLSFormChoice};
pub use form::XLSForm;
pub use record::{SURVEY_COLUMNS, XLSFormRecord};
pub use row_type::RowType;
pub use settings::{SETTINGS_COLUMNS, XLSFormSettings};
