//! Meta crate that re-exports the mentorform checklist-to-XLSForm compiler
//! with sensible defaults. Downstream users can depend on this crate and
//! opt into specific layers via feature flags while keeping access to the
//! underlying crates when deeper integration is required.

#[cfg(feature = "common")]
pub use mentorform_common as common;

#[cfg(feature = "expr")]
pub use mentorform_expr as expr;

#[cfg(feature = "rules")]
pub use mentorform_rules as rules;

#[cfg(feature = "xlsform")]
pub use mentorform_xlsform as xlsform;

#[cfg(feature = "compile")]
pub use mentorform_compile as compile_support;

#[cfg(feature = "model")]
pub use mentorform_model::{Checklist, Facility, Question, Section};

#[cfg(feature = "common")]
pub use mentorform_common::{AnswerType, ChecklistId, CoreError, CoreResult, QuestionId, QuestionKind, SectionId};

#[cfg(feature = "xlsform")]
pub use mentorform_xlsform::{XLSForm, XLSFormChoice, XLSFormRecord, XLSFormSettings};

#[cfg(feature = "compile")]
pub use mentorform_compile::{ChecklistLoader, FacilitySource, XLSFormWriter, compile};
