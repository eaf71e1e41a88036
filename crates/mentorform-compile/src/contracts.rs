//! The ambient loader/writer seam (spec §6.3, §4.J).
//!
//! None of these traits carry implementation logic: metadata ingest,
//! `.xlsx` emission, and remote facility lookups are external
//! collaborators this crate never constructs, only consumes.

use mentorform_common::CoreError;
use mentorform_model::{Checklist, Facility};
use mentorform_xlsform::XLSForm;

/// Produces the checklist tree the compiler lowers. Implementations own
/// their own ingest (an Excel workbook, a database, a test fixture).
pub trait ChecklistLoader {
    fn load(&self) -> Result<Checklist, CoreError>;
}

/// Produces the facility list the compiler turns into choice rows.
pub trait FacilitySource {
    fn facilities(&self) -> Result<Vec<Facility>, CoreError>;
}

/// Persists a compiled `XLSForm` as a workbook. Implementations own the
/// target sheet backend and its I/O resources.
pub trait XLSFormWriter {
    fn write(&mut self, form: &XLSForm) -> Result<(), CoreError>;
}
