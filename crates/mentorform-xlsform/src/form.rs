//! The [`XLSForm`] aggregate: the complete output of a compilation run.

use crate::choice::XLSFormChoice;
use crate::record::XLSFormRecord;
use crate::settings::XLSFormSettings;

/// The triple of sheets a writer persists as an `.xlsx` workbook
/// (spec §6.3): `survey`, `choices`, `settings`. Built once by the
/// lowering pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XLSForm {
    pub survey: Vec<XLSFormRecord>,
    pub choices: Vec<XLSFormChoice>,
    pub settings: XLSFormSettings,
}

impl XLSForm {
    pub fn new(survey: Vec<XLSFormRecord>, choices: Vec<XLSFormChoice>, settings: XLSFormSettings) -> Self {
        XLSForm {
            survey,
            choices,
            settings,
        }
    }
}
