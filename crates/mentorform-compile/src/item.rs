//! The intermediate lowering result shared by question/section/checklist
//! lowering: an ordered run of survey records plus any new choice rows.

use mentorform_xlsform::{XLSFormChoice, XLSFormRecord};

#[derive(Debug, Clone, Default)]
pub struct XLSFormItem {
    pub records: Vec<XLSFormRecord>,
    pub choices: Vec<XLSFormChoice>,
}

impl XLSFormItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, other: XLSFormItem) {
        self.records.extend(other.records);
        self.choices.extend(other.choices);
    }
}
