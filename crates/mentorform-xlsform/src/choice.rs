//! The `choices` sheet row (spec §6.1).

/// Exact column order of the `choices` sheet.
pub const CHOICES_COLUMNS: [&str; 6] = ["label", "list_name", "name", "county", "sub_county", "ward"];

/// One row of the `choices` sheet. `county`/`sub_county`/`ward` are only
/// populated for the cascading org-unit and facility lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XLSFormChoice {
    pub label: String,
    pub list_name: String,
    pub name: String,
    pub county: Option<String>,
    pub sub_county: Option<String>,
    pub ward: Option<String>,
}

impl XLSFormChoice {
    pub fn new(list_name: impl Into<String>, name: impl Into<String>, label: impl Into<String>) -> Self {
        XLSFormChoice {
            label: label.into(),
            list_name: list_name.into(),
            name: name.into(),
            county: None,
            sub_county: None,
            ward: None,
        }
    }

    pub fn county(mut self, value: impl Into<String>) -> Self {
        self.county = Some(value.into());
        self
    }

    pub fn sub_county(mut self, value: impl Into<String>) -> Self {
        self.sub_county = Some(value.into());
        self
    }

    pub fn ward(mut self, value: impl Into<String>) -> Self {
        self.ward = Some(value.into());
        self
    }

    /// The row as 6 cells, in [`CHOICES_COLUMNS`] order.
    pub fn to_row(&self) -> [String; 6] {
        [
            self.label.clone(),
            self.list_name.clone(),
            self.name.clone(),
            self.county.clone().unwrap_or_default(),
            self.sub_county.clone().unwrap_or_default(),
            self.ward.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchy_columns_default_to_empty() {
        let choice = XLSFormChoice::new("colours", "green", "Green");
        assert_eq!(choice.to_row(), ["Green", "colours", "green", "", "", ""]);
    }

    #[test]
    fn facility_choice_carries_its_org_unit_columns() {
        let choice = XLSFormChoice::new("facilities", "garissa_hospital", "Garissa Hospital")
            .county("garissa")
            .sub_county("garissa_township")
            .ward("waberi");
        assert_eq!(
            choice.to_row(),
            [
                "Garissa Hospital",
                "facilities",
                "garissa_hospital",
                "garissa",
                "garissa_township",
                "waberi",
            ]
        );
    }
}
