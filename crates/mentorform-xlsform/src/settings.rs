//! The single-row `settings` sheet (spec §6.1).

/// Exact column order of the `settings` sheet.
pub const SETTINGS_COLUMNS: [&str; 6] = [
    "form_id",
    "form_title",
    "default_language",
    "instance_name",
    "style",
    "version",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XLSFormSettings {
    pub form_id: String,
    pub form_title: String,
    pub default_language: String,
    pub instance_name: Option<String>,
    pub style: String,
    pub version: String,
}

impl XLSFormSettings {
    pub fn new(
        form_id: impl Into<String>,
        form_title: impl Into<String>,
        default_language: impl Into<String>,
        style: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        XLSFormSettings {
            form_id: form_id.into(),
            form_title: form_title.into(),
            default_language: default_language.into(),
            instance_name: None,
            style: style.into(),
            version: version.into(),
        }
    }

    pub fn instance_name(mut self, value: impl Into<String>) -> Self {
        self.instance_name = Some(value.into());
        self
    }

    /// The row as 6 cells, in [`SETTINGS_COLUMNS`] order.
    pub fn to_row(&self) -> [String; 6] {
        [
            self.form_id.clone(),
            self.form_title.clone(),
            self.default_language.clone(),
            self.instance_name.clone().unwrap_or_default(),
            self.style.clone(),
            self.version.clone(),
        ]
    }
}
