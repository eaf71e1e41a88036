//! The closed `type` vocabulary for a `survey` sheet row (spec §6.1).

use std::fmt;

/// A survey row's `type` cell. The four list-parameterised variants carry
/// the referenced `choices`/external-file list name and render as
/// `"select_one <list>"` and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowType {
    Acknowledge,
    Audio,
    BackgroundAudio,
    Barcode,
    BeginGroup,
    Calculate,
    Date,
    DateTime,
    Decimal,
    EndGroup,
    File,
    Geopoint,
    Geoshape,
    Geotrace,
    Hidden,
    Image,
    Integer,
    Note,
    Range,
    Rank,
    SelectOne(String),
    SelectMultiple(String),
    SelectOneFromFile(String),
    SelectMultipleFromFile(String),
    Text,
    Time,
    Trigger,
    Video,
    XmlExternal,
}

impl fmt::Display for RowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowType::Acknowledge => f.write_str("acknowledge"),
            RowType::Audio => f.write_str("audio"),
            RowType::BackgroundAudio => f.write_str("background-audio"),
            RowType::Barcode => f.write_str("barcode"),
            RowType::BeginGroup => f.write_str("begin_group"),
            RowType::Calculate => f.write_str("calculate"),
            RowType::Date => f.write_str("date"),
            RowType::DateTime => f.write_str("dateTime"),
            RowType::Decimal => f.write_str("decimal"),
            RowType::EndGroup => f.write_str("end_group"),
            RowType::File => f.write_str("file"),
            RowType::Geopoint => f.write_str("geopoint"),
            RowType::Geoshape => f.write_str("geoshape"),
            RowType::Geotrace => f.write_str("geotrace"),
            RowType::Hidden => f.write_str("hidden"),
            RowType::Image => f.write_str("image"),
            RowType::Integer => f.write_str("integer"),
            RowType::Note => f.write_str("note"),
            RowType::Range => f.write_str("range"),
            RowType::Rank => f.write_str("rank"),
            RowType::SelectOne(list) => write!(f, "select_one {list}"),
            RowType::SelectMultiple(list) => write!(f, "select_multiple {list}"),
            RowType::SelectOneFromFile(file) => write!(f, "select_one_from_file {file}"),
            RowType::SelectMultipleFromFile(file) => {
                write!(f, "select_multiple_from_file {file}")
            }
            RowType::Text => f.write_str("text"),
            RowType::Time => f.write_str("time"),
            RowType::Trigger => f.write_str("trigger"),
            RowType::Video => f.write_str("video"),
            RowType::XmlExternal => f.write_str("xml-external"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_parameterised_variants_render_with_their_list_name() {
        assert_eq!(RowType::SelectOne("yes_no".into()).to_string(), "select_one yes_no");
        assert_eq!(
            RowType::SelectMultiple("Q1".into()).to_string(),
            "select_multiple Q1"
        );
    }

    #[test]
    fn plain_variants_render_as_their_keyword() {
        assert_eq!(RowType::BeginGroup.to_string(), "begin_group");
        assert_eq!(RowType::DateTime.to_string(), "dateTime");
        assert_eq!(RowType::XmlExternal.to_string(), "xml-external");
    }
}
