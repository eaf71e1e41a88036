//! The full checklist → [`XLSForm`] driver (spec §4.F, §5).

use std::collections::BTreeMap;

use mentorform_common::CoreResult;
use mentorform_model::{Checklist, Facility};
use mentorform_xlsform::{RowType, XLSForm, XLSFormChoice, XLSFormRecord, XLSFormSettings};

use crate::section::lower_section;
use crate::slug::slug;
use crate::support::markdown_escape;

const COLOUR_CHOICES: [(&str, &str); 4] = [
    ("gray", "Gray"),
    ("green", "Green"),
    ("red", "Red"),
    ("yellow", "Yellow"),
];

/// Lowers a checklist plus a facility feed into the complete `XLSForm`
/// value (spec §5's pure function contract).
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(checklist_id = %checklist.id())))]
pub fn compile(checklist: &Checklist, facilities: impl IntoIterator<Item = Facility>) -> CoreResult<XLSForm> {
    let facilities: Vec<Facility> = facilities.into_iter().collect();

    let mut survey = cover_sheet_records();
    let mut contributed_choices = Vec::new();
    for section in checklist.sections().values() {
        let item = lower_section(section)?;
        survey.extend(item.records);
        contributed_choices.extend(item.choices);
    }

    let (counties, sub_counties, wards) = org_unit_choices(&facilities);
    let default_choices = default_choices();
    let facility_choices = facility_choices(&facilities);

    let mut choices = Vec::new();
    choices.extend(counties);
    choices.extend(sub_counties);
    choices.extend(wards);
    choices.extend(default_choices);
    choices.extend(contributed_choices);
    choices.extend(facility_choices);

    let settings = XLSFormSettings::new(
        checklist.id().as_str(),
        markdown_escape(checklist.name()),
        "English (en)",
        "pages",
        "1.0.0",
    );

    Ok(XLSForm::new(survey, choices, settings))
}

/// §4.F's fixed cover-sheet prelude: assessor name, county, sub-county,
/// facility cascading selects, MFL-code note, assessment date/time,
/// geolocation.
fn cover_sheet_records() -> Vec<XLSFormRecord> {
    vec![
        XLSFormRecord::new(RowType::Text)
            .name("ASSESSOR_NAME")
            .label("Assessor Name"),
        XLSFormRecord::new(RowType::SelectOne("counties".into()))
            .name("COUNTY")
            .label("County"),
        XLSFormRecord::new(RowType::SelectOne("sub_counties".into()))
            .name("SUB_COUNTY")
            .label("Sub-County")
            .choice_filter("county=${COUNTY}"),
        XLSFormRecord::new(RowType::SelectOne("facilities".into()))
            .name("FACILITY")
            .label("Facility")
            .choice_filter("county=${COUNTY} and sub_county=${SUB_COUNTY}"),
        XLSFormRecord::new(RowType::Note)
            .name("MFL_CODE_NOTE")
            .label("MFL Code")
            .hint("Selected facility: ${FACILITY}"),
        XLSFormRecord::new(RowType::Date)
            .name("ASSESSMENT_DATE")
            .label("Date of Assessment"),
        XLSFormRecord::new(RowType::Time)
            .name("ASSESSMENT_TIME")
            .label("Time of Assessment"),
        XLSFormRecord::new(RowType::Geopoint)
            .name("GEOLOCATION")
            .label("GPS Location"),
    ]
}

/// The six default choice rows: four colour bands with an inline `<span
/// style="color:...">` label, plus `yes`/`no`.
fn default_choices() -> Vec<XLSFormChoice> {
    let mut choices: Vec<XLSFormChoice> = COLOUR_CHOICES
        .iter()
        .map(|(name, display)| {
            XLSFormChoice::new(
                "cee_score",
                *name,
                format!("<span style=\"color:{name};\">{display}</span>"),
            )
        })
        .collect();
    choices.push(XLSFormChoice::new("yes_no", "yes", "Yes"));
    choices.push(XLSFormChoice::new("yes_no", "no", "No"));
    choices
}

fn facility_choices(facilities: &[Facility]) -> Vec<XLSFormChoice> {
    let mut choices: Vec<XLSFormChoice> = facilities
        .iter()
        .map(|f| {
            XLSFormChoice::new("facilities", slug(&f.name), f.name.clone())
                .county(slug(&f.county))
                .sub_county(slug(&f.sub_county))
                .ward(slug(&f.ward))
        })
        .collect();
    choices.sort_by(|a, b| a.label.cmp(&b.label));
    choices
}

/// The distinct `counties`/`sub_counties`/`wards` cascading-select lists,
/// each sorted by natural label order for a stable, reproducible sheet.
fn org_unit_choices(facilities: &[Facility]) -> (Vec<XLSFormChoice>, Vec<XLSFormChoice>, Vec<XLSFormChoice>) {
    let mut counties: BTreeMap<String, String> = BTreeMap::new();
    let mut sub_counties: BTreeMap<String, (String, String)> = BTreeMap::new();
    let mut wards: BTreeMap<String, (String, String, String)> = BTreeMap::new();

    for f in facilities {
        counties.entry(slug(&f.county)).or_insert_with(|| f.county.clone());
        sub_counties
            .entry(slug(&f.sub_county))
            .or_insert_with(|| (f.sub_county.clone(), slug(&f.county)));
        wards
            .entry(slug(&f.ward))
            .or_insert_with(|| (f.ward.clone(), slug(&f.county), slug(&f.sub_county)));
    }

    let mut county_rows: Vec<XLSFormChoice> = counties
        .into_iter()
        .map(|(name, label)| XLSFormChoice::new("counties", name, label))
        .collect();
    county_rows.sort_by(|a, b| a.label.cmp(&b.label));

    let mut sub_county_rows: Vec<XLSFormChoice> = sub_counties
        .into_iter()
        .map(|(name, (label, county))| XLSFormChoice::new("sub_counties", name, label).county(county))
        .collect();
    sub_county_rows.sort_by(|a, b| a.label.cmp(&b.label));

    let mut ward_rows: Vec<XLSFormChoice> = wards
        .into_iter()
        .map(|(name, (label, county, sub_county))| {
            XLSFormChoice::new("wards", name, label).county(county).sub_county(sub_county)
        })
        .collect();
    ward_rows.sort_by(|a, b| a.label.cmp(&b.label));

    (county_rows, sub_county_rows, ward_rows)
}
