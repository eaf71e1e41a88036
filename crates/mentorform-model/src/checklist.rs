//! The [`Checklist`] value object, the root of the domain tree.

use mentorform_common::{ChecklistId, CoreError, CoreResult, OrderedMap, SectionId};

use crate::section::Section;

/// A complete mentorship checklist: an identifier, a display name, and an
/// ordered, non-empty set of sections. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Checklist {
    id: ChecklistId,
    name: String,
    sections: OrderedMap<SectionId, Section>,
}

impl Checklist {
    /// Builds a checklist, checking that it carries at least one section,
    /// that every section's map key matches its own id, and that every
    /// section's id is prefixed by this checklist's id (re-asserting the
    /// invariant each [`Section`] already checked against the
    /// `checklist_id` it was built with).
    pub fn new(
        id: ChecklistId,
        name: impl Into<String>,
        sections: OrderedMap<SectionId, Section>,
    ) -> CoreResult<Self> {
        if sections.is_empty() {
            return Err(CoreError::invalid_metadata(
                id.as_str(),
                "a checklist requires at least one section",
            ));
        }

        let expected_prefix = format!("{id}_");
        for (key, section) in sections.iter() {
            if section.id() != key {
                return Err(CoreError::invalid_metadata(
                    id.as_str(),
                    format!(
                        "section map key `{key}` does not match child id `{}`",
                        section.id()
                    ),
                ));
            }
            if !section.id().as_str().starts_with(&expected_prefix) {
                return Err(CoreError::invalid_metadata(
                    id.as_str(),
                    format!(
                        "section id `{}` must begin with `{expected_prefix}`",
                        section.id()
                    ),
                ));
            }
        }

        Ok(Checklist {
            id,
            name: name.into(),
            sections,
        })
    }

    pub fn id(&self) -> &ChecklistId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sections(&self) -> &OrderedMap<SectionId, Section> {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::Question;
    use mentorform_common::{AnswerType, QuestionId, QuestionKind};

    fn one_section_checklist(checklist_id: &str) -> CoreResult<Checklist> {
        let cid = ChecklistId::new(checklist_id);
        let q = Question::new(
            QuestionId::new(format!("{checklist_id}_S1_Q1")),
            "label",
            QuestionKind::Bool,
            AnswerType::Boolean,
            Vec::new(),
            None,
            None,
            OrderedMap::new(),
            false,
            None,
        )
        .unwrap();
        let questions = OrderedMap::from_entries(vec![(q.id().clone(), q)]).unwrap();
        let section = Section::new(
            &cid,
            SectionId::new(format!("{checklist_id}_S1")),
            "Section 1",
            None,
            None,
            false,
            false,
            questions,
        )
        .unwrap();
        let sections = OrderedMap::from_entries(vec![(section.id().clone(), section)]).unwrap();
        Checklist::new(cid, "Checklist", sections)
    }

    #[test]
    fn accepts_a_well_formed_checklist() {
        assert!(one_section_checklist("C1").is_ok());
    }

    #[test]
    fn rejects_empty_section_list() {
        let err = Checklist::new(ChecklistId::new("C1"), "Checklist", OrderedMap::new()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidMetadata { .. }));
    }
}
