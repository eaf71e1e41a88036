//! Checklist/section/question lowering, cover-sheet and org-unit
//! generation, and the loader/writer contracts a caller plugs in.

mod checklist;
mod contracts;
mod item;
mod question;
mod section;
mod slug;
mod support;

pub use checklist::compile;
pub use contracts::{ChecklistLoader, FacilitySource, XLSFormWriter};
pub use item::XLSFormItem;
