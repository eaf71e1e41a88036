pub mod domain_kinds;
pub mod error;
pub mod ident;
pub mod ordered_map;

pub use domain_kinds::{AnswerType, QuestionKind, ScoreColor};
pub use error::{CoreError, CoreResult};
pub use ident::{ChecklistId, QuestionId, SectionId};
pub use ordered_map::OrderedMap;
