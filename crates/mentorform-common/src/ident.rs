//! Thin string newtypes for the three identifier namespaces.
//!
//! Checklist, section, and question ids all happen to be `String` under the
//! hood, but they are never interchangeable: a `SectionId` passed where a
//! `QuestionId` is expected is almost always a bug. Wrapping them turns that
//! bug into a compile error instead of a runtime surprise three lowering
//! passes downstream.

use std::borrow::Borrow;
use std::fmt;

macro_rules! ident_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

ident_newtype!(ChecklistId);
ident_newtype!(SectionId);
ident_newtype!(QuestionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_as_the_bare_string() {
        let id = QuestionId::new("S1_Q1");
        assert_eq!(id.to_string(), "S1_Q1");
        assert_eq!(id, "S1_Q1");
    }
}
