//! The closed vocabulary of functions the expression algebra renders.
//!
//! `count_selected` is not part of spec §4.A's named-constructor list, but
//! the scoring-rule lowering (§4.B) needs it to count selected options on a
//! `select_multiple`; it renders with the XPath/ODK hyphenated spelling
//! `count-selected(...)` the same way `selected` renders as a two-arg call.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    Abs,
    Round,
    Intf,
    Number,
    Pow,
    Boolean,
    Coalesce,
    Selected,
    CountSelected,
    If,
}

impl Func {
    /// The name the function renders as in XPath source.
    pub fn xpath_name(self) -> &'static str {
        match self {
            Func::Abs => "abs",
            Func::Round => "round",
            Func::Intf => "int",
            Func::Number => "number",
            Func::Pow => "pow",
            Func::Boolean => "boolean",
            Func::Coalesce => "coalesce",
            Func::Selected => "selected",
            Func::CountSelected => "count-selected",
            Func::If => "if",
        }
    }

    /// The exact argument count every call to this function must carry.
    pub fn arity(self) -> usize {
        match self {
            Func::Abs | Func::Intf | Func::Number | Func::Boolean | Func::CountSelected => 1,
            Func::Round | Func::Pow | Func::Coalesce | Func::Selected => 2,
            Func::If => 3,
        }
    }
}
