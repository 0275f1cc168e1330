use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Visitor,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Visitor,
            Side::Visitor => Side::Home,
        }
    }

    // Single-letter code used in exported score columns.
    pub fn letter(self) -> &'static str {
        match self {
            Side::Home => "H",
            Side::Visitor => "V",
        }
    }
}
