use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Display, EnumString,
    Serialize, Deserialize,
)]
pub enum Quarter {
    #[strum(serialize = "1Q")]
    Q1,
    #[strum(serialize = "2Q")]
    Q2,
    #[strum(serialize = "3Q")]
    Q3,
    #[strum(serialize = "4Q")]
    Q4,
    #[strum(serialize = "OT")]
    Overtime,
}

impl Quarter {
    pub fn is_overtime(self) -> bool { self == Quarter::Overtime }
}
