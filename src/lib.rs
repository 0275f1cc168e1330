#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod csv;
pub mod derivation;
pub mod game;
pub mod play;
pub mod quarter;
pub mod scoreboard;
pub mod side;
pub mod yardage;
