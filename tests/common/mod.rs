// Shared fixtures for the integration tests.
//
// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use enum_map::enum_map;
use gridiron_scorer::game::GameMeta;
use gridiron_scorer::play::{Play, ScoringMethod};
use gridiron_scorer::quarter::Quarter;
use gridiron_scorer::side::Side;
use time::macros::date;

#[allow(dead_code)]
pub fn sample_meta() -> GameMeta {
    GameMeta {
        date: date!(2024 - 10 - 13),
        venue: "Fujisawa Stadium".to_owned(),
        team_names: enum_map! {
            Side::Home => "Browndings".to_owned(),
            Side::Visitor => "Kamakura Lazarus".to_owned(),
        },
    }
}

#[allow(dead_code)]
pub fn scoring_play(quarter: Quarter, side: Side, method: ScoringMethod) -> Play {
    let mut play = Play::new();
    play.quarter = quarter;
    play.scoring_side = Some(side);
    play.scoring_method = Some(method);
    play
}
