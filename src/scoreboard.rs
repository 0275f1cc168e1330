use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use crate::play::Play;
use crate::quarter::Quarter;
use crate::side::Side;

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct ScoreLine {
    pub q1: u32,
    pub q2: u32,
    pub q3: u32,
    pub q4: u32,
    pub total: u32,
}

impl ScoreLine {
    fn add(&mut self, quarter: Quarter, points: u32) {
        match quarter {
            Quarter::Q1 => self.q1 += points,
            Quarter::Q2 => self.q2 += points,
            Quarter::Q3 => self.q3 += points,
            Quarter::Q4 => self.q4 += points,
            // Overtime has no column of its own; the points land in `total`.
            Quarter::Overtime => {}
        }
        self.total += points;
    }
}

// Per-team, per-quarter point table. Recomputed from scratch on every play
// list mutation; the fold is order-independent because quarter attribution
// depends only on each play's own fields.
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct Scoreboard {
    pub sides: EnumMap<Side, ScoreLine>,
}

impl Scoreboard {
    pub fn from_plays<'a>(plays: impl IntoIterator<Item = &'a Play>) -> Self {
        let mut board = Scoreboard::default();
        for play in plays {
            // A scoring method without a scoring side (or vice versa) is
            // tolerated by simply not scoring the play.
            let Some(method) = play.scoring_method else { continue };
            let Some(side) = play.scoring_side else { continue };
            let points = method.points();
            if points == 0 {
                continue;
            }
            board.sides[side].add(play.quarter, points);
        }
        board
    }

    pub fn side(&self, side: Side) -> &ScoreLine { &self.sides[side] }
}
