use rand::distr::{Alphanumeric, SampleString};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::quarter::Quarter;
use crate::side::Side;

const PLAY_ID_LEN: usize = 12;

// Opaque unique identifier, assigned at creation. Backend stores may supply
// their own ids via `new`; locally created plays mint a random one.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    pub fn new(id: impl Into<String>) -> Self { PlayId(id.into()) }
    pub fn random() -> Self {
        PlayId(Alphanumeric.sample_string(&mut rand::rng(), PLAY_ID_LEN))
    }
    pub fn as_str(&self) -> &str { &self.0 }
}

// Which half of the field the recorded yard line is on, from the offense's
// point of view.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, Display, EnumString, Serialize, Deserialize,
)]
pub enum FieldHalf {
    #[strum(serialize = "OWN")]
    Own,
    #[strum(serialize = "OPP")]
    Opponent,
}

impl FieldHalf {
    // Yardage gained always moves the ball toward the opponent's goal: yard
    // lines grow on the offense's own half and shrink on the opponent's.
    pub fn advance_sign(self) -> i32 {
        match self {
            FieldHalf::Own => 1,
            FieldHalf::Opponent => -1,
        }
    }
}

#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, Display, EnumString, Serialize, Deserialize,
)]
pub enum PlayType {
    Run,
    Pass,
    Penalty,
    #[strum(serialize = "Kick off")]
    Kickoff,
    Punt,
    #[strum(serialize = "Field goal")]
    FieldGoal,
    #[strum(serialize = "TFP(Kick)")]
    ExtraPointKick,
    #[strum(serialize = "TFP(Run)")]
    ExtraPointRun,
    #[strum(serialize = "TFP(Pass)")]
    ExtraPointPass,
    #[strum(serialize = "Spike/Knee down")]
    SpikeOrKneel,
    Safety,
    #[strum(serialize = "Time out")]
    Timeout,
}

impl PlayType {
    // Kicking the ball away starts a fresh series for the receiving offense.
    pub fn resets_series(self) -> bool {
        matches!(self, PlayType::Kickoff | PlayType::Punt | PlayType::FieldGoal)
    }

    // Plays that stop the clock without moving the ball.
    pub fn is_dead_ball(self) -> bool {
        matches!(self, PlayType::SpikeOrKneel | PlayType::Timeout)
    }

    // Plays whose gain moves the recorded ball position.
    pub fn advances_ball(self) -> bool {
        matches!(
            self,
            PlayType::Run | PlayType::Pass | PlayType::Penalty | PlayType::SpikeOrKneel
        )
    }
}

#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, Display, EnumString, Serialize, Deserialize,
)]
pub enum TurnoverKind {
    Intercept,
    Fumble,
    #[strum(serialize = "4th down failed")]
    FourthDownFailed,
    Safety,
}

#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, Display, EnumString, Serialize, Deserialize,
)]
pub enum ScoringMethod {
    #[strum(serialize = "TD")]
    Touchdown,
    #[strum(serialize = "FG")]
    FieldGoal,
    Safety,
    #[strum(serialize = "TFP(Kick)")]
    ExtraPointKick,
    #[strum(serialize = "TFP(Run)")]
    ExtraPointRun,
    #[strum(serialize = "TFP(Pass)")]
    ExtraPointPass,
}

impl ScoringMethod {
    pub fn points(self) -> u32 {
        match self {
            ScoringMethod::Touchdown => 6,
            ScoringMethod::FieldGoal => 3,
            ScoringMethod::Safety => 2,
            ScoringMethod::ExtraPointKick => 1,
            ScoringMethod::ExtraPointRun => 2,
            ScoringMethod::ExtraPointPass => 2,
        }
    }
}

// One recorded snap. Created as a draft owned by the entry form, mutated only
// through `derivation::apply_edit`, then committed into the game's play list
// (`Game::commit`), which assigns the final `seq`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Play {
    pub id: PlayId,
    pub seq: u64,
    pub quarter: Quarter,
    pub clock: String,  // wall-clock display string, free-form
    pub attacking_side: Side,
    pub field_half: FieldHalf,
    pub yard_line: Option<i32>,
    pub down: u8,
    pub to_go: Option<i32>,
    pub play_type: Option<PlayType>,
    pub gain_yards: Option<i32>,
    pub first_down: bool,
    pub sack: bool,
    pub passer: Option<String>,
    pub runner_kicker: Option<String>,
    pub tackler: Option<String>,
    pub assist_tackler: Option<String>,
    pub defender: Option<String>,  // interceptor / pass defender
    pub turnover: Option<TurnoverKind>,
    pub penalty_yards: Option<i32>,
    pub remarks: String,
    pub scoring_side: Option<Side>,
    pub scoring_method: Option<ScoringMethod>,
}

impl Play {
    // Blank draft with the entry form's defaults.
    pub fn new() -> Self {
        Play {
            id: PlayId::random(),
            seq: 0,
            quarter: Quarter::Q1,
            clock: "12:00".to_owned(),
            attacking_side: Side::Home,
            field_half: FieldHalf::Own,
            yard_line: None,
            down: 1,
            to_go: None,
            play_type: None,
            gain_yards: None,
            first_down: false,
            sack: false,
            passer: None,
            runner_kicker: None,
            tackler: None,
            assist_tackler: None,
            defender: None,
            turnover: None,
            penalty_yards: None,
            remarks: String::new(),
            scoring_side: None,
            scoring_method: None,
        }
    }
}
