//! Keeps a draft play consistent as individual fields are edited.
//!
//! `apply_edit` is pure and total: one field edit in, the next draft out.
//! Dependent fields are derived in a single pass per edit; there is no
//! fixpoint iteration, so a chain of dependent edits resolves as each field
//! event fires. Which edits trigger which rules:
//!
//! - `gain_yards` / `to_go`: first-down inference (sets, never clears);
//! - `play_type` into {Kick off, Punt, Field goal}: down/to-go series reset;
//! - `play_type` into {Spike/Knee down, Time out}, and `gain_yards` while
//!   there: gain forced to zero;
//! - `gain_yards` only: ball position projection (not `yard_line` edits, to
//!   avoid feedback loops).

use crate::play::{FieldHalf, Play, PlayType, ScoringMethod, TurnoverKind};
use crate::quarter::Quarter;
use crate::side::Side;
use crate::yardage;

// A single field mutation coming from the entry form. Numeric fields carry
// the raw input text; malformed text degrades to "unset", never to an error.
#[derive(Clone, Debug)]
pub enum PlayEdit {
    Quarter(Quarter),
    Clock(String),
    AttackingSide(Side),
    FieldHalf(FieldHalf),
    YardLine(String),
    Down(String),
    ToGo(String),
    PlayType(Option<PlayType>),
    GainYards(String),
    FirstDown(bool),
    Sack(bool),
    Passer(String),
    RunnerKicker(String),
    Tackler(String),
    AssistTackler(String),
    Defender(String),
    Turnover(Option<TurnoverKind>),
    PenaltyYards(String),
    Remarks(String),
    ScoringSide(Option<Side>),
    ScoringMethod(Option<ScoringMethod>),
}

pub fn apply_edit(prev: &Play, edit: &PlayEdit) -> Play {
    let mut next = prev.clone();
    apply_raw(&mut next, edit);
    match edit {
        PlayEdit::ToGo(_) => {
            infer_first_down(&mut next);
        }
        PlayEdit::GainYards(_) => {
            infer_first_down(&mut next);
            zero_dead_play(&mut next);
            project_ball_position(&mut next);
        }
        PlayEdit::PlayType(_) => {
            reset_kick_series(&mut next);
            zero_dead_play(&mut next);
        }
        _ => {}
    }
    next
}

// Rule 1: the raw edit itself, with bounded numeric fields snapped to their
// declared range before any derivation runs.
fn apply_raw(play: &mut Play, edit: &PlayEdit) {
    match edit {
        PlayEdit::Quarter(quarter) => play.quarter = *quarter,
        PlayEdit::Clock(text) => play.clock = text.clone(),
        PlayEdit::AttackingSide(side) => play.attacking_side = *side,
        PlayEdit::FieldHalf(half) => play.field_half = *half,
        PlayEdit::YardLine(input) => play.yard_line = yardage::parse_yards(input),
        PlayEdit::Down(input) => {
            // `down` has no unset state, so malformed input keeps the
            // previous value.
            if let Some(down) = yardage::parse_signed(input) {
                play.down = down.clamp(yardage::DOWN_MIN, yardage::DOWN_MAX) as u8;
            }
        }
        PlayEdit::ToGo(input) => play.to_go = yardage::parse_yards(input),
        PlayEdit::PlayType(play_type) => play.play_type = *play_type,
        PlayEdit::GainYards(input) => play.gain_yards = yardage::parse_signed(input),
        PlayEdit::FirstDown(checked) => play.first_down = *checked,
        PlayEdit::Sack(checked) => play.sack = *checked,
        PlayEdit::Passer(text) => play.passer = jersey(text),
        PlayEdit::RunnerKicker(text) => play.runner_kicker = jersey(text),
        PlayEdit::Tackler(text) => play.tackler = jersey(text),
        PlayEdit::AssistTackler(text) => play.assist_tackler = jersey(text),
        PlayEdit::Defender(text) => play.defender = jersey(text),
        PlayEdit::Turnover(kind) => play.turnover = *kind,
        PlayEdit::PenaltyYards(input) => play.penalty_yards = yardage::parse_signed(input),
        PlayEdit::Remarks(text) => play.remarks = text.clone(),
        PlayEdit::ScoringSide(side) => play.scoring_side = *side,
        PlayEdit::ScoringMethod(method) => play.scoring_method = *method,
    }
}

// Jersey fields accept numbers or free text; blank means unset.
fn jersey(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

// Rule 2: a gain covering the distance to go is a first down. Only ever sets
// the flag; the scorer can still uncheck it manually afterward.
fn infer_first_down(play: &mut Play) {
    if let (Some(gain), Some(to_go)) = (play.gain_yards, play.to_go) {
        if gain >= to_go {
            play.first_down = true;
        }
    }
}

// Rule 3: kicking the ball away starts a fresh 1st-and-10.
fn reset_kick_series(play: &mut Play) {
    if play.play_type.is_some_and(PlayType::resets_series) {
        play.down = 1;
        play.to_go = Some(10);
        play.first_down = false;
    }
}

// Rule 4: spikes, kneels and timeouts gain nothing.
fn zero_dead_play(play: &mut Play) {
    if play.play_type.is_some_and(PlayType::is_dead_ball) {
        play.gain_yards = Some(0);
    }
}

// Rule 5: project the recorded ball position from the gain just entered,
// clamped to the field. Reads the gain from the same edit that triggered it.
// The projection is widened to i64: any i32 gain is a legal edit, and the
// result is clamped to [1, 50] anyway.
fn project_ball_position(play: &mut Play) {
    if !play.play_type.is_some_and(PlayType::advances_ball) {
        return;
    }
    if let (Some(line), Some(gain)) = (play.yard_line, play.gain_yards) {
        let projected = line as i64 + play.field_half.advance_sign() as i64 * gain as i64;
        play.yard_line = Some(yardage::clamp_field_wide(projected));
    }
}
