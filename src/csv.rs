//! Fixed-column CSV export of the play log, and the inverse parser.
//!
//! Every field is wrapped in double quotes with internal double quotes
//! doubled; rows are CRLF-joined and preceded by a header row. The parser is
//! strict about structure (quoting, column count) and permissive about
//! content: malformed numbers degrade to unset and unknown enum codes to
//! unset, matching the entry form's behavior.

use std::iter;
use std::str::FromStr;

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::game::GameMeta;
use crate::play::{FieldHalf, Play, PlayType, ScoringMethod, TurnoverKind};
use crate::quarter::Quarter;
use crate::side::Side;
use crate::yardage;

pub const COLUMNS: [&str; 19] = [
    "Q", "CLOCK", "OFFENSE", "BALL ON", "DOWN", "TO GO", "PLAY", "GAIN", "FD", "PASSER",
    "RUNNER/KICKER", "TACKLE BY", "TACKLE BY 2", "INT/PD", "TURNOVER", "PENALTY Y", "REMARKS",
    "SCORE", "METHOD",
];

const FIRST_DOWN_MARK: &str = "Y";
const SACK_SUFFIX: &str = " (Sack)";

pub fn export(meta: &GameMeta, plays: &[Play]) -> String {
    let header = COLUMNS.iter().map(|column| quote(column)).join(",");
    let rows = plays
        .iter()
        .map(|play| row_cells(meta, play).iter().map(|cell| quote(cell)).join(","));
    iter::once(header).chain(rows).join("\r\n")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn row_cells(meta: &GameMeta, play: &Play) -> Vec<String> {
    vec![
        play.quarter.to_string(),
        play.clock.clone(),
        meta.team_name(play.attacking_side).to_owned(),
        ball_on_cell(play),
        play.down.to_string(),
        opt_number(play.to_go),
        play_type_cell(play),
        opt_number(play.gain_yards),
        if play.first_down { FIRST_DOWN_MARK.to_owned() } else { String::new() },
        opt_text(&play.passer),
        opt_text(&play.runner_kicker),
        opt_text(&play.tackler),
        opt_text(&play.assist_tackler),
        opt_text(&play.defender),
        play.turnover.map(|kind| kind.to_string()).unwrap_or_default(),
        opt_number(play.penalty_yards),
        play.remarks.clone(),
        play.scoring_side.map(|side| side.letter().to_owned()).unwrap_or_default(),
        play.scoring_method.map(|method| method.to_string()).unwrap_or_default(),
    ]
}

fn opt_number(value: Option<i32>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

// "OWN35" / "OPP3"; just the half code when the yard line is unset.
fn ball_on_cell(play: &Play) -> String {
    match play.yard_line {
        Some(line) => format!("{}{}", play.field_half, line),
        None => play.field_half.to_string(),
    }
}

fn play_type_cell(play: &Play) -> String {
    let code = play.play_type.map(|kind| kind.to_string()).unwrap_or_default();
    if play.sack { format!("{code}{SACK_SUFFIX}") } else { code }
}

pub fn parse(meta: &GameMeta, text: &str) -> Result<Vec<Play>, String> {
    let mut rows = scan_rows(text)?;
    if rows.first().is_some_and(|row| row.first().map(String::as_str) == Some(COLUMNS[0])) {
        rows.remove(0);
    }
    rows.iter()
        .enumerate()
        .map(|(idx, row)| parse_row(meta, idx, row))
        .collect()
}

// Splits the document into rows of unquoted cells. Quoted cells may contain
// commas, newlines and doubled quotes.
fn scan_rows(text: &str) -> Result<Vec<Vec<String>>, String> {
    let mut rows = Vec::new();
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                _ => cell.push(ch),
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => cells.push(std::mem::take(&mut cell)),
                '\r' => {}
                '\n' => {
                    cells.push(std::mem::take(&mut cell));
                    rows.push(std::mem::take(&mut cells));
                }
                _ => cell.push(ch),
            }
        }
    }
    if in_quotes {
        return Err(format!("unbalanced quote in row {}", rows.len() + 1));
    }
    if !cell.is_empty() || !cells.is_empty() {
        cells.push(cell);
        rows.push(cells);
    }
    Ok(rows)
}

fn parse_row(meta: &GameMeta, idx: usize, row: &[String]) -> Result<Play, String> {
    if row.len() != COLUMNS.len() {
        return Err(format!(
            "row {}: expected {} columns, got {}",
            idx + 1,
            COLUMNS.len(),
            row.len()
        ));
    }
    let mut play = Play::new();
    play.seq = idx as u64 + 1;
    play.quarter = Quarter::from_str(&row[0]).unwrap_or(Quarter::Q1);
    play.clock = row[1].clone();
    play.attacking_side = side_from_name(meta, &row[2]);
    (play.field_half, play.yard_line) = parse_ball_on(&row[3]);
    if let Some(down) = yardage::parse_signed(&row[4]) {
        play.down = down.clamp(yardage::DOWN_MIN, yardage::DOWN_MAX) as u8;
    }
    play.to_go = yardage::parse_yards(&row[5]);
    (play.play_type, play.sack) = parse_play_type(&row[6]);
    play.gain_yards = yardage::parse_signed(&row[7]);
    play.first_down = !row[8].is_empty();
    play.passer = non_empty(&row[9]);
    play.runner_kicker = non_empty(&row[10]);
    play.tackler = non_empty(&row[11]);
    play.assist_tackler = non_empty(&row[12]);
    play.defender = non_empty(&row[13]);
    play.turnover = TurnoverKind::from_str(&row[14]).ok();
    play.penalty_yards = yardage::parse_signed(&row[15]);
    play.remarks = row[16].clone();
    play.scoring_side = Side::iter().find(|side| side.letter() == row[17]);
    play.scoring_method = ScoringMethod::from_str(&row[18]).ok();
    Ok(play)
}

fn non_empty(cell: &str) -> Option<String> {
    if cell.is_empty() { None } else { Some(cell.to_owned()) }
}

// The export writes display names; match them against the meta first, then
// accept the raw side codes.
fn side_from_name(meta: &GameMeta, cell: &str) -> Side {
    Side::iter()
        .find(|side| meta.team_name(*side) == cell)
        .or_else(|| match cell {
            "home" => Some(Side::Home),
            "visitor" => Some(Side::Visitor),
            _ => None,
        })
        .unwrap_or(Side::Home)
}

fn parse_ball_on(cell: &str) -> (FieldHalf, Option<i32>) {
    for half in FieldHalf::iter() {
        let code = half.to_string();
        if let Some(rest) = cell.strip_prefix(code.as_str()) {
            return (half, yardage::parse_yards(rest));
        }
    }
    (FieldHalf::Own, None)
}

fn parse_play_type(cell: &str) -> (Option<PlayType>, bool) {
    let (code, sack) = match cell.strip_suffix(SACK_SUFFIX) {
        Some(code) => (code, true),
        None => (cell, false),
    };
    (PlayType::from_str(code).ok(), sack)
}
