// Yardage numbers come in as raw form text. Empty or non-numeric input means
// "unset"; fields with declared bounds snap to the nearest bound instead of
// rejecting the edit.

pub const FIELD_MIN: i32 = 1;
pub const FIELD_MAX: i32 = 50;

pub const DOWN_MIN: i32 = 1;
pub const DOWN_MAX: i32 = 4;

pub fn parse_signed(input: &str) -> Option<i32> { input.trim().parse().ok() }

pub fn parse_bounded(input: &str, min: i32, max: i32) -> Option<i32> {
    parse_signed(input).map(|n| n.clamp(min, max))
}

// Yard lines and to-go distances share the [1, 50] field range.
pub fn parse_yards(input: &str) -> Option<i32> { parse_bounded(input, FIELD_MIN, FIELD_MAX) }

pub fn clamp_field(position: i32) -> i32 { position.clamp(FIELD_MIN, FIELD_MAX) }

// For projections computed in i64 to dodge i32 overflow; the clamp brings the
// result back into i32 range.
pub fn clamp_field_wide(position: i64) -> i32 {
    position.clamp(FIELD_MIN as i64, FIELD_MAX as i64) as i32
}
