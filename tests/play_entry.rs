use gridiron_scorer::derivation::{PlayEdit, apply_edit};
use gridiron_scorer::play::{FieldHalf, Play, PlayType};
use pretty_assertions::assert_eq;

fn edited(play: &Play, edits: &[PlayEdit]) -> Play {
    edits.iter().fold(play.clone(), |draft, edit| apply_edit(&draft, edit))
}

fn to_go(input: &str) -> PlayEdit { PlayEdit::ToGo(input.to_owned()) }
fn gain(input: &str) -> PlayEdit { PlayEdit::GainYards(input.to_owned()) }
fn yard_line(input: &str) -> PlayEdit { PlayEdit::YardLine(input.to_owned()) }
fn play_type(kind: PlayType) -> PlayEdit { PlayEdit::PlayType(Some(kind)) }


#[test]
fn bounded_numeric_edits_snap_to_bounds() {
    let blank = Play::new();
    assert_eq!(edited(&blank, &[yard_line("23")]).yard_line, Some(23));
    assert_eq!(edited(&blank, &[yard_line("0")]).yard_line, Some(1));
    assert_eq!(edited(&blank, &[yard_line("99")]).yard_line, Some(50));
    assert_eq!(edited(&blank, &[yard_line("abc")]).yard_line, None);
    assert_eq!(edited(&blank, &[yard_line("")]).yard_line, None);
    assert_eq!(edited(&blank, &[to_go("-3")]).to_go, Some(1));
    assert_eq!(edited(&blank, &[to_go("77")]).to_go, Some(50));
}

#[test]
fn unbounded_gain_accepts_any_magnitude() {
    let blank = Play::new();
    assert_eq!(edited(&blank, &[gain("-12")]).gain_yards, Some(-12));
    assert_eq!(edited(&blank, &[gain("85")]).gain_yards, Some(85));
    assert_eq!(edited(&blank, &[gain("x")]).gain_yards, None);
}

#[test]
fn down_edit_keeps_previous_value_on_malformed_input() {
    let play = edited(&Play::new(), &[PlayEdit::Down("3".to_owned())]);
    assert_eq!(play.down, 3);
    assert_eq!(edited(&play, &[PlayEdit::Down("".to_owned())]).down, 3);
    assert_eq!(edited(&play, &[PlayEdit::Down("9".to_owned())]).down, 4);
    assert_eq!(edited(&play, &[PlayEdit::Down("0".to_owned())]).down, 1);
}

#[test]
fn gain_covering_distance_infers_first_down() {
    let play = edited(&Play::new(), &[to_go("7"), gain("9")]);
    assert!(play.first_down);
    // Equality is enough.
    assert!(edited(&Play::new(), &[to_go("7"), gain("7")]).first_down);
    // Short of the sticks: no inference.
    assert!(!edited(&Play::new(), &[to_go("7"), gain("6")]).first_down);
    // Either edit order triggers the rule.
    assert!(edited(&Play::new(), &[gain("9"), to_go("7")]).first_down);
}

#[test]
fn first_down_is_never_cleared_automatically() {
    let play = edited(&Play::new(), &[to_go("5"), gain("8")]);
    assert!(play.first_down);
    // A shorter gain does not retract the flag.
    let play = edited(&play, &[gain("2")]);
    assert!(play.first_down);
    // Only an explicit manual edit clears it.
    let play = edited(&play, &[PlayEdit::FirstDown(false)]);
    assert!(!play.first_down);
    assert_eq!(play.gain_yards, Some(2));
}

#[test]
fn kick_plays_reset_the_series() {
    let third_and_short = edited(&Play::new(), &[
        PlayEdit::Down("3".to_owned()),
        to_go("2"),
        gain("4"),
    ]);
    assert!(third_and_short.first_down);
    for kick in [PlayType::Kickoff, PlayType::Punt, PlayType::FieldGoal] {
        let play = edited(&third_and_short, &[play_type(kick)]);
        assert_eq!(play.down, 1, "{kick:?}");
        assert_eq!(play.to_go, Some(10), "{kick:?}");
        assert!(!play.first_down, "{kick:?}");
    }
}

#[test]
fn kick_reset_is_idempotent() {
    let play = edited(&Play::new(), &[PlayEdit::Down("4".to_owned()), to_go("1")]);
    let once = edited(&play, &[play_type(PlayType::FieldGoal)]);
    let twice = edited(&once, &[play_type(PlayType::FieldGoal)]);
    assert_eq!(once, twice);
}

#[test]
fn non_kick_play_types_leave_the_series_alone() {
    let play = edited(&Play::new(), &[PlayEdit::Down("3".to_owned()), to_go("2")]);
    let play = edited(&play, &[play_type(PlayType::Run)]);
    assert_eq!(play.down, 3);
    assert_eq!(play.to_go, Some(2));
}

#[test]
fn dead_plays_zero_the_gain() {
    let play = edited(&Play::new(), &[gain("7")]);
    for dead in [PlayType::SpikeOrKneel, PlayType::Timeout] {
        let play = edited(&play, &[play_type(dead)]);
        assert_eq!(play.gain_yards, Some(0), "{dead:?}");
        // The gain stays pinned while the play type holds.
        assert_eq!(edited(&play, &[gain("5")]).gain_yards, Some(0), "{dead:?}");
    }
}

#[test]
fn gain_edits_project_the_ball_position() {
    let base = edited(&Play::new(), &[play_type(PlayType::Run), yard_line("20")]);
    // Own half: yardage moves the line up toward midfield.
    assert_eq!(edited(&base, &[gain("15")]).yard_line, Some(35));
    assert_eq!(edited(&base, &[gain("-8")]).yard_line, Some(12));
    // Opponent half: the same gain moves the line down toward their goal.
    let opp = edited(&base, &[PlayEdit::FieldHalf(FieldHalf::Opponent)]);
    assert_eq!(edited(&opp, &[gain("15")]).yard_line, Some(5));
}

#[test]
fn projection_requires_an_advancing_play_type() {
    let play = edited(&Play::new(), &[yard_line("20"), gain("15")]);
    // No play type selected: position untouched.
    assert_eq!(play.yard_line, Some(20));
    let punt = edited(&Play::new(), &[play_type(PlayType::Punt), yard_line("20")]);
    assert_eq!(edited(&punt, &[gain("40")]).yard_line, Some(20));
}

#[test]
fn projection_is_not_triggered_by_yard_line_edits() {
    let play = edited(&Play::new(), &[play_type(PlayType::Pass), gain("10")]);
    // Entering the yard line after the gain applies the raw value only.
    assert_eq!(edited(&play, &[yard_line("25")]).yard_line, Some(25));
}

#[test]
fn ball_position_never_leaves_the_field() {
    let mut play = edited(&Play::new(), &[play_type(PlayType::Run), yard_line("30")]);
    for input in ["60", "-200", "12", "49", "3", "-7", "100", "0", "2147483647", "-2147483648"] {
        play = apply_edit(&play, &gain(input));
        let line = play.yard_line.unwrap();
        assert!((1..=50).contains(&line), "gain {input:?} left the field: {line}");
    }
}

#[test]
fn extreme_gains_project_without_overflow() {
    let base = edited(&Play::new(), &[play_type(PlayType::Run), yard_line("30")]);
    assert_eq!(edited(&base, &[gain("2147483647")]).yard_line, Some(50));
    assert_eq!(edited(&base, &[gain("-2147483648")]).yard_line, Some(1));
    // Negating i32::MIN must not trip up the opponent-half projection either.
    let opp = edited(&base, &[PlayEdit::FieldHalf(FieldHalf::Opponent)]);
    assert_eq!(edited(&opp, &[gain("-2147483648")]).yard_line, Some(50));
    assert_eq!(edited(&opp, &[gain("2147483647")]).yard_line, Some(1));
}

#[test]
fn jersey_fields_treat_blank_as_unset() {
    let play = edited(&Play::new(), &[
        PlayEdit::Passer("12".to_owned()),
        PlayEdit::Tackler("  ".to_owned()),
        PlayEdit::Defender("#4 (tipped)".to_owned()),
    ]);
    assert_eq!(play.passer.as_deref(), Some("12"));
    assert_eq!(play.tackler, None);
    assert_eq!(play.defender.as_deref(), Some("#4 (tipped)"));
}
