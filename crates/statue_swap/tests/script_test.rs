//! Tests for the line-oriented script front end.

use statue_swap::{OutputFormat, run_script};
use statue_swap_core::{
    CalledSet, CompositeCode, GameController, Randomizer, Session, Shape, StatueId, Statues,
};

fn game(codes: [CompositeCode; 3]) -> GameController {
    let session = Session::new(
        Statues::new(codes),
        CalledSet::new([Shape::Circle, Shape::Square, Shape::Triangle]).expect("distinct"),
    );
    GameController::with_session(Randomizer::seeded(11), session)
}

#[test]
fn test_script_solves_and_reports() {
    let mut g = game([
        CompositeCode::SPHERE,
        CompositeCode::PRISM,
        CompositeCode::PRISM,
    ]);
    let input = "# first pick\npick 1 C\n\n2 square\nshow\n";
    let mut out = Vec::new();
    let mut err = Vec::new();

    let summary = run_script(&mut g, input.as_bytes(), &mut out, &mut err, OutputFormat::Plain, false)
        .expect("script runs");

    let out = String::from_utf8(out).expect("utf8");
    assert_eq!(summary.commands, 3);
    assert_eq!(summary.errors, 0);
    assert!(summary.solved);
    assert!(out.contains("statues: 1: Sphere | 2: Prism | 3: Prism"));
    assert!(out.contains("pending: statue 1 -> Circle"));
    assert!(out.contains("statues: 1: Cylinder | 2: Cone | 3: Prism"));
    assert!(out.contains("*** SOLVED ***"));
    assert!(err.is_empty());
}

#[test]
fn test_script_skips_malformed_lines() {
    let mut g = game([
        CompositeCode::CYLINDER,
        CompositeCode::CONE,
        CompositeCode::PRISM,
    ]);
    let input = "dance\npick 7 C\n1 Z\nshow\n";
    let mut out = Vec::new();
    let mut err = Vec::new();

    let summary = run_script(&mut g, input.as_bytes(), &mut out, &mut err, OutputFormat::Plain, false)
        .expect("script runs");

    let err = String::from_utf8(err).expect("utf8");
    assert_eq!(summary.errors, 3);
    assert_eq!(summary.commands, 1);
    assert!(err.contains("line 1: Unknown command 'dance'"));
    assert!(err.contains("line 2"));
    assert!(err.contains("line 3"));
}

#[test]
fn test_script_quit_stops_reading() {
    let mut g = game([
        CompositeCode::CYLINDER,
        CompositeCode::CONE,
        CompositeCode::PRISM,
    ]);
    let input = "quit\npick 1 C\n";
    let mut out = Vec::new();

    let summary = run_script(&mut g, input.as_bytes(), &mut out, std::io::sink(), OutputFormat::Plain, false)
        .expect("script runs");

    assert_eq!(summary.commands, 1);
    assert_eq!(g.pending(), None);
}

#[test]
fn test_script_json_lines() {
    let mut g = game([
        CompositeCode::SPHERE,
        CompositeCode::PRISM,
        CompositeCode::PYRAMID,
    ]);
    let input = "1 C\n3 T\n";
    let mut out = Vec::new();

    run_script(&mut g, input.as_bytes(), &mut out, std::io::sink(), OutputFormat::Json, false)
        .expect("script runs");

    let out = String::from_utf8(out).expect("utf8");
    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["event"], "Session started");
    assert_eq!(lines[1]["pending"]["statue"], "One");
    // Double with double: both become CT.
    assert_eq!(lines[2]["statues"][0]["code"], "CT");
    assert_eq!(lines[2]["statues"][2]["code"], "CT");
    assert_eq!(lines[2]["statues"][1]["code"], "ST");
    assert_eq!(lines[2]["solved"], false);
}

#[test]
fn test_script_start_draws_new_session() {
    let mut g = GameController::new(Some(5));
    let mut expected = GameController::new(Some(5));
    expected.on_start();

    let mut out = Vec::new();
    run_script(&mut g, "start\n".as_bytes(), &mut out, std::io::sink(), OutputFormat::Plain, true)
        .expect("script runs");

    assert_eq!(g.session(), expected.session());
    let out = String::from_utf8(out).expect("utf8");
    assert!(out.contains('('), "codes are shown: {out}");
}

#[test]
fn test_script_skips_line_that_is_not_utf8() {
    let mut g = game([
        CompositeCode::CYLINDER,
        CompositeCode::CONE,
        CompositeCode::PRISM,
    ]);
    let input: &[u8] = b"\xff\xfe bad\r\n1 C\r\n";
    let mut out = Vec::new();
    let mut err = Vec::new();

    let summary = run_script(&mut g, input, &mut out, &mut err, OutputFormat::Plain, false)
        .expect("script runs");

    let err = String::from_utf8(err).expect("utf8");
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.commands, 1);
    assert!(err.contains("line 1"));
    assert_eq!(
        g.pending().map(|selection| (selection.statue, selection.shape)),
        Some((StatueId::One, Shape::Circle))
    );
}
