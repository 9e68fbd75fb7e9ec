//! Runs the `decide` and `explain` commands against snapshot files.

use std::io::Write;
use std::path::Path;

use clap::Parser;
use diamonds_client::commands::{Decide, Explain};
use diamonds_client::config::{ENV_CONFIG, ENV_MIN_TACKLE, from_file};
use tempfile::NamedTempFile;

const BOARD: &str = r#"{
    "width": 5,
    "height": 5,
    "gameObjects": [
        {"id": 1, "type": "BotGameObject", "position": {"x": 0, "y": 0},
         "properties": {"name": "stima", "diamonds": 0, "inventorySize": 5,
                        "base": {"x": 0, "y": 0}, "millisecondsLeft": 60000}},
        {"id": 2, "type": "DiamondGameObject", "position": {"x": 2, "y": 0},
         "properties": {"points": 3}}
    ]
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

/// Environment with no `DIAMONDS_*` variables set.
fn no_env(_: &str) -> Option<String> {
    None
}

fn run_decide(args: &[&str]) -> anyhow::Result<String> {
    run_decide_with(args, no_env)
}

fn run_decide_with(
    args: &[&str],
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<String> {
    let cmd = Decide::try_parse_from(args)?;
    let mut out = Vec::new();
    cmd.run(&mut out, env)?;
    Ok(String::from_utf8(out)?)
}

/// Runs `decide` expecting failure; returns the captured output.
fn failing_decide(args: &[&str]) -> (anyhow::Error, String) {
    let cmd = Decide::try_parse_from(args).expect("args parse");
    let mut out = Vec::new();
    let err = cmd.run(&mut out, no_env).expect_err("decide fails");
    (err, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn decide_prints_direction() {
    let board = write_temp(BOARD);
    let path = path_arg(board.path());

    let out = run_decide(&["decide", path.as_str(), "--bot-id", "1", "--seed", "7"])
        .expect("decide runs");
    assert_eq!(out.trim(), "EAST");
}

#[test]
fn decide_resolves_bot_by_name_as_json() {
    let board = write_temp(BOARD);
    let path = path_arg(board.path());

    let out = run_decide(&["decide", path.as_str(), "--bot-name", "stima", "--format", "json"])
        .expect("decide runs");
    let value: serde_json::Value = serde_json::from_str(out.trim()).expect("valid json");
    assert_eq!(value["bot"], 1);
    assert_eq!(value["direction"], "EAST");
    assert_eq!(value["delta"], serde_json::json!([1, 0]));
}

#[test]
fn decide_reports_unknown_bot() {
    let board = write_temp(BOARD);
    let path = path_arg(board.path());

    let err = run_decide(&["decide", path.as_str(), "--bot-name", "ghost"])
        .expect_err("no such bot");
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn json_failures_carry_error_codes() {
    let board = write_temp(BOARD);
    let path = path_arg(board.path());

    let (err, out) =
        failing_decide(&["decide", path.as_str(), "--bot-name", "ghost", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(out.trim()).expect("valid json");
    assert_eq!(value["error"], "BOT_NAME_NOT_FOUND");
    assert!(value["message"].as_str().is_some_and(|m| m.contains("ghost")));
    assert!(err.to_string().contains("ghost"));

    let (_, out) = failing_decide(&["decide", path.as_str(), "--bot-name", "ghost"]);
    assert!(out.is_empty());
}

#[test]
fn json_reports_off_board_objects() {
    let board = write_temp(
        r#"{"width": 5, "height": 5, "gameObjects": [
            {"id": 1, "type": "BotGameObject", "position": {"x": 0, "y": 0}},
            {"id": 2, "type": "TeleportGameObject", "position": {"x": 2147483647, "y": 0}}
        ]}"#,
    );
    let path = path_arg(board.path());

    let (_, out) = failing_decide(&["decide", path.as_str(), "--bot-id", "1", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(out.trim()).expect("valid json");
    assert_eq!(value["error"], "SNAPSHOT_OUT_OF_BOUNDS");
}

#[test]
fn bot_selector_is_required() {
    assert!(Decide::try_parse_from(["decide", "board.json"]).is_err());
    assert!(
        Decide::try_parse_from(["decide", "board.json", "--bot-id", "1", "--bot-name", "x"])
            .is_err()
    );
}

#[test]
fn config_file_changes_the_decision() {
    // Lowering the tackle threshold makes an adjacent rival with 2 diamonds a
    // target; removing the penalty lets the tackle beat the distant diamond.
    let board = write_temp(
        r#"{"width": 10, "height": 10, "gameObjects": [
            {"id": 1, "type": "BotGameObject", "position": {"x": 5, "y": 5}},
            {"id": 2, "type": "BotGameObject", "position": {"x": 5, "y": 4},
             "properties": {"diamonds": 2}},
            {"id": 3, "type": "DiamondGameObject", "position": {"x": 9, "y": 9},
             "properties": {"points": 1}}
        ]}"#,
    );
    let config = write_temp("min_diamonds_to_tackle = 2\ntackle_score_penalty = 0.0\n");
    let board_path = path_arg(board.path());
    let config_path = path_arg(config.path());

    let loaded = from_file(config.path()).expect("config parses");
    assert_eq!(loaded.min_diamonds_to_tackle, 2);
    assert_eq!(loaded.max_tackle_distance, 1);

    let default_move = run_decide(&["decide", board_path.as_str(), "--bot-id", "1", "--seed", "1"])
        .expect("decide runs");
    assert_eq!(default_move.trim(), "EAST");

    let tuned_move = run_decide(&[
        "decide",
        board_path.as_str(),
        "--bot-id",
        "1",
        "--seed",
        "1",
        "--config",
        config_path.as_str(),
    ])
    .expect("decide runs");
    assert_eq!(tuned_move.trim(), "NORTH");
}

#[test]
fn environment_overrides_reach_the_decision() {
    // Same board as above: a tackle threshold of 2 from the environment plus
    // a penalty-free config named by DIAMONDS_CONFIG turn the move north.
    let board = write_temp(
        r#"{"width": 10, "height": 10, "gameObjects": [
            {"id": 1, "type": "BotGameObject", "position": {"x": 5, "y": 5}},
            {"id": 2, "type": "BotGameObject", "position": {"x": 5, "y": 4},
             "properties": {"diamonds": 2}},
            {"id": 3, "type": "DiamondGameObject", "position": {"x": 9, "y": 9},
             "properties": {"points": 1}}
        ]}"#,
    );
    let config = write_temp("tackle_score_penalty = 0.0\n");
    let board_path = path_arg(board.path());
    let config_path = path_arg(config.path());

    let env = |key: &str| match key {
        ENV_CONFIG => Some(config_path.clone()),
        ENV_MIN_TACKLE => Some("2".to_owned()),
        _ => None,
    };
    let args = ["decide", board_path.as_str(), "--bot-id", "1", "--seed", "1"];

    assert_eq!(run_decide(&args).expect("decide runs").trim(), "EAST");
    assert_eq!(run_decide_with(&args, env).expect("decide runs").trim(), "NORTH");
}

#[test]
fn malformed_config_is_an_error() {
    let config = write_temp("min_diamonds_to_tackle = \"many\"\n");
    assert!(from_file(config.path()).is_err());
}

#[test]
fn explain_lists_candidates_and_decision() {
    let board = write_temp(BOARD);
    let path = path_arg(board.path());

    let cmd = Explain::try_parse_from(["explain", path.as_str(), "--bot-id", "1", "--seed", "3"])
        .expect("args parse");
    let mut out = Vec::new();
    cmd.run(&mut out, no_env).expect("explain runs");
    let text = String::from_utf8(out).expect("utf-8 output");

    assert!(text.contains("1 total"));
    assert!(text.contains("#2"));
    assert!(text.contains("collect"));
    assert!(text.contains("EAST"));
}
