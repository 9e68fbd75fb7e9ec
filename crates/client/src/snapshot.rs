//! Board snapshot decoding.
//!
//! Snapshots are the JSON boards the game server hands out each tick, either
//! bare or wrapped in the API's `{"data": ...}` envelope. Decoded boards are
//! validated before any decision is made on them.
use std::convert::Infallible;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use diamonds_core::Board;
use serde::Deserialize;

/// Where to read a snapshot from; `-` on the command line means stdin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardSource {
    Stdin,
    File(PathBuf),
}

impl FromStr for BoardSource {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "-" => BoardSource::Stdin,
            path => BoardSource::File(PathBuf::from(path)),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope {
    Wrapped { data: Board },
    Bare(Board),
}

pub fn read_board(source: &BoardSource) -> Result<Board> {
    let text = match source {
        BoardSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read board from stdin")?;
            text
        }
        BoardSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board file: {}", path.display()))?,
    };

    decode_board(&text)
}

/// Decodes and validates a JSON board snapshot.
pub fn decode_board(json: &str) -> Result<Board> {
    let board = match serde_json::from_str(json).context("Failed to decode board snapshot")? {
        Envelope::Wrapped { data } => data,
        Envelope::Bare(board) => board,
    };
    board.validate().context("Board snapshot is invalid")?;

    tracing::debug!(
        "Decoded {}x{} board with {} objects",
        board.width,
        board.height,
        board.game_objects.len()
    );
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diamonds_core::{ObjectId, ObjectKind, Position};

    #[test]
    fn dash_means_stdin() {
        assert_eq!("-".parse::<BoardSource>(), Ok(BoardSource::Stdin));
        assert_eq!(
            "board.json".parse::<BoardSource>(),
            Ok(BoardSource::File(PathBuf::from("board.json")))
        );
    }

    #[test]
    fn decodes_server_shaped_board() {
        let board = decode_board(
            r#"{
                "id": 1,
                "width": 15,
                "height": 15,
                "minimumDelayBetweenMoves": 100,
                "gameObjects": [
                    {"id": 7, "type": "BotGameObject", "position": {"x": 1, "y": 2},
                     "properties": {"diamonds": 3, "inventorySize": 5, "millisecondsLeft": 42000,
                                    "base": {"x": 0, "y": 0}, "name": "stima", "score": 9}},
                    {"id": 8, "type": "DiamondGameObject", "position": {"x": 4, "y": 4},
                     "properties": {"points": 2}},
                    {"id": 9, "type": "TeleportGameObject", "position": {"x": 3, "y": 3},
                     "properties": {"pairId": "10"}},
                    {"id": 10, "type": "TeleportGameObject", "position": {"x": 9, "y": 9},
                     "properties": {"pairId": 9}},
                    {"id": 11, "type": "WallGameObject", "position": {"x": 5, "y": 5}}
                ]
            }"#,
        )
        .expect("board decodes");

        let me = board.bot_named("stima").expect("bot is named");
        assert_eq!(me.carried(), 3);
        assert_eq!(me.properties.base, Some(Position::ORIGIN));
        assert_eq!(me.properties.milliseconds_left, Some(42_000));
        assert_eq!(board.diamonds().next().map(|d| d.points()), Some(2));

        let pairs: Vec<_> = board.teleporters().map(|t| t.properties.pair_id).collect();
        assert_eq!(pairs, vec![Some(ObjectId(10)), Some(ObjectId(9))]);
        assert_eq!(
            board.object(ObjectId(11)).map(|o| o.kind.clone()),
            Some(ObjectKind::Other("WallGameObject".into()))
        );
    }

    #[test]
    fn accepts_data_envelope() {
        let board = decode_board(r#"{"data": {"width": 5, "height": 5, "gameObjects": []}}"#)
            .expect("wrapped board decodes");
        assert_eq!(board.width, 5);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = decode_board(
            r#"{"width": 5, "height": 5, "gameObjects": [
                {"id": 1, "type": "DiamondGameObject", "position": {"x": 0, "y": 0}},
                {"id": 1, "type": "BotGameObject", "position": {"x": 1, "y": 0}}
            ]}"#,
        )
        .expect_err("duplicate ids are rejected");
        assert!(format!("{err:#}").contains("invalid"));
    }
}
