//! Print the next move for a bot on a board snapshot.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use diamonds_core::{Board, CardinalDirection, Move, ObjectId, SnapshotError};
use diamonds_runtime::MoveProvider;
use serde::Serialize;

use super::{BotArgs, EngineArgs};
use crate::config::process_env;
use crate::snapshot::{BoardSource, read_board};

/// Print the next move for a bot on a board snapshot
#[derive(Parser)]
pub struct Decide {
    /// Board snapshot as JSON (`-` reads stdin)
    #[arg(value_name = "BOARD")]
    board: BoardSource,

    #[command(flatten)]
    bot: BotArgs,

    #[command(flatten)]
    engine: EngineArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Direction name, or STAY
    Text,
    /// JSON object with the bot id, direction and delta, or an error code
    Json,
}

#[derive(Serialize)]
struct MoveOutput {
    bot: ObjectId,
    direction: Option<CardinalDirection>,
    delta: (i32, i32),
}

/// JSON failure report; `error` is the variant's stable code.
#[derive(Serialize)]
struct ErrorOutput {
    error: &'static str,
    message: String,
}

impl Decide {
    pub fn execute(self) -> Result<()> {
        let stdout = std::io::stdout();
        self.run(&mut stdout.lock(), process_env)
    }

    /// Decides and prints the move, reading `DIAMONDS_*` variables through `env`.
    ///
    /// In JSON mode snapshot and bot lookup failures are also written to `out`
    /// as `{"error": CODE, "message": ...}` before being returned.
    pub fn run<F>(&self, out: &mut impl Write, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let board = match read_board(&self.board) {
            Ok(board) => board,
            Err(err) => {
                if let Some(snapshot) = err.downcast_ref::<SnapshotError>() {
                    self.report(out, snapshot.error_code(), format!("{err:#}"))?;
                }
                return Err(err);
            }
        };
        let config = self.engine.load_config(env)?;
        let mut engine = self.engine.build_bot(config);

        let (bot_id, mv) = match self.next_move(&board, &mut engine) {
            Ok(decided) => decided,
            Err(err) => {
                self.report(out, err.error_code(), err.to_string())?;
                return Err(err.into());
            }
        };

        tracing::info!("Bot {} moves {}", bot_id, mv);

        match self.format {
            OutputFormat::Text => writeln!(out, "{mv}")?,
            OutputFormat::Json => {
                let output = MoveOutput {
                    bot: bot_id,
                    direction: mv.direction(),
                    delta: mv.delta(),
                };
                let json = serde_json::to_string(&output).context("Failed to encode move")?;
                writeln!(out, "{json}")?;
            }
        }

        Ok(())
    }

    fn next_move(
        &self,
        board: &Board,
        engine: &mut impl MoveProvider,
    ) -> diamonds_runtime::Result<(ObjectId, Move)> {
        let bot_id = self.bot.bot_ref().resolve(board)?.id;
        let mv = engine.next_move(bot_id, board)?;
        Ok((bot_id, mv))
    }

    fn report(&self, out: &mut impl Write, error: &'static str, message: String) -> Result<()> {
        if self.format == OutputFormat::Json {
            let json = serde_json::to_string(&ErrorOutput { error, message })
                .context("Failed to encode error")?;
            writeln!(out, "{json}")?;
        }
        Ok(())
    }
}
