//! Show how the next move was reached.
//!
//! Prints the bot's situation, the top-ranked candidates and the final
//! decision with its goal and avoided cells.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use console::style;
use diamonds_core::GameObject;
use diamonds_runtime::{AiContext, Decision, RuntimeError, rank_candidates};

use super::{BotArgs, EngineArgs};
use crate::config::process_env;
use crate::snapshot::{BoardSource, read_board};

/// Show how the next move was reached
#[derive(Parser)]
pub struct Explain {
    /// Board snapshot as JSON (`-` reads stdin)
    #[arg(value_name = "BOARD")]
    board: BoardSource,

    #[command(flatten)]
    bot: BotArgs,

    #[command(flatten)]
    engine: EngineArgs,

    /// Number of ranked candidates to list
    #[arg(long, value_name = "N", default_value_t = 5)]
    top: usize,
}

impl Explain {
    pub fn execute(self) -> Result<()> {
        let stdout = std::io::stdout();
        self.run(&mut stdout.lock(), process_env)
    }

    /// Prints the explanation, reading `DIAMONDS_*` variables through `env`.
    pub fn run<F>(&self, out: &mut impl Write, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let board = read_board(&self.board)?;
        let config = self.engine.load_config(env)?;
        let me = self.bot.bot_ref().resolve(&board)?;
        let ctx = AiContext::try_new(me, &board, &config)
            .ok_or(RuntimeError::MissingPosition(me.id))?;

        print_situation(out, &ctx)?;
        print_candidates(out, &ctx, self.top)?;

        let mut engine = self.engine.build_bot(config.clone());
        let decision = engine.decide_traced(me, &board);
        print_decision(out, &decision)?;

        Ok(())
    }
}

fn print_situation(out: &mut impl Write, ctx: &AiContext<'_>) -> Result<()> {
    let time_left = match ctx.me.properties.milliseconds_left {
        Some(ms) => format!("{:.1}s", ms as f64 / 1000.0),
        None => "unknown".to_owned(),
    };
    let base = ctx
        .base()
        .map_or_else(|| "unknown".to_owned(), |base| base.to_string());

    writeln!(
        out,
        "{} {} at {}",
        style("Bot:").bold().cyan(),
        describe(ctx.me),
        ctx.position
    )?;
    writeln!(
        out,
        "{} {}/{}",
        style("Carrying:").bold().cyan(),
        ctx.carried(),
        ctx.capacity()
    )?;
    writeln!(out, "{} {}", style("Base:").bold().cyan(), base)?;
    writeln!(out, "{} {}", style("Time left:").bold().cyan(), time_left)?;
    writeln!(
        out,
        "{} {} diamonds, {} rivals, {} teleporters",
        style("Board:").bold().cyan(),
        ctx.board.diamonds().count(),
        ctx.rivals().len(),
        ctx.teleporters.len()
    )?;
    writeln!(out)?;
    Ok(())
}

fn print_candidates(out: &mut impl Write, ctx: &AiContext<'_>, top: usize) -> Result<()> {
    let ranked = rank_candidates(ctx);
    writeln!(
        out,
        "{} ({} total)",
        style("Candidates").bold().underlined(),
        ranked.len()
    )?;

    if ranked.is_empty() {
        writeln!(out, "  {}", style("none").dim())?;
    }
    for (rank, candidate) in ranked.iter().take(top).enumerate() {
        let via = match candidate.entry_position() {
            Some(entry) => format!(" via teleporter at {entry}"),
            None => String::new(),
        };
        writeln!(
            out,
            "  {}. {:?} {} score {} (distance {}, points {}){}",
            rank + 1,
            candidate.kind,
            describe(candidate.target),
            style(format!("{:.2}", candidate.score)).yellow(),
            candidate.distance,
            candidate.points,
            via
        )?;
    }
    writeln!(out)?;
    Ok(())
}

fn print_decision(out: &mut impl Write, decision: &Decision) -> Result<()> {
    let goal = decision
        .goal
        .map_or_else(|| "none".to_owned(), |goal| goal.to_string());
    let avoid: Vec<String> = decision.avoid.iter().map(ToString::to_string).collect();

    writeln!(
        out,
        "{} {}",
        style("Decision:").bold().green(),
        decision.reason.label()
    )?;
    writeln!(out, "{} {}", style("Goal:").bold().green(), goal)?;
    writeln!(
        out,
        "{} {}",
        style("Avoiding:").bold().green(),
        if avoid.is_empty() {
            "nothing".to_owned()
        } else {
            avoid.join(" ")
        }
    )?;
    writeln!(
        out,
        "{} {}",
        style("Move:").bold().green(),
        style(decision.movement).bold()
    )?;
    Ok(())
}

fn describe(object: &GameObject) -> String {
    match object.name() {
        Some(name) => format!("{} '{}'", object.id, name),
        None => object.id.to_string(),
    }
}
