//! Line-oriented console front end: single games, the menu, batch reports.

use crate::chart::text_chart;
use crate::matchup::Matchup;
use crate::orchestrator::{GameEvent, GameRecord, Orchestrator};
use crate::simulation::BatchReport;
use anyhow::{Context, Result};
use negamax_tictactoe::Outcome;
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

/// Plays one game of `matchup`, printing the board after every move.
#[instrument(skip(out))]
pub fn play_to_writer<W: Write>(matchup: Matchup, seed: u64, out: &mut W) -> Result<GameRecord> {
    writeln!(out, "{}", matchup)?;
    let mut orchestrator = Orchestrator::from_matchup(matchup, seed);

    let mut write_err = None;
    let record = orchestrator.run(|event| {
        if write_err.is_some() {
            return;
        }
        if let Err(e) = write_event(out, event) {
            write_err = Some(e);
        }
    })?;
    if let Some(e) = write_err {
        return Err(e.into());
    }

    writeln!(out, "Game ended after {} moves.", record.num_moves())?;
    match record.outcome() {
        Outcome::Winner(player) => writeln!(out, "The winner was: Player {}.", player)?,
        Outcome::Draw => writeln!(out, "It's a draw")?,
    }
    info!(outcome = %record.outcome(), moves = record.num_moves(), "Game finished");
    Ok(record)
}

fn write_event<W: Write>(out: &mut W, event: &GameEvent) -> std::io::Result<()> {
    match event {
        GameEvent::MoveMade {
            player,
            position,
            board,
        } => {
            let number = 9 - board.empty_positions().len();
            writeln!(out, "Move {}: {} plays {}", number, player, position.label())?;
            writeln!(out, "{}", board.render())?;
            writeln!(out)
        }
        GameEvent::GameOver { .. } => Ok(()),
    }
}

/// Prompts for a matchup on `input` and plays it.
///
/// Returns `Ok(None)` when the choice is not 1-3.
#[instrument(skip(input, out))]
pub fn run_menu<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    seed: u64,
) -> Result<Option<GameRecord>> {
    write!(out, "{}", Matchup::menu())?;
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read menu choice")?;

    let choice = line.trim().parse::<u32>().ok().and_then(Matchup::from_choice);
    match choice {
        Some(matchup) => play_to_writer(matchup, seed, out).map(Some),
        None => {
            warn!(input = %line.trim(), "Invalid menu choice");
            writeln!(out, "Invalid choice. Exiting.")?;
            Ok(None)
        }
    }
}

/// Prints a batch report, optionally followed by a text chart.
pub fn print_report<W: Write>(out: &mut W, report: &BatchReport, chart: bool) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Results after {} games ({}):",
        report.games(),
        report.matchup()
    )?;
    writeln!(out, "{}", report.summary())?;
    if chart {
        writeln!(out)?;
        write!(out, "{}", text_chart(report))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_play_prints_each_move() {
        let mut out = Vec::new();
        let record = play_to_writer(Matchup::RandomVsRandom, 1, &mut out).expect("Game should run");
        let text = String::from_utf8(out).expect("UTF-8 output");

        assert!(text.starts_with("Random vs Random\n"));
        assert!(text.contains("Move 1: X plays"));
        assert!(text.contains(&format!("Game ended after {} moves.", record.num_moves())));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let mut input = Cursor::new("7\n");
        let mut out = Vec::new();
        let record = run_menu(&mut input, &mut out, 0).expect("Menu should not fail");
        let text = String::from_utf8(out).expect("UTF-8 output");

        assert!(record.is_none());
        assert!(text.contains("Choose a combination to play:"));
        assert!(text.contains("Invalid choice. Exiting."));
    }
}
