//! Bar charts of batch results.

use crate::simulation::BatchReport;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{BarChart, Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use tracing::{debug, instrument};

const TEXT_BAR_WIDTH: u64 = 40;

fn bars(report: &BatchReport) -> [(&'static str, u64); 3] {
    let tally = report.tally();
    [
        ("X wins", *tally.x_wins()),
        ("O wins", *tally.o_wins()),
        ("Draws", *tally.draws()),
    ]
}

/// Renders one report as a bar chart into `area`.
pub fn draw_report(frame: &mut Frame, area: Rect, report: &BatchReport) {
    let data = bars(report);
    let title = format!(" {} ({} games) ", report.matchup(), report.games());

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .data(&data[..])
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(chart, area);
}

/// Renders every report side by side with a help line underneath.
pub fn draw_reports(frame: &mut Frame, reports: &[BatchReport]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(frame.area());

    if !reports.is_empty() {
        let count = reports.len() as u32;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
            .split(rows[0]);
        for (report, area) in reports.iter().zip(columns.iter()) {
            draw_report(frame, *area, report);
        }
    }

    let help = Paragraph::new("Press any key to exit")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(help, rows[1]);
}

/// Shows the reports in the alternate screen until a key is pressed.
#[instrument(skip(reports), fields(count = reports.len()))]
pub fn show_reports(reports: &[BatchReport]) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = wait_for_key(&mut terminal, reports);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn wait_for_key(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    reports: &[BatchReport],
) -> Result<()> {
    loop {
        terminal.draw(|f| draw_reports(f, reports))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                debug!(code = ?key.code, "Chart closed");
                return Ok(());
            }
        }
    }
}

/// Plain-text bar chart, scaled so the largest bar is 40 characters.
pub fn text_chart(report: &BatchReport) -> String {
    let data = bars(report);
    let max = data.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1);

    let mut out = format!("{}\n", report.matchup());
    for (label, count) in data {
        let width = (count * TEXT_BAR_WIDTH).div_ceil(max) as usize;
        out.push_str(&format!("{:<7}| {} {}\n", label, "#".repeat(width), count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchup::Matchup;
    use crate::tally::Tally;
    use negamax_tictactoe::{Outcome, Player};

    fn report() -> BatchReport {
        let mut tally = Tally::new();
        for _ in 0..3 {
            tally.record(Outcome::Winner(Player::X));
        }
        tally.record(Outcome::Draw);
        BatchReport::new(Matchup::NegamaxVsRandom, tally, 4, 2, 9, 0.1)
    }

    #[test]
    fn test_text_chart_scaling() {
        let chart = text_chart(&report());
        assert!(chart.starts_with("Negamax AI vs Random\n"));
        assert!(chart.contains(&format!("X wins | {} 3", "#".repeat(40))));
        assert!(chart.contains("O wins |  0"));
        assert!(chart.contains(&format!("Draws  | {} 1", "#".repeat(14))));
    }
}
