//! Plain-text crosstable rendering

use championship_core::{CellView, Championship, Simulation, Standings};

use crate::config::ShellConfig;

const HIGHLIGHT: &str = "\x1b[1;33m";
const RESET: &str = "\x1b[0m";

/// Render the standings as a fixed-width crosstable
pub fn render_standings(standings: &Standings, title: Option<&str>, config: &ShellConfig) -> String {
    let mut out = String::new();
    if let Some(title) = title {
        out.push_str(&format!("=== {} ===\n", title));
    }
    out.push_str(&format!("Number of players: {}", standings.player_count));
    if standings.simulation_count > 0 {
        out.push_str(&format!(" ({} simulated)", standings.simulation_count));
    }
    out.push_str("\n\n");

    // Header: each result column is labelled with that player's roster number
    out.push_str(&format!("{:>4} {:>3}  {:<w$}", "Pos", "No", "Name", w = config.name_width));
    for row in &standings.rows {
        out.push_str(&format!("{:<w$}", format!("#{}", row.number), w = config.cell_width));
    }
    out.push_str(&format!("{:>10}{:>10}\n", "Score", "TB"));
    let width = 10 + config.name_width + config.cell_width * standings.rows.len() + 20;
    out.push_str(&"-".repeat(width));
    out.push('\n');

    for row in &standings.rows {
        out.push_str(&format!(
            "{:>4} {:>3}  {:<w$}",
            row.rank,
            row.number,
            truncate(&row.name, config.name_width),
            w = config.name_width
        ));
        for cell in &row.cells {
            out.push_str(&render_cell(cell, config));
        }
        out.push_str(&format!(
            "{:>10}{:>10}\n",
            format_points(row.score),
            format_points(row.tie_break)
        ));
    }
    out
}

/// One padded cell; simulated entries are highlighted when color is on
fn render_cell(cell: &CellView, config: &ShellConfig) -> String {
    let (plain, styled) = match cell {
        CellView::Myself => ("X".to_string(), "X".to_string()),
        CellView::NotScheduled => ("-".to_string(), "-".to_string()),
        CellView::Results { results, simulated } => {
            let mut plain = Vec::with_capacity(results.len());
            let mut styled = Vec::with_capacity(results.len());
            for (result, &is_simulated) in results.iter().zip(simulated) {
                // Without color, simulated entries are marked with a trailing '*'
                let text = if is_simulated && !config.color {
                    format!("{result}*")
                } else {
                    result.to_string()
                };
                plain.push(text.clone());
                styled.push(if is_simulated && config.color {
                    format!("{HIGHLIGHT}{text}{RESET}")
                } else {
                    text
                });
            }
            (plain.join(" "), styled.join(" "))
        }
    };

    let visible = plain.chars().count();
    let padding = config.cell_width.saturating_sub(visible).max(1);
    format!("{styled}{}", " ".repeat(padding))
}

/// Active simulations, numbered in push order
pub fn render_simulations(championship: &Championship) -> String {
    let simulations = championship.list_simulations();
    if simulations.is_empty() {
        return "No active simulations\n".to_string();
    }
    let mut out = String::new();
    for (i, simulation) in simulations.iter().enumerate() {
        out.push_str(&format!("{:>3}. {}\n", i + 1, championship.describe(simulation)));
    }
    out
}

pub fn render_simulation(championship: &Championship, verb: &str, simulation: &Simulation) -> String {
    format!("{}: {}", verb, championship.describe(simulation))
}

/// `2` rather than `2.0`, but keep `1.5` and `0.25`
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{:.0}", points)
    } else {
        format!("{}", points)
    }
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() < width {
        name.to_string()
    } else {
        // Keep one column of separation before the first cell
        name.chars().take(width.saturating_sub(1)).collect()
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
