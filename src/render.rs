use colored::{Color, Colorize};
use itertools::Itertools;

use crate::stats::DashboardStats;
use crate::utils::format_thousands;

/// Viewports at least this wide get the 2x2 grid; anything narrower stacks
/// the cells in one column.
pub const WIDE_BREAKPOINT: usize = 72;

const MIN_GRID_WIDTH: usize = 40;
const MAX_GRID_WIDTH: usize = 100;

/// One stat slot of the dashboard grid.
#[derive(Debug, Clone)]
pub struct StatCell {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
    pub color: Color,
    pub sub: &'static str,
}

/// The four fixed display slots. The reciprocal rate stays off the grid.
pub fn build_cells(stats: &DashboardStats) -> Vec<StatCell> {
    vec![
        StatCell {
            label: "Total Distributed",
            value: format_thousands(stats.total_distributed, 2),
            icon: "◆",
            color: Color::Green,
            sub: "VOI",
        },
        StatCell {
            label: "Unique Contributors",
            value: format_thousands(stats.unique_contributors as f64, 0),
            icon: "●",
            color: Color::Cyan,
            sub: "addresses",
        },
        StatCell {
            label: "Circulating Supply",
            value: format_thousands(stats.circulating_supply, 2),
            icon: "◈",
            color: Color::Yellow,
            sub: "tokens",
        },
        StatCell {
            label: "Treasury Value",
            value: format_thousands(stats.treasury_usd, 2),
            icon: "▣",
            color: Color::Magenta,
            sub: "USD",
        },
    ]
}

fn border_row(left: char, mid: char, right: char, cell_width: usize, columns: usize) -> String {
    let bar = "─".repeat(cell_width);
    let mut row = String::new();
    row.push(left);
    for i in 0..columns {
        if i > 0 {
            row.push(mid);
        }
        row.push_str(&bar);
    }
    row.push(right);
    row
}

// Returns the styled text plus its visible length, so padding ignores the
// color escape codes.
fn cell_line(cell: &StatCell, line: usize) -> (String, usize) {
    match line {
        0 => {
            let plain = format!(" {} {}", cell.icon, cell.label);
            let styled = format!(" {} {}", cell.icon.color(cell.color), cell.label);
            (styled, plain.chars().count())
        }
        _ => {
            let plain = format!("   {} {}", cell.value, cell.sub);
            let styled = format!(
                "   {} {}",
                cell.value.color(cell.color).bold(),
                cell.sub.dimmed()
            );
            (styled, plain.chars().count())
        }
    }
}

fn pad(styled: &str, visible: usize, width: usize) -> String {
    format!("{}{}", styled, " ".repeat(width.saturating_sub(visible)))
}

/// Lay the cells out as a bordered grid: rounded corners only at the four
/// extremes, divider lines only between adjacent cells. Width is injected by
/// the caller so the layout is testable without a terminal.
pub fn render_grid(cells: &[StatCell], width: usize) -> String {
    let width = width.clamp(MIN_GRID_WIDTH, MAX_GRID_WIDTH);
    let columns = if width >= WIDE_BREAKPOINT { 2 } else { 1 };
    let cell_width = (width - (columns + 1)) / columns;

    let mut lines: Vec<String> = Vec::new();
    lines.push(border_row('╭', '┬', '╮', cell_width, columns));
    for (i, row) in cells.chunks(columns).enumerate() {
        if i > 0 {
            lines.push(border_row('├', '┼', '┤', cell_width, columns));
        }
        for line_idx in 0..2 {
            let mut line = String::from("│");
            for slot in 0..columns {
                match row.get(slot) {
                    Some(cell) => {
                        let (styled, visible) = cell_line(cell, line_idx);
                        line.push_str(&pad(&styled, visible, cell_width));
                    }
                    None => line.push_str(&" ".repeat(cell_width)),
                }
                line.push('│');
            }
            lines.push(line);
        }
    }
    lines.push(border_row('╰', '┴', '╯', cell_width, columns));
    lines.iter().join("\n")
}
