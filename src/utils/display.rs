//! Display and output formatting utilities

use crate::game_of_life::Grid;
use crate::ui::RunSummary;
use std::io::IsTerminal;

/// Format grids and run results for the terminal
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.rows() * (grid.cols() + 1) * 3);
        for row in grid.cells().chunks(grid.cols()) {
            output.extend(row.iter().map(|&alive| if alive { '█' } else { '·' }));
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.cols() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..grid.rows() {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.cols() {
                output.push_str(if grid.get(y, x) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Human-readable run summary
    pub fn format_summary(summary: &RunSummary) -> String {
        let mut output = String::new();
        output.push_str(&format!("Grid: {}x{}\n", summary.rows, summary.cols));
        output.push_str(&format!("Generations: {}\n", summary.generations));
        output.push_str(&format!("Living cells: {}\n", summary.living_cells));
        output.push_str(&format!("Stopped: {}\n", summary.reason));
        output.push_str(&format!(
            "Elapsed: {:.3}s\n",
            summary.elapsed_ms as f64 / 1000.0
        ));
        output
    }
}

/// Tone of a CLI status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Info,
}

impl Tone {
    fn ansi_code(self) -> u8 {
        match self {
            Tone::Success => 32,
            Tone::Warning => 33,
            Tone::Info => 34,
        }
    }

    /// Color `text` for this tone when stdout is a color-capable terminal
    pub fn paint(self, text: &str) -> String {
        if color_enabled() {
            format!("\x1b[{}m{}\x1b[0m", self.ansi_code(), text)
        } else {
            text.to_string()
        }
    }
}

fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
        && std::env::var("TERM").map_or(true, |term| term != "dumb")
        && std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::StopReason;

    #[test]
    fn test_grid_formatting() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        let compact = GridFormatter::format_grid_compact(&grid);
        assert_eq!(compact, "█·█\n·█·\n█·█\n");

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1 ··██··"));
    }

    #[test]
    fn test_summary_formatting() {
        let summary = RunSummary {
            generations: 12,
            steps: 11,
            living_cells: 7,
            rows: 4,
            cols: 5,
            reason: StopReason::Stable,
            elapsed_ms: 1500,
        };
        let text = GridFormatter::format_summary(&summary);
        assert!(text.contains("Grid: 4x5"));
        assert!(text.contains("Generations: 12"));
        assert!(text.contains("population stopped changing"));
        assert!(text.contains("Elapsed: 1.500s"));
    }

    #[test]
    fn test_tone_paint_keeps_text() {
        for tone in [Tone::Success, Tone::Warning, Tone::Info] {
            let painted = tone.paint("done");
            assert!(painted == "done" || painted.ends_with("done\x1b[0m"));
        }
    }
}
