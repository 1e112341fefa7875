//! Terminal renderer: a bordered grid redrawn in place

use super::Renderer;
use crate::error::Result;
use crate::game_of_life::{Grid, SimulationEngine};
use std::io::Write;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub struct ConsoleRenderer<W: Write> {
    out: W,
    alive_glyph: char,
    border_glyph: char,
    clear_screen: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, alive_glyph: char, border_glyph: char) -> Self {
        Self {
            out,
            alive_glyph,
            border_glyph,
            clear_screen: true,
        }
    }

    /// Append frames instead of clearing the terminal between them
    pub fn without_clearing(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Draw `grid` inside a one-cell border; dead cells are blank
    pub fn draw_grid(&self, grid: &Grid) -> String {
        let border_row: String = std::iter::repeat(self.border_glyph)
            .take(grid.cols() + 2)
            .collect();

        let mut frame = String::with_capacity((grid.rows() + 2) * (grid.cols() + 3));
        frame.push_str(&border_row);
        frame.push('\n');
        for row in grid.cells().chunks(grid.cols()) {
            frame.push(self.border_glyph);
            frame.extend(
                row.iter()
                    .map(|&alive| if alive { self.alive_glyph } else { ' ' }),
            );
            frame.push(self.border_glyph);
            frame.push('\n');
        }
        frame.push_str(&border_row);
        frame.push('\n');
        frame
    }

    fn write_frame(&mut self, engine: &SimulationEngine) -> Result<()> {
        if self.clear_screen {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        let frame = self.draw_grid(engine.current_generation());
        self.out.write_all(frame.as_bytes())?;
        writeln!(
            self.out,
            "Generation {} | living {}",
            engine.generation_count(),
            engine.current_generation().living_count()
        )?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, engine: &SimulationEngine) -> Result<()> {
        self.write_frame(engine)
    }

    fn finish(&mut self, engine: &SimulationEngine) -> Result<()> {
        self.write_frame(engine)
    }
}
