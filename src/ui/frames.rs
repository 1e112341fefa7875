//! Plain-text renderer that prints each generation as snapshot text

use super::Renderer;
use crate::error::Result;
use crate::game_of_life::SimulationEngine;
use std::io::Write;

pub struct FrameRenderer<W: Write> {
    out: W,
}

impl<W: Write> FrameRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for FrameRenderer<W> {
    fn render(&mut self, engine: &SimulationEngine) -> Result<()> {
        writeln!(self.out, "Generation {}:", engine.generation_count())?;
        self.out.write_all(engine.to_snapshot().as_bytes())?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self, _engine: &SimulationEngine) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
