//! Rendering backends and the driver loop that steps the engine

pub mod console;
pub mod frames;

pub use console::ConsoleRenderer;
pub use frames::FrameRenderer;

use crate::error::Result;
use crate::game_of_life::SimulationEngine;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::info;

/// Something that can draw the engine's current generation
pub trait Renderer {
    /// Draw one frame before the engine is stepped
    fn render(&mut self, engine: &SimulationEngine) -> Result<()>;

    /// Called once after the loop stops, with the final generation
    fn finish(&mut self, _engine: &SimulationEngine) -> Result<()> {
        Ok(())
    }
}

/// Why the driver loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    MaxGenerations,
    Stable,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::MaxGenerations => write!(f, "maximum generations reached"),
            StopReason::Stable => write!(f, "population stopped changing"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Pause after each step
    pub frame_delay: Duration,
}

/// Outcome of a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub generations: u64,
    pub steps: u64,
    pub living_cells: usize,
    pub rows: usize,
    pub cols: usize,
    pub reason: StopReason,
    pub elapsed_ms: u128,
}

/// Render and step until the generation bound is hit or the grid stops changing
pub fn run_simulation<R: Renderer + ?Sized>(
    engine: &mut SimulationEngine,
    renderer: &mut R,
    options: &RunOptions,
) -> Result<RunSummary> {
    info!(
        rows = engine.rows(),
        cols = engine.cols(),
        max_generations = ?engine.max_generations(),
        "starting simulation"
    );
    let start = Instant::now();
    let mut steps = 0;

    while !engine.is_max_generations_exceeded() && engine.is_changing() {
        renderer.render(engine)?;
        engine.step();
        steps += 1;

        if !options.frame_delay.is_zero() {
            std::thread::sleep(options.frame_delay);
        }
    }

    renderer.finish(engine)?;

    let reason = if engine.is_max_generations_exceeded() {
        StopReason::MaxGenerations
    } else {
        StopReason::Stable
    };

    let summary = RunSummary {
        generations: engine.generation_count(),
        steps,
        living_cells: engine.current_generation().living_count(),
        rows: engine.rows(),
        cols: engine.cols(),
        reason,
        elapsed_ms: start.elapsed().as_millis(),
    };
    info!(generations = summary.generations, reason = %summary.reason, "simulation stopped");
    Ok(summary)
}
