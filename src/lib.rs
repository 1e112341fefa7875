//! Conway's Game of Life on a bounded grid
//!
//! The [`SimulationEngine`] holds the current and previous generation, steps
//! the B3/S23 rule and reads/writes the plain-text snapshot format. Rendering
//! backends and the driver loop live in [`ui`].

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod ui;
pub mod utils;

pub use config::Settings;
pub use error::{LifeError, Result};
pub use game_of_life::{Grid, SimulationEngine};
pub use ui::{run_simulation, Renderer, RunOptions, RunSummary, StopReason};
