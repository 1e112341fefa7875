//! Configuration settings for the Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub randomize: bool,
    pub max_generations: Option<u64>,
    /// Fixed seed for the initial grid; `None` draws from the OS
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub renderer: RendererKind,
    pub frame_delay_ms: u64,
    pub alive_glyph: char,
    pub border_glyph: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererKind {
    /// Redraw a bordered grid in place in the terminal
    Console,
    /// Print every generation as snapshot text
    Frames,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub initial_state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub final_state_file: Option<PathBuf>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                rows: 24,
                cols: 32,
                randomize: true,
                max_generations: None,
                seed: None,
            },
            display: DisplayConfig {
                renderer: RendererKind::Console,
                frame_delay_ms: 200,
                alive_glyph: '+',
                border_glyph: '#',
            },
            input: InputConfig {
                initial_state_file: None,
            },
            output: OutputConfig {
                final_state_file: None,
                format: OutputFormat::Text,
            },
        }
    }
}

impl DisplayConfig {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        // Dimensions come from the snapshot when one is given
        if self.input.initial_state_file.is_none()
            && (self.simulation.rows == 0 || self.simulation.cols == 0)
        {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.simulation.rows,
                self.simulation.cols
            );
        }

        if self.simulation.max_generations == Some(0) {
            anyhow::bail!("Maximum generations must be positive");
        }

        if let Some(ref input) = self.input.initial_state_file {
            if !input.exists() {
                anyhow::bail!("Initial state file does not exist: {}", input.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.simulation.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.simulation.cols = cols;
        }
        if let Some(max_generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(max_generations);
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(ref input) = cli_overrides.input_file {
            self.input.initial_state_file = Some(input.clone());
        }
        if let Some(ref output) = cli_overrides.output_file {
            self.output.final_state_file = Some(output.clone());
        }
        if let Some(delay) = cli_overrides.frame_delay_ms {
            self.display.frame_delay_ms = delay;
        }
        if let Some(renderer) = cli_overrides.renderer {
            self.display.renderer = renderer;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub max_generations: Option<u64>,
    pub seed: Option<u64>,
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub frame_delay_ms: Option<u64>,
    pub renderer: Option<RendererKind>,
    pub format: Option<OutputFormat>,
}
