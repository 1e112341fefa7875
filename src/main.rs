//! Command-line front end for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use game_of_life::{
    config::{CliOverrides, OutputFormat, RendererKind, Settings},
    game_of_life::{create_example_grids, load_grid_from_file, SimulationEngine},
    ui::{run_simulation, ConsoleRenderer, FrameRenderer, Renderer, RunOptions},
    utils::{GridFormatter, Tone},
};
use rand::{rngs::StdRng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life on a bounded grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation until it stabilizes or hits the generation limit
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of rows (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Number of columns (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Initial state snapshot (overrides config and grid size)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Stop once this generation is reached (overrides config)
        #[arg(short, long)]
        max_generations: Option<u64>,

        /// Seed for the random initial grid (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Delay between frames in milliseconds (overrides config)
        #[arg(short, long)]
        delay_ms: Option<u64>,

        /// Print every generation as snapshot text instead of redrawing
        #[arg(long)]
        frames: bool,

        /// Write the final generation to this file (overrides config)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Summary output format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Create a default configuration and example patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Show a snapshot with coordinates and statistics
    Inspect {
        /// Snapshot file
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            rows,
            cols,
            input,
            max_generations,
            seed,
            delay_ms,
            frames,
            save,
            format,
        } => {
            let overrides = CliOverrides {
                rows,
                cols,
                max_generations,
                seed,
                input_file: input,
                output_file: save,
                frame_delay_ms: delay_ms,
                renderer: frames.then_some(RendererKind::Frames),
                format: format.map(OutputFormat::from),
            };
            run_command(&config, &overrides)
        }
        Commands::Setup { directory, force } => setup_command(&directory, force),
        Commands::Inspect { input } => inspect_command(&input),
    }
}

/// Log to stderr so frames on stdout stay clean
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        warn!(path = %config_path.display(), "config file not found, using defaults");
        Ok(Settings::default())
    }
}

/// Build the engine from a snapshot if one is configured, else a fresh grid
fn build_engine(settings: &Settings) -> Result<SimulationEngine> {
    let sim = &settings.simulation;

    if let Some(ref input) = settings.input.initial_state_file {
        let grid = load_grid_from_file(input)
            .with_context(|| format!("Failed to load initial state from {}", input.display()))?;
        return Ok(SimulationEngine::from_grid(grid, sim.max_generations));
    }

    let engine = match sim.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            SimulationEngine::with_rng(sim.rows, sim.cols, sim.randomize, sim.max_generations, &mut rng)
        }
        None => SimulationEngine::new(sim.rows, sim.cols, sim.randomize, sim.max_generations),
    };
    engine.context("Failed to create simulation engine")
}

fn run_command(config_path: &Path, overrides: &CliOverrides) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let mut engine = build_engine(&settings)?;
    info!(rows = engine.rows(), cols = engine.cols(), "engine ready");

    let display = &settings.display;
    let mut renderer: Box<dyn Renderer> = match display.renderer {
        RendererKind::Console => Box::new(ConsoleRenderer::new(
            std::io::stdout(),
            display.alive_glyph,
            display.border_glyph,
        )),
        RendererKind::Frames => Box::new(FrameRenderer::new(std::io::stdout())),
    };
    let options = RunOptions {
        frame_delay: display.frame_delay(),
    };

    let summary = run_simulation(&mut engine, renderer.as_mut(), &options)
        .context("Simulation failed")?;

    match settings.output.format {
        OutputFormat::Text => {
            println!("{}", Tone::Success.paint("Simulation finished"));
            print!("{}", GridFormatter::format_summary(&summary));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    if let Some(ref path) = settings.output.final_state_file {
        engine
            .save(path)
            .with_context(|| format!("Failed to save final state to {}", path.display()))?;
        eprintln!(
            "{}",
            Tone::Info.paint(&format!("Final state saved to {}", path.display()))
        );
    }

    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    println!("{}", Tone::Info.paint("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_grids(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("\n{}", Tone::Success.paint("Setup complete!"));
    println!(
        "Try: game_of_life run --input {} --max-generations 40",
        patterns_dir.join("glider.txt").display()
    );

    Ok(())
}

fn inspect_command(input: &Path) -> Result<()> {
    let grid = load_grid_from_file(input)
        .with_context(|| format!("Failed to load snapshot from {}", input.display()))?;
    let engine = SimulationEngine::from_grid(grid, None);
    let grid = engine.current_generation();

    println!("Grid ({}x{}):", grid.rows(), grid.cols());
    println!("{}", GridFormatter::format_grid_with_coords(grid));
    println!("Grid Statistics:");
    println!("  Living cells: {}", grid.living_count());
    println!("  Density: {:.1}%", grid.density() * 100.0);

    if engine.compute_next_generation() == *grid {
        println!("  {}", Tone::Warning.paint("Fixed point: the next generation is identical"));
    } else {
        println!("  Still evolving");
    }

    Ok(())
}
