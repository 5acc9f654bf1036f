//! Console Game of Life
//!
//! Started without arguments the world is filled at random; with one
//! argument it is read from a world file.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use game_of_life::{
    config::{CliOverrides, DisplayMode, Settings},
    run_simulation,
    simulation::{FixedDelay, TerminalRenderer},
    utils::{usage, ColorOutput},
    ExitStatus, Rule, WorldSource,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "game_of_life")]
#[command(about = "Console Game of Life")]
#[command(version = "0.1.0")]
struct Cli {
    /// World file to start from; a random world is used when omitted
    world: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Seed for the random world (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Rule variant (overrides config)
    #[arg(short, long, value_enum)]
    rule: Option<Rule>,

    /// How generations are drawn (overrides config)
    #[arg(short, long, value_enum)]
    display: Option<DisplayMode>,

    /// Do not pause between generations
    #[arg(long)]
    no_delay: bool,

    /// Write a JSON run summary here once the world converges
    #[arg(long)]
    report: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitStatus::Success.into();
        }
        Err(err) => {
            let _ = err.print();
            let program = std::env::args().next().unwrap_or_else(|| "game_of_life".to_string());
            eprintln!("{}", usage(&program, Settings::default().world.size));
            return ExitStatus::InvalidArgs.into();
        }
    };

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitStatus::Success.into(),
        Err(err) => {
            eprintln!("{}", ColorOutput::error(&format!("{:#}", err)));
            ExitStatus::from_error(&err).into()
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "game_of_life=debug" } else { "game_of_life=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let mut settings = if cli.config.exists() {
        Settings::from_file(&cli.config)
            .with_context(|| format!("Failed to load config from {}", cli.config.display()))?
    } else {
        debug!(path = %cli.config.display(), "config file not found, using defaults");
        Settings::default()
    };

    // Apply CLI overrides
    settings.merge_with_cli(&CliOverrides {
        seed: cli.seed,
        rule: cli.rule,
        no_delay: cli.no_delay,
        display_mode: cli.display,
    });

    let source = match cli.world {
        Some(path) => WorldSource::File(path),
        None => WorldSource::Random {
            seed: settings.simulation.seed,
        },
    };
    info!(?source, size = settings.world.size, rule = %settings.simulation.rule, "starting");

    let renderer = TerminalRenderer::new(std::io::stdout().lock(), settings.display.mode);
    let pacer = FixedDelay(settings.simulation.delay());
    let report = run_simulation(&settings, &source, renderer, pacer)?;

    println!("{}", ColorOutput::success(&format!(
        "World converged at generation {} ({} living cells)",
        report.generations, report.final_living_cells
    )));

    if let Some(path) = cli.report {
        report.save_to_file(&path)?;
        println!("{}", ColorOutput::info(&format!("Report saved to {}", path.display())));
    }

    Ok(())
}
