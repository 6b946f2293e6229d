//! RDS IOPS Calculator - Main entry point
//!
//! Parses the command line, sets up logging, and dispatches to an
//! interactive session, a one-shot calculation, or the engine listing.

use rds_iops_calc::app::{self, CalcOptions, CalcSource, FlagSelection, SessionOptions, SessionOutcome};
use rds_iops_calc::cli::{Cli, Commands};
use rds_iops_calc::{EngineCatalog, IopsCalcError, IopsPolicy, Screen};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Initialize the logger with appropriate settings.
///
/// Logs go to stderr so they never interleave with prompts on stdout.
fn init_logger(default_level: &str) {
    let filter = EnvFilter::try_from_default_env() // Allows RUST_LOG env var to override
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Main application entry point
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logger(cli.log_level());
    debug!(?cli, "CLI arguments parsed");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(IopsCalcError::InputClosed) = e.downcast_ref::<IopsCalcError>() {
                // Ctrl-D at a prompt ends the session like a quit
                info!("Input closed, exiting");
                println!();
                return ExitCode::SUCCESS;
            }
            error!("{:#}", e);
            eprintln!("✗ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let catalog = EngineCatalog::standard();
    let policy = if cli.relaxed_iops {
        IopsPolicy::Relaxed
    } else {
        IopsPolicy::Strict
    };

    match cli.command {
        None => {
            info!("Starting interactive session");
            let options = SessionOptions {
                screen: Screen::detect(cli.no_clear),
                policy,
                save_plan: cli.save_plan.as_deref(),
            };
            let stdin = io::stdin();
            match app::run_interactive(stdin.lock(), io::stdout().lock(), catalog, options)? {
                SessionOutcome::Quit => info!("Session ended at intro"),
                SessionOutcome::Completed { requirements, .. } => {
                    info!(?requirements, "Session complete")
                }
            }
        }
        Some(Commands::Calc {
            config,
            engine,
            storage,
            iops,
            page_size,
            json,
        }) => {
            let source = match config.as_deref() {
                Some(path) => CalcSource::Plan(path),
                None => CalcSource::Flags(FlagSelection {
                    engine: engine.as_deref().unwrap_or_default(),
                    storage: storage.as_deref().unwrap_or_default(),
                    iops: iops.as_deref().unwrap_or_default(),
                    page_size: page_size.as_deref(),
                }),
            };
            let options = CalcOptions {
                policy,
                json,
                save_plan: cli.save_plan.as_deref(),
            };
            app::run_calc(source, io::stdout().lock(), catalog, options)?;
        }
        Some(Commands::Engines { json }) => {
            let mut stdout = io::stdout().lock();
            app::list_engines(&mut stdout, catalog, json)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
