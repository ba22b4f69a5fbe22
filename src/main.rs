//! jsonmark - JSON decoding micro-benchmark harness
//!
//! `jsonmark <benchmark> <filename>` prints the accumulated checksum and
//! nothing else on stdout.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;

use jsonmark::cli::{Cli, Command};
use jsonmark::config::Config;
use jsonmark::driver::BenchmarkDriver;
use jsonmark::errors::{exit_codes, get_exit_code};
use jsonmark::generator::generate_file;
use jsonmark::logger::setup_logging;
use jsonmark::strategy::Registry;

/// Package version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            let _ = err.print();
            return ExitCode::from(exit_codes::USAGE as u8);
        }
    };

    // Setup logging
    let _guard = match setup_logging(&cli) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::from(exit_codes::USAGE as u8);
        }
    };

    debug!(version = VERSION, "jsonmark starting");

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(get_exit_code(&err) as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let registry = Registry::standard()?;

    match &cli.command {
        Some(Command::List) => {
            for strategy in registry.iter() {
                match strategy.caveat() {
                    Some(caveat) => println!(
                        "{:<28} {} [{}]",
                        strategy.name(),
                        strategy.description(),
                        caveat
                    ),
                    None => println!("{:<28} {}", strategy.name(), strategy.description()),
                }
            }
            Ok(())
        }
        Some(Command::Generate {
            output,
            count,
            seed,
        }) => {
            let checksum = generate_file(output, *count, *seed)?;
            println!("{checksum}");
            Ok(())
        }
        None => {
            let config = Config::from_cli(cli)?;
            let driver = BenchmarkDriver::new(&registry);
            let report = driver.run_file(&config.benchmark, &config.file)?;

            println!("{}", report.checksum);
            report.verify(config.expect)?;
            Ok(())
        }
    }
}
