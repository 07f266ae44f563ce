//! CLI argument parsing and configuration.

use std::io;
use std::time::Duration;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
pub struct CliConfig {
    /// Event-loop poll budget per tick.
    pub tick_rate: Duration,
    /// Fixed sampler seed for deterministic demos.
    pub seed: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
            seed: None,
        }
    }
}

/// Print usage information
pub fn print_usage() {
    eprintln!("pmlab-tui - Interactive terminal playground for project management concepts");
    eprintln!();
    eprintln!("Usage: pmlab-tui [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -t, --tick-rate <MS>   Event loop tick budget in milliseconds (default: 100)");
    eprintln!("  -s, --seed <N>         Seed the random sampler for deterministic demos");
    eprintln!("  -h, --help             Show this help message");
    eprintln!("  -V, --version          Show version");
    eprintln!();
    eprintln!("Set PMLAB_LOG to a file path to enable tracing output.");
}

/// Parse CLI arguments and return configuration
pub fn parse_args<I: Iterator<Item = String>>(mut args: I) -> io::Result<CliConfig> {
    let mut config = CliConfig::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("pmlab-tui {}", VERSION);
                std::process::exit(0);
            }
            "-t" | "--tick-rate" => {
                let value = args.next().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "Missing value for --tick-rate")
                })?;
                let millis: u64 = value.parse().map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Invalid tick-rate value: {}", value),
                    )
                })?;
                if millis == 0 {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "tick-rate must be at least 1 ms",
                    ));
                }
                config.tick_rate = Duration::from_millis(millis);
            }
            "-s" | "--seed" => {
                let value = args.next().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "Missing value for --seed")
                })?;
                let seed: u64 = value.parse().map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Invalid seed value: {}", value),
                    )
                })?;
                config.seed = Some(seed);
            }
            other => {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unknown argument: {}", other),
                ));
            }
        }
    }

    Ok(config)
}
