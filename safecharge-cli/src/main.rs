//! Command-line client for the SafeCharge REST API.
//!
//! # Usage
//!
//! ```bash
//! # List supported operations
//! safecharge endpoints
//!
//! # Send a request body read from a file (or `-` for stdin)
//! safecharge send --kind getSessionToken --body session.json
//!
//! # Target a specific environment
//! safecharge send --kind openOrder --body order.json --host https://ppp-test.safecharge.com/ppp/
//!
//! # Configure logging level
//! RUST_LOG=debug safecharge send --kind payout --body payout.json
//! ```
//!
//! # Environment Variables
//!
//! - `SAFECHARGE_CONFIG` — Path to TOML configuration file (default: `safecharge.toml`)
//! - `SAFECHARGE_SERVER_HOST` — Override the configured server host
//! - `RUST_LOG` — Log level filter (default: `info`)
//!
//! A `.env` file in the working directory is loaded first.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use safecharge::proto::ENDPOINTS;
use safecharge::{RequestKind, SafechargeConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "safecharge", version)]
#[command(about = "Send requests to the SafeCharge REST payment API", long_about = None)]
struct Cli {
    /// Configuration file (default: `$SAFECHARGE_CONFIG` or `safecharge.toml`)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every supported operation with its path and reply type
    Endpoints,

    /// Send a JSON request body as the given operation and print the reply
    Send {
        /// Operation name, e.g. `getSessionToken` or `OpenOrder`
        #[arg(long)]
        kind: RequestKind,

        /// JSON file holding the request body; `-` reads stdin
        #[arg(long)]
        body: PathBuf,

        /// Fallback server host, replacing the configured one
        #[arg(long)]
        host: Option<String>,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("safecharge failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Endpoints => print_endpoints(&mut io::stdout().lock()),
        Command::Send { kind, body, host } => {
            let mut config = match cli.config.as_deref() {
                Some(path) => SafechargeConfig::load_from(path)?,
                None => SafechargeConfig::load()?,
            };
            if host.is_some() {
                config.server_host = host;
            }
            tracing::debug!(?config, "Loaded configuration");

            let request = serde_json::from_str(&read_body(&body)?)?;
            let reply = config.dispatcher()?.execute_json(kind, request)?;

            let mut out = io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, &reply)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn print_endpoints(out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    for endpoint in &ENDPOINTS {
        writeln!(
            out,
            "{:<28} {:<40} {}",
            endpoint.name,
            endpoint.path,
            endpoint.response.name()
        )?;
    }
    Ok(())
}

fn read_body(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut body = String::new();
        io::stdin().read_to_string(&mut body)?;
        Ok(body)
    } else {
        std::fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn send_accepts_either_kind_spelling() {
        for spelling in ["getSessionToken", "GetSessionToken", "getSessionTokenRequest"] {
            let cli = Cli::try_parse_from(["safecharge", "send", "--kind", spelling, "--body", "-"])
                .unwrap();
            let Command::Send { kind, .. } = cli.command else {
                panic!("expected send");
            };
            assert_eq!(kind, RequestKind::GetSessionToken);
        }
    }

    #[test]
    fn send_rejects_unknown_kind() {
        let err = Cli::try_parse_from(["safecharge", "send", "--kind", "refundAll", "--body", "-"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn endpoint_listing_has_one_line_per_operation() {
        let mut out = Vec::new();
        print_endpoints(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), RequestKind::COUNT);
        assert!(
            text.lines()
                .any(|l| l.starts_with("updateUser") && l.ends_with("UserResponse"))
        );
    }
}
