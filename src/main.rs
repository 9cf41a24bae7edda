mod config;
mod core_cli;

use crate::config::Config;
use crate::core_cli::Cli;
use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use log::{debug, info};
use rouillepgpass::PgPassFile;
use std::io::Write;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };

    // Initialize the logger with a custom format
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            let timestamp = buf.timestamp();
            writeln!(
                buf,
                "[{}] [{}] {}",
                timestamp,
                record.level(),
                record.args()
            )
        })
        .init();

    // Load configuration from the TOML file, if any
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            Config::load_from_file(path)?
        }
        None => Config::default(),
    };

    // CLI values override the configuration
    config.lookup.apply_cli(&args);

    if args.list {
        let pgpass = PgPassFile::open(config.lookup.passfile()?)?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for entry in &pgpass {
            writeln!(out, "{}", entry.to_line_masked())?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let request = config.lookup.into_request()?;
    let pgpass = PgPassFile::open(&request.passfile)?;

    let password = pgpass.find_password(
        &request.host,
        &request.port,
        &request.database,
        &request.username,
    );
    if password.is_empty() {
        info!(
            "No password found for {}:{}:{}:{}",
            request.host, request.port, request.database, request.username
        );
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", password);
    Ok(ExitCode::SUCCESS)
}
