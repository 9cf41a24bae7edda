use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "rouillepgpass",
    about = "Looks up a password in a PostgreSQL .pgpass file."
)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the .pgpass file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Server host (use "localhost" for Unix socket connections)
    #[arg(long)]
    pub host: Option<String>,

    /// Server port
    #[arg(short, long)]
    pub port: Option<String>,

    /// Database name
    #[arg(short, long)]
    pub dbname: Option<String>,

    /// User name
    #[arg(short, long)]
    pub username: Option<String>,

    /// List parsed entries with passwords masked instead of looking one up
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}
