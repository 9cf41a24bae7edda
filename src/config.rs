use crate::core_cli::Cli;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    pub passfile: Option<PathBuf>,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: String,
    pub database: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,
}

/// Fully resolved lookup parameters.
#[derive(Debug, PartialEq, Eq)]
pub struct LookupRequest {
    pub passfile: PathBuf,
    pub host: String,
    pub port: String,
    pub database: String,
    pub username: String,
}

fn default_host() -> String {
    String::from("localhost")
}

fn default_port() -> String {
    String::from("5432")
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            passfile: None,
            host: default_host(),
            port: default_port(),
            database: None,
            username: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        let config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;
        Ok(config)
    }
}

impl LookupConfig {
    /// Command-line values take precedence over the configuration file.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(file) = &cli.file {
            self.passfile = Some(file.clone());
        }
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = &cli.port {
            self.port = port.clone();
        }
        if let Some(dbname) = &cli.dbname {
            self.database = Some(dbname.clone());
        }
        if let Some(username) = &cli.username {
            self.username = Some(username.clone());
        }
    }

    pub fn passfile(&self) -> Result<&Path> {
        self.passfile
            .as_deref()
            .ok_or_else(|| anyhow!("No .pgpass file given (use --file or lookup.passfile)"))
    }

    pub fn into_request(self) -> Result<LookupRequest> {
        let passfile = self.passfile()?.to_path_buf();
        let database = self
            .database
            .ok_or_else(|| anyhow!("No database given (use --dbname or lookup.database)"))?;
        let username = self
            .username
            .ok_or_else(|| anyhow!("No user name given (use --username or lookup.username)"))?;

        Ok(LookupRequest {
            passfile,
            host: self.host,
            port: self.port,
            database,
            username,
        })
    }
}
