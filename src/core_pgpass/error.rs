// Error handling for the .pgpass module
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PgPassError {
    #[error("Unable to open .pgpass file at path {}: {source}", path.display())]
    OpenError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to open .pgpass file at path {}: not a file", .0.display())]
    NotAFile(PathBuf),
}

impl PgPassError {
    /// Path the failed open was attempted on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            PgPassError::OpenError { path, .. } => path,
            PgPassError::NotAFile(path) => path,
        }
    }
}
