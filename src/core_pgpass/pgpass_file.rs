// Loaded .pgpass file and password lookup
// See https://www.postgresql.org/docs/current/libpq-pgpass.html

use crate::core_pgpass::entry::Entry;
use crate::core_pgpass::error::PgPassError;
use crate::core_pgpass::parser::parse_raw;
use log::{debug, warn};
use std::convert::Infallible;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Ordered, immutable set of entries. The first matching entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PgPassFile {
    entries: Vec<Entry>,
}

impl PgPassFile {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Opens and parses the file at `path`.
    ///
    /// Only the open step can fail. Once the file is open, malformed lines are
    /// skipped and a read error ends the load with the entries gathered so far.
    /// The file is closed before this returns.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PgPassError> {
        let path = path.as_ref();

        // Checked before opening so a FIFO never blocks the open
        let metadata = std::fs::metadata(path).map_err(|e| PgPassError::OpenError {
            path: path.to_path_buf(),
            source: e,
        })?;
        if !metadata.is_file() {
            return Err(PgPassError::NotAFile(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|e| PgPassError::OpenError {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!("Reading .pgpass file {}", path.display());
        let pgpass = Self::from_reader(BufReader::new(file));
        debug!(
            "Loaded {} entries from {}",
            pgpass.entries.len(),
            path.display()
        );

        Ok(pgpass)
    }

    /// Parses entries from any buffered reader, line by line.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Self {
        let mut entries = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => parse_raw(&buf, &mut entries),
                Err(e) => {
                    warn!("Stopped reading .pgpass data: {}", e);
                    break;
                }
            }
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry, in file order, matching the connection parameters.
    pub fn find_entry(
        &self,
        host: &str,
        port: &str,
        database: &str,
        username: &str,
    ) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.matches(host, port, database, username))
    }

    /// Finds the password for the provided host, port, database and username.
    ///
    /// Unix domain socket connections must be looked up with the host
    /// `localhost`. An empty string is returned if no entry matches.
    pub fn find_password(&self, host: &str, port: &str, database: &str, username: &str) -> &str {
        self.find_entry(host, port, database, username)
            .map(|entry| entry.password.as_str())
            .unwrap_or("")
    }
}

impl FromStr for PgPassFile {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_reader(s.as_bytes()))
    }
}

impl<'a> IntoIterator for &'a PgPassFile {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
