//! Reader for PostgreSQL password files (`.pgpass`).
//!
//! ```no_run
//! use rouillepgpass::PgPassFile;
//!
//! let pgpass = PgPassFile::open("/home/me/.pgpass")?;
//! let password = pgpass.find_password("localhost", "5432", "app", "app");
//! # Ok::<(), rouillepgpass::PgPassError>(())
//! ```
//!
//! Locating the file is left to the caller.

pub mod core_pgpass;

pub use core_pgpass::{parse_line, Entry, PgPassError, PgPassFile, WILDCARD};
