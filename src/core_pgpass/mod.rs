// .pgpass file parsing and password lookup

pub mod entry;
pub mod error;
pub mod parser;
pub mod pgpass_file;

pub use entry::{Entry, WILDCARD};
pub use error::PgPassError;
pub use parser::parse_line;
pub use pgpass_file::PgPassFile;
