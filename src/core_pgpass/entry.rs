// One credential rule from a .pgpass file

use std::fmt;

/// Field value matching any query value during lookup.
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub host: String,
    pub port: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl Entry {
    pub fn new(host: &str, port: &str, database: &str, username: &str, password: &str) -> Self {
        Self {
            host: host.to_string(),
            port: port.to_string(),
            database: database.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// True when each of the four connection fields equals the query value or is `*`.
    /// The password field never takes part in matching.
    pub fn matches(&self, host: &str, port: &str, database: &str, username: &str) -> bool {
        field_matches(&self.host, host)
            && field_matches(&self.port, port)
            && field_matches(&self.database, database)
            && field_matches(&self.username, username)
    }

    /// Renders the entry back into file syntax, escaping `:` and `\`.
    pub fn to_line(&self) -> String {
        self.render(&escape_field(&self.password))
    }

    /// Same as [`Entry::to_line`] with the password replaced by `****`.
    pub fn to_line_masked(&self) -> String {
        self.render("****")
    }

    fn render(&self, password: &str) -> String {
        format!(
            "{}:{}:{}:{}:{}",
            escape_field(&self.host),
            escape_field(&self.port),
            escape_field(&self.database),
            escape_field(&self.username),
            password
        )
    }
}

impl fmt::Display for Entry {
    // Never print a password through Display
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line_masked())
    }
}

fn field_matches(stored: &str, wanted: &str) -> bool {
    stored == WILDCARD || stored == wanted
}

fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for c in field.chars() {
        if c == ':' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
