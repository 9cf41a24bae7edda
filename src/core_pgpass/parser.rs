// Line parser for the .pgpass format
// host:port:database:username:password, with `\:` and `\\` escapes

use crate::core_pgpass::entry::Entry;

const FIELD_COUNT: usize = 5;
const DELIMITER: char = ':';

// Placeholders for the escape pairs while splitting. Lines are cut on
// `\n` and `\r`, so neither character can occur inside a line.
const ESCAPED_COLON: char = '\r';
const ESCAPED_BACKSLASH: char = '\n';

/// Parses one line of a .pgpass file.
///
/// Returns `None` for blank lines, comments and lines that do not split into
/// exactly five fields on unescaped colons.
pub fn parse_line(line: &str) -> Option<Entry> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let masked = mask_escapes(line);

    let parts: Vec<&str> = masked.split(DELIMITER).collect();
    if parts.len() != FIELD_COUNT {
        return None;
    }

    let fields: Vec<String> = parts.iter().map(|part| unmask_escapes(part)).collect();

    Some(Entry::new(&fields[0], &fields[1], &fields[2], &fields[3], &fields[4]))
}

/// Parses a chunk of raw bytes holding one or more lines and appends the
/// resulting entries. Lines that are not valid UTF-8 are skipped.
pub(crate) fn parse_raw(raw: &[u8], entries: &mut Vec<Entry>) {
    for line in raw.split(|b| *b == b'\n' || *b == b'\r') {
        let Ok(line) = std::str::from_utf8(line) else {
            continue;
        };
        if let Some(entry) = parse_line(line) {
            entries.push(entry);
        }
    }
}

// Every `\:` is masked before any `\\`, so in `\\:` the colon is escaped.
// A backslash before any other character is kept as is.
fn mask_escapes(line: &str) -> String {
    line.replace("\\:", &ESCAPED_COLON.to_string())
        .replace("\\\\", &ESCAPED_BACKSLASH.to_string())
}

fn unmask_escapes(part: &str) -> String {
    part.chars()
        .map(|c| match c {
            ESCAPED_COLON => ':',
            ESCAPED_BACKSLASH => '\\',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        let entry = parse_line("test1:5432:larrydb:larry:whatstheidea").unwrap();
        assert_eq!(
            entry,
            Entry::new("test1", "5432", "larrydb", "larry", "whatstheidea")
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let entry = parse_line("  \thost:1:db:user:pw \t").unwrap();
        assert_eq!(entry.host, "host");
        assert_eq!(entry.password, "pw");
    }

    #[test]
    fn test_empty_fields_are_kept() {
        let entry = parse_line("::::").unwrap();
        assert_eq!(entry, Entry::new("", "", "", "", ""));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        assert!(parse_line("# A comment").is_none());
        assert!(parse_line("   # indented:comment:with:five:parts").is_none());
        assert!(parse_line("").is_none());
        assert!(parse_line("    \t ").is_none());
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(parse_line("host:5432:db:user").is_none());
        assert!(parse_line("host:5432:db:user:pw:extra").is_none());
        assert!(parse_line("no delimiters at all").is_none());
    }

    #[test]
    fn test_escaped_colon() {
        let entry = parse_line("test2:5432:*:*:test\\ing\\:").unwrap();
        assert_eq!(entry.password, "test\\ing:");

        let entry = parse_line("h\\:1:5432:db:user:pw").unwrap();
        assert_eq!(entry.host, "h:1");
        assert_eq!(entry.password, "pw");
    }

    #[test]
    fn test_escaped_backslash() {
        let entry = parse_line("host:5432:db:user:a\\\\b").unwrap();
        assert_eq!(entry.password, "a\\b");
    }

    #[test]
    fn test_escaped_colon_is_masked_before_backslash() {
        // `\\:` reads as a literal backslash followed by an escaped colon
        assert!(parse_line("host:5432:db:us\\\\:pw").is_none());

        let entry = parse_line("h:1:d:u:p\\\\:x").unwrap();
        assert_eq!(entry.username, "u");
        assert_eq!(entry.password, "p\\:x");
    }

    #[test]
    fn test_escaped_colon_does_not_count_as_delimiter() {
        assert!(parse_line("host:5432:db:user\\:pw").is_none());
    }

    #[test]
    fn test_parse_raw_line_terminators() {
        let mut entries = Vec::new();
        parse_raw(b"a:1:d:u:p1\r\nb:2:d:u:p2\rc:3:d:u:p3\n", &mut entries);
        let hosts: Vec<&str> = entries.iter().map(|e| e.host.as_str()).collect();
        assert_eq!(hosts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_raw_skips_invalid_utf8() {
        let mut entries = Vec::new();
        parse_raw(b"bad:1:d:u:\xff\xfe\ngood:1:d:u:pw", &mut entries);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].host, "good");
    }
}
