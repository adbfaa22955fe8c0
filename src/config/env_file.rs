// src/config/env_file.rs
use std::{
    collections::HashMap,
    io::ErrorKind,
    path::Path,
};

/// Fixed location of the overlay file, relative to the working directory.
pub const ENV_FILE: &str = ".env";

/// One `key=value` pair read from the overlay file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub key: String,
    pub value: String,
}

/// Entries parsed from the `.env` overlay. Consulted before the process
/// environment when configuration is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverlay {
    entries: HashMap<String, String>,
}

impl EnvOverlay {
    /// Load the overlay from `path`.
    ///
    /// A missing file is not an error: an empty overlay is returned and the
    /// process falls back to its environment. Read failures are logged and
    /// likewise yield an empty overlay.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let overlay = Self::parse(&contents);
                tracing::info!(
                    path = %path.display(),
                    entries = overlay.len(),
                    "Loaded environment variables from env file"
                );
                overlay
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    path = %path.display(),
                    "No env file found. Using system environment variables."
                );
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not load env file");
                Self::default()
            }
        }
    }

    /// Parse overlay file contents. Later duplicates win.
    pub fn parse(contents: &str) -> Self {
        let entries = contents
            .lines()
            .filter_map(parse_line)
            .map(|entry| (entry.key, entry.value))
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for EnvOverlay {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Parse a single overlay line. Blank lines, `#` comments, lines without `=`
/// and lines with an empty key yield `None`.
pub fn parse_line(line: &str) -> Option<EnvEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (key, value) = trimmed.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some(EnvEntry {
        key: key.to_string(),
        value: strip_quotes(value.trim()).to_string(),
    })
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> Option<EnvEntry> {
        Some(EnvEntry { key: key.to_string(), value: value.to_string() })
    }

    #[test]
    fn strips_one_pair_of_quotes() {
        assert_eq!(parse_line(r#"KEY="value""#), entry("KEY", "value"));
        assert_eq!(parse_line("KEY='value'"), entry("KEY", "value"));
        assert_eq!(parse_line(r#"KEY=""value"""#), entry("KEY", r#""value""#));
    }

    #[test]
    fn mismatched_or_lone_quotes_are_kept() {
        assert_eq!(parse_line(r#"KEY="value'"#), entry("KEY", r#""value'"#));
        assert_eq!(parse_line(r#"KEY=""#), entry("KEY", r#"""#));
    }

    #[test]
    fn trims_key_and_value() {
        assert_eq!(parse_line("  aws.lex.bot.id =  ABC123  "), entry("aws.lex.bot.id", "ABC123"));
    }

    #[test]
    fn splits_on_first_equals() {
        assert_eq!(parse_line("URL=http://x?a=b"), entry("URL", "http://x?a=b"));
    }

    #[test]
    fn skips_comments_blanks_and_malformed_lines() {
        assert_eq!(parse_line("# comment"), None);
        assert_eq!(parse_line("   #indented=comment"), None);
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t"), None);
        assert_eq!(parse_line("NOKEYVALUE"), None);
        assert_eq!(parse_line("=value"), None);
        assert_eq!(parse_line("  = value"), None);
    }

    #[test]
    fn empty_value_is_recorded() {
        assert_eq!(parse_line("EMPTY="), entry("EMPTY", ""));
    }

    #[test]
    fn later_duplicates_override() {
        let overlay = EnvOverlay::parse("A=1\nA=2\n");
        assert_eq!(overlay.get("A"), Some("2"));
        assert_eq!(overlay.len(), 1);
    }
}
