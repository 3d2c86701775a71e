//! Recipe streams for the CLI.
//!
//! The packing core never looks inside an item, so the CLI works with plain
//! recipe ids. They come from a file, either a JSON array of strings or plain
//! text with one id per line (blank lines and `#` comments skipped), or are
//! generated as `recipe-001`, `recipe-002`, ...

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON item list in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read recipe ids from `path`.
///
/// Content whose first non-whitespace character is `[` is parsed as JSON;
/// anything else is read line by line.
pub fn load_items(path: &Path) -> Result<Vec<String>, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim_start().starts_with('[') {
        serde_json::from_str(&content).map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        Ok(parse_lines(&content))
    }
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// `count` synthetic recipe ids.
pub fn generated_items(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("recipe-{i:03}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_json_array() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("items.json");
        fs::write(&path, r#"["pancakes", "omelette", "risotto"]"#).unwrap();
        assert_eq!(
            load_items(&path).unwrap(),
            vec!["pancakes", "omelette", "risotto"]
        );
    }

    #[test]
    fn load_plain_lines_skips_blanks_and_comments() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("items.txt");
        fs::write(&path, "# breakfast\npancakes\n\n  omelette  \n").unwrap();
        assert_eq!(load_items(&path).unwrap(), vec!["pancakes", "omelette"]);
    }

    #[test]
    fn invalid_json_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "[1, 2").unwrap();
        let err = load_items(&path).unwrap_err();
        assert!(matches!(err, InputError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_items(&tmp.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }

    #[test]
    fn generated_items_are_numbered() {
        assert_eq!(
            generated_items(3),
            vec!["recipe-001", "recipe-002", "recipe-003"]
        );
        assert!(generated_items(0).is_empty());
    }
}
