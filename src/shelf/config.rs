//! # Configuration
//!
//! Shelf reads a plain `key=value` file (by default `config.ini` in the working
//! directory):
//!
//! ```text
//! # where the catalog lives
//! BookEntryFile=books.txt
//! FreeIdsFile=free_ids.txt
//! PageSize=10
//! ```
//!
//! | Key | Required | Description |
//! |-----|----------|-------------|
//! | `BookEntryFile` | yes | Catalog file, one book per line |
//! | `FreeIdsFile` | yes | Ledger of ids waiting for reuse |
//! | `PageSize` | no (10) | Books shown per page when listing |
//!
//! Lines split at the first `=`, keys and values are trimmed, blank lines and
//! lines starting with `#` or `;` are skipped, and a repeated key keeps its last
//! value. Relative paths are taken relative to the config file's directory.

use crate::error::{Result, ShelfError};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.ini";
pub const DEFAULT_PAGE_SIZE: usize = 10;

const BOOK_ENTRY_KEY: &str = "BookEntryFile";
const FREE_IDS_KEY: &str = "FreeIdsFile";
const PAGE_SIZE_KEY: &str = "PageSize";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShelfConfig {
    pub book_entry_file: PathBuf,
    pub free_ids_file: PathBuf,
    pub page_size: usize,
}

impl ShelfConfig {
    pub fn new(book_entry_file: impl Into<PathBuf>, free_ids_file: impl Into<PathBuf>) -> Self {
        Self {
            book_entry_file: book_entry_file.into(),
            free_ids_file: free_ids_file.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Load and validate the config file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            ShelfError::Config(format!(
                "Unable to open config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&text, base_dir).map_err(|e| match e {
            ShelfError::Config(msg) => {
                ShelfError::Config(format!("{} in {}", msg, path.display()))
            }
            other => other,
        })
    }

    /// Build a config from `key=value` text, resolving relative paths against `base_dir`.
    pub fn parse(text: &str, base_dir: &Path) -> Result<Self> {
        let entries = parse_entries(text);

        let book_entry_file = required_path(&entries, BOOK_ENTRY_KEY, base_dir)?;
        let free_ids_file = required_path(&entries, FREE_IDS_KEY, base_dir)?;

        let page_size = match entries.get(PAGE_SIZE_KEY) {
            None => DEFAULT_PAGE_SIZE,
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ShelfError::Config(format!(
                        "{} must be a positive integer, got {:?}",
                        PAGE_SIZE_KEY, raw
                    )))
                }
            },
        };

        Ok(Self {
            book_entry_file,
            free_ids_file,
            page_size,
        })
    }
}

fn parse_entries(text: &str) -> HashMap<&str, &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with(';'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect()
}

fn required_path(entries: &HashMap<&str, &str>, key: &str, base_dir: &Path) -> Result<PathBuf> {
    match entries.get(key) {
        Some(value) if !value.is_empty() => Ok(base_dir.join(value)),
        _ => Err(ShelfError::Config(format!(
            "Missing required config value {}",
            key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_required_keys() {
        let config = ShelfConfig::parse(
            "BookEntryFile=books.txt\nFreeIdsFile=free.txt\n",
            Path::new(""),
        )
        .unwrap();
        assert_eq!(config.book_entry_file, PathBuf::from("books.txt"));
        assert_eq!(config.free_ids_file, PathBuf::from("free.txt"));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_parse_trims_and_skips_noise() {
        let text = "# comment\n; also comment\n\nnot a pair\n BookEntryFile = a.txt \nFreeIdsFile=b=c.txt\n";
        let config = ShelfConfig::parse(text, Path::new("")).unwrap();
        assert_eq!(config.book_entry_file, PathBuf::from("a.txt"));
        // Only the first '=' splits
        assert_eq!(config.free_ids_file, PathBuf::from("b=c.txt"));
    }

    #[test]
    fn test_parse_last_value_wins() {
        let text = "BookEntryFile=old.txt\nFreeIdsFile=f.txt\nBookEntryFile=new.txt\n";
        let config = ShelfConfig::parse(text, Path::new("")).unwrap();
        assert_eq!(config.book_entry_file, PathBuf::from("new.txt"));
    }

    #[test]
    fn test_missing_key() {
        let err = ShelfConfig::parse("BookEntryFile=books.txt\n", Path::new("")).unwrap_err();
        assert!(matches!(err, ShelfError::Config(ref msg) if msg.contains("FreeIdsFile")));

        let err = ShelfConfig::parse("BookEntryFile=\nFreeIdsFile=f\n", Path::new("")).unwrap_err();
        assert!(matches!(err, ShelfError::Config(ref msg) if msg.contains("BookEntryFile")));
    }

    #[test]
    fn test_page_size() {
        let text = "BookEntryFile=a\nFreeIdsFile=b\nPageSize=25\n";
        assert_eq!(ShelfConfig::parse(text, Path::new("")).unwrap().page_size, 25);

        for bad in ["0", "-1", "ten"] {
            let text = format!("BookEntryFile=a\nFreeIdsFile=b\nPageSize={}\n", bad);
            assert!(matches!(
                ShelfConfig::parse(&text, Path::new("")),
                Err(ShelfError::Config(_))
            ));
        }
    }

    #[test]
    fn test_load_resolves_relative_to_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "BookEntryFile=data/books.txt\nFreeIdsFile=/abs/free.txt\n").unwrap();

        let config = ShelfConfig::load(&path).unwrap();
        assert_eq!(config.book_entry_file, dir.path().join("data/books.txt"));
        assert_eq!(config.free_ids_file, PathBuf::from("/abs/free.txt"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ShelfConfig::load(dir.path().join("nope.ini")).unwrap_err();
        assert!(matches!(err, ShelfError::Config(_)));
    }
}
