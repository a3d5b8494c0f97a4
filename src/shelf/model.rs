use crate::error::{Result, ShelfError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub type BookId = u64;

/// One catalog entry.
///
/// Books are immutable: an update produces a new `Book` carrying the same id.
/// On disk a book is one line, `id,title,author`. Fields are not escaped, so a
/// comma in the title (or a newline anywhere) breaks the line apart; see
/// [`validate_title`] and [`validate_author`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns a copy of this book with new title and author.
    pub fn with_fields(&self, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::new(self.id, title, author)
    }

    /// Renders the storage line, including the trailing newline.
    pub fn to_line(&self) -> String {
        format!("{},{},{}\n", self.id, self.title, self.author)
    }

    /// Parses a storage line.
    ///
    /// Only the first two commas separate fields, so everything after the second
    /// one belongs to the author.
    pub fn from_line(line: &str) -> Result<Self> {
        let trimmed = line.trim_end_matches(['\n', '\r']);
        let mut parts = trimmed.splitn(3, ',');

        let (id_part, title, author) = match (parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(title), Some(author)) => (id, title, author),
            _ => {
                return Err(ShelfError::format(
                    trimmed,
                    "expected two comma separators",
                ))
            }
        };

        let id = id_part
            .trim()
            .parse::<BookId>()
            .map_err(|_| ShelfError::format(trimmed, format!("invalid id {:?}", id_part)))?;
        if id == 0 {
            return Err(ShelfError::format(trimmed, "id must be at least 1"));
        }

        Ok(Self::new(id, title, author))
    }
}

impl FromStr for Book {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_line(s)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}",
            self.id, self.title, self.author
        )
    }
}

pub fn validate_title(title: &str) -> Result<()> {
    if title.contains(',') {
        return Err(ShelfError::Api("Title cannot contain a comma".into()));
    }
    reject_newlines("Title", title)
}

pub fn validate_author(author: &str) -> Result<()> {
    reject_newlines("Author", author)
}

fn reject_newlines(field: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(ShelfError::Api(format!(
            "{} cannot contain line breaks",
            field
        )));
    }
    Ok(())
}
