use shelf::error::{Result, ShelfError};
use std::io::{self, BufRead, Write};

/// Line-oriented prompts on top of any reader, stdin in production.
pub struct Input<R> {
    reader: R,
}

impl<R: BufRead> Input<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Prints `prompt` and reads one line, without its line ending.
    /// Returns `None` once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush().map_err(ShelfError::Io)?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).map_err(ShelfError::Io)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Yes/no question; anything but "yes" or "y" counts as no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self
            .ask(prompt)?
            .map(|answer| matches!(answer.trim().to_ascii_lowercase().as_str(), "yes" | "y"))
            .unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_until_eof() {
        let mut input = Input::new(Cursor::new("first\r\nsecond\n"));
        assert_eq!(input.ask("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(input.ask("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(input.ask("> ").unwrap(), None);
    }

    #[test]
    fn confirm_accepts_yes_variants() {
        let mut input = Input::new(Cursor::new("yes\nY\nno\n\n"));
        assert!(input.confirm("? ").unwrap());
        assert!(input.confirm("? ").unwrap());
        assert!(!input.confirm("? ").unwrap());
        assert!(!input.confirm("? ").unwrap());
        assert!(!input.confirm("? ").unwrap());
    }
}
