use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", version)]
#[command(about = "A small plain-text book catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the key=value config file (defaults to ./config.ini)
    #[arg(short, long, global = true, env = "SHELF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    #[command(alias = "a")]
    Add {
        /// Title of the book (no commas)
        title: String,

        /// Author of the book
        author: String,
    },

    /// Replace the title and author of a book
    #[command(alias = "u")]
    Update {
        /// Id of the book
        id: u64,

        /// New title (no commas)
        title: String,

        /// New author
        author: String,
    },

    /// Delete a book, freeing its id for reuse
    #[command(alias = "rm")]
    Delete {
        /// Id of the book
        id: u64,
    },

    /// Show a single book
    Show {
        /// Id of the book
        id: u64,
    },

    /// List books a page at a time
    #[command(alias = "ls")]
    List {
        /// Books per page (defaults to the configured PageSize)
        #[arg(short = 'n', long)]
        page_size: Option<usize>,

        /// Print every page without asking
        #[arg(long)]
        all: bool,

        /// Print all books as JSON
        #[arg(long, conflicts_with = "page_size")]
        json: bool,
    },

    /// Show how many books there are and which ids are free
    Status,

    /// Print the resolved configuration
    Config,

    /// Run the interactive menu (the default)
    Menu,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_update() {
        let cli = Cli::parse_from(["shelf", "update", "3", "Emma", "Jane Austen"]);
        match cli.command {
            Some(Commands::Update { id, title, author }) => {
                assert_eq!(id, 3);
                assert_eq!(title, "Emma");
                assert_eq!(author, "Jane Austen");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::parse_from(["shelf", "--config", "lib.ini"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("lib.ini")));
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["shelf", "rm", "three"]).is_err());
    }

    #[test]
    fn list_flags() {
        let cli = Cli::parse_from(["shelf", "ls", "-n", "5", "--all"]);
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                page_size: Some(5),
                all: true,
                json: false
            })
        ));
    }
}
