pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "osonews")]
#[command(about = "Top Hacker News stories, comments and bookmarks in the terminal", long_about = None)]
pub struct Cli {
    /// Number of comments resolved concurrently (overrides the config file)
    #[arg(short, long, global = true)]
    pub workers: Option<usize>,

    /// Bookmark database path
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default)
    Tui,
    /// Print the current top stories
    Top,
    /// Print a story and its comments as they arrive
    Comments {
        /// Story id
        id: u64,
    },
    /// Manage bookmarks
    Bookmarks {
        #[command(subcommand)]
        action: BookmarkAction,
    },
}

#[derive(Subcommand)]
pub enum BookmarkAction {
    /// List saved bookmarks
    List,
    /// Add the bookmark, or remove it if the URL is already saved
    Toggle {
        url: String,
        title: String,
    },
}
