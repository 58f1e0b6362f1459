//! # Osonews
//!
//! A terminal client for the Hacker News top stories.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Normalizer → Upstream → Feed → UI
//!                                    ↑
//!                   Store (bookmarks)┘
//! ```
//!
//! - [`fetcher`]: HTTP client with a bounded request timeout
//! - [`normalizer`]: Turns raw payloads into id lists and [`Item`](domain::Item)s
//! - [`upstream`]: Ranked id source and item resolver over the HN API
//! - [`feed`]: Ranked feed window and progressive comment resolution
//! - [`store`]: Key-value persistence and the deduplicated bookmark set
//! - [`tui`]: Terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch TUI
//! osonews
//!
//! # Print the top stories
//! osonews top
//!
//! # Print a story with its comments
//! osonews comments 8863
//!
//! # Bookmarks
//! osonews bookmarks list
//! osonews bookmarks toggle https://example.com "Example"
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the feed
/// aggregator and the bookmark store.
pub mod app;

/// Command-line interface using clap.
///
/// - `tui` - Launch the TUI (default)
/// - `top` - Print the current top stories
/// - `comments <id>` - Print a story and its comments
/// - `bookmarks list|toggle` - Inspect or edit bookmarks
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/osonews/config.toml`, supporting:
/// - API endpoint, timeout and comment concurrency
/// - Light and dark color palettes (named or hex)
/// - Custom keybindings
pub mod config;

/// Core domain models.
///
/// - [`Item`](domain::Item): A story or comment as served by the API
/// - [`Bookmark`](domain::Bookmark): Saved `(url, title)` pair
/// - [`ViewState`](domain::ViewState): Which screen is showing
pub mod domain;

/// Ranked feed loading and comment fan-out.
pub mod feed;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for raw fetches
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Payload parsing and normalization.
pub mod normalizer;

/// Persistence.
///
/// - [`PersistenceClient`](store::PersistenceClient): String key-value trait
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
/// - [`BookmarkStore`](store::BookmarkStore): Bookmark set kept in sync with storage
pub mod store;

/// Terminal user interface.
///
/// Feed, bookmarks and story detail screens built with ratatui.
///
/// Keybindings: j/k navigate, Enter opens comments, Esc goes back,
/// b toggles a bookmark, B shows bookmarks, o opens in browser,
/// R refreshes, t switches theme, q quits.
pub mod tui;

/// Hacker News endpoints.
///
/// - [`RankedIdSource`](upstream::RankedIdSource): Top story ids
/// - [`ItemResolver`](upstream::ItemResolver): One item by id
pub mod upstream;
