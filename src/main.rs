use std::fs::OpenOptions;
use std::io;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use osonews::app::AppContext;
use osonews::cli::{commands, BookmarkAction, Cli, Commands};
use osonews::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so logs can be sent to a file instead.
    let file_layer = match &cli.log {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        }
        None => None,
    };
    let stderr_layer = cli
        .log
        .is_none()
        .then(|| fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .with(EnvFilter::from_default_env())
        .init();

    let mut config = Config::load()?;
    if let Some(workers) = cli.workers {
        config.api.comment_workers = workers;
    }

    let ctx = AppContext::new(cli.db, &config.api)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            osonews::tui::run(Arc::new(ctx), Arc::new(config)).await?;
        }
        Some(Commands::Top) => {
            commands::top(&ctx).await?;
        }
        Some(Commands::Comments { id }) => {
            commands::comments(&ctx, id).await?;
        }
        Some(Commands::Bookmarks { action }) => match action {
            BookmarkAction::List => commands::list_bookmarks(&ctx)?,
            BookmarkAction::Toggle { url, title } => {
                commands::toggle_bookmark(&ctx, &url, &title)?;
            }
        },
    }

    Ok(())
}
