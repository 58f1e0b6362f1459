pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::app::{AppContext, Result};
use crate::config::Config;
use crate::feed::CommentResolution;

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>, config: Arc<Config>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, config).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>, config: Arc<Config>) -> Result<()> {
    let mut tui_app = TuiApp::new();
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let (comment_tx, mut comment_rx) = mpsc::unbounded_channel::<CommentResolution>();

    tui_app.set_bookmarks(ctx.bookmarks.bookmarks());
    load_feed(terminal, &mut tui_app, &ctx, &config).await?;

    loop {
        // Comments show up one by one as their resolutions land.
        while let Ok(resolution) = comment_rx.try_recv() {
            tui_app.apply_comment(resolution);
        }

        let colors = tui_app.colors(&config);
        terminal.draw(|frame| layout::render(frame, &mut tui_app, colors))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                tui_app.clear_status();

                match config.keybindings.get_action(&key) {
                    Action::Quit => {
                        tui_app.should_quit = true;
                    }
                    Action::MoveUp => {
                        tui_app.move_up();
                    }
                    Action::MoveDown => {
                        tui_app.move_down();
                    }
                    Action::Select => {
                        if let Some(story) = tui_app.open_selected_story() {
                            ctx.aggregator.spawn_comment_resolutions(
                                &story,
                                tui_app.comment_generation,
                                comment_tx.clone(),
                            );
                        }
                    }
                    Action::Back => {
                        tui_app.go_back();
                    }
                    Action::ToggleBookmarksView => {
                        tui_app.toggle_bookmarks_view();
                    }
                    Action::ToggleBookmark => {
                        if let Some((url, title)) = tui_app.target() {
                            match ctx.bookmarks.toggle(&url, &title) {
                                Ok(bookmarks) => {
                                    let verb = if ctx.bookmarks.is_bookmarked(&url) {
                                        "Bookmarked"
                                    } else {
                                        "Removed bookmark"
                                    };
                                    tui_app.set_bookmarks(bookmarks);
                                    tui_app.set_status(format!("{}: {}", verb, title));
                                }
                                Err(e) => {
                                    tracing::error!("Bookmark toggle failed: {}", e);
                                    tui_app.set_status(format!("Could not save bookmark: {}", e));
                                }
                            }
                        }
                    }
                    Action::OpenInBrowser => {
                        if let Some((url, _)) = tui_app.target() {
                            if let Err(e) = open::that(&url) {
                                tui_app.set_status(format!("Failed to open browser: {}", e));
                            }
                        }
                    }
                    Action::Refresh => {
                        load_feed(terminal, &mut tui_app, &ctx, &config).await?;
                    }
                    Action::ToggleTheme => {
                        tui_app.toggle_theme();
                    }
                    Action::None => {}
                }
            }
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Replace the feed wholesale. On failure the previous feed stays on screen.
async fn load_feed(
    terminal: &mut Tui,
    tui_app: &mut TuiApp,
    ctx: &AppContext,
    config: &Config,
) -> Result<()> {
    tui_app.is_loading = true;
    let colors = tui_app.colors(config);
    terminal.draw(|frame| layout::render(frame, tui_app, colors))?;

    match ctx.aggregator.load_feed().await {
        Ok(window) => {
            let count = window.len();
            tui_app.set_feed(window);
            tui_app.set_status(format!("Loaded {} top stories", count));
        }
        Err(e) => {
            tui_app.set_status(format!("Could not load top stories: {}", e));
        }
    }

    tui_app.is_loading = false;
    Ok(())
}
