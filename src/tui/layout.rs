use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::domain::item::plain_text;
use crate::domain::{Item, ViewState};
use crate::tui::app::{CommentSlot, TuiApp};

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    // Ages drift while the session runs, so they are derived on every frame.
    let now = Utc::now();

    frame.render_widget(
        Block::default().style(Style::default().bg(colors.background).fg(colors.text)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0], colors);
    match app.view.clone() {
        ViewState::Feed => render_feed(frame, app, chunks[1], colors, now),
        ViewState::Bookmarks => render_bookmarks(frame, app, chunks[1], colors),
        ViewState::StoryDetail(story) => {
            render_story_detail(frame, app, &story, chunks[1], colors, now)
        }
    }
    render_status_bar(frame, app, chunks[2], colors);
}

fn render_header(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let theme = if app.dark_theme { "dark" } else { "light" };
    let line = Line::from(vec![
        Span::styled(
            " OSONEWS ",
            Style::default()
                .fg(colors.border)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{} theme]", theme),
            Style::default().fg(colors.metadata_age),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn highlight(colors: &ColorConfig) -> Style {
    Style::default()
        .bg(colors.selection_bg)
        .fg(colors.selection_fg)
        .add_modifier(Modifier::BOLD)
}

fn render_feed(
    frame: &mut Frame,
    app: &mut TuiApp,
    area: Rect,
    colors: &ColorConfig,
    now: DateTime<Utc>,
) {
    let items: Vec<ListItem> = app
        .feed
        .iter()
        .map(|story| {
            let bookmarked = app.is_bookmarked(&story.link());
            let marker = if bookmarked {
                Span::styled("★ ", Style::default().fg(colors.bookmarked))
            } else {
                Span::raw("  ")
            };

            let title = Line::from(vec![
                marker,
                Span::styled(
                    story.display_title().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]);
            ListItem::new(vec![title, story_meta_line(story, colors, now)])
        })
        .collect();

    let title = format!(
        " Top stories ({}) [{}/{}] ",
        app.feed.len(),
        app.feed_index + 1,
        app.feed.len().max(1)
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    if items.is_empty() {
        let message = if app.is_loading {
            "Loading..."
        } else {
            "No stories loaded. Press R to retry."
        };
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight(colors))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.feed_list_state);
}

fn story_meta_line<'a>(story: &Item, colors: &ColorConfig, now: DateTime<Utc>) -> Line<'a> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(
            format!("by {}", story.by),
            Style::default().fg(colors.metadata_author),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("{} points", story.score.unwrap_or(0)),
            Style::default().fg(colors.metadata_score),
        ),
        Span::raw(" | "),
        Span::raw(format!("{} comments", story.comment_count())),
        Span::raw(" | "),
        Span::styled(
            format!("{} hours ago", story.hours_ago(now)),
            Style::default().fg(colors.metadata_age),
        ),
    ])
}

fn render_bookmarks(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let block = Block::default()
        .title(format!(" Bookmarks ({}) ", app.bookmarks.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    if app.bookmarks.is_empty() {
        frame.render_widget(Paragraph::new("No bookmarks yet").block(block), area);
        return;
    }

    let items: Vec<ListItem> = app
        .bookmarks
        .iter()
        .map(|bookmark| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    bookmark.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("    {}", bookmark.url),
                    Style::default().fg(colors.metadata_link),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight(colors))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.bookmark_list_state);
}

fn render_story_detail(
    frame: &mut Frame,
    app: &TuiApp,
    story: &Item,
    area: Rect,
    colors: &ColorConfig,
    now: DateTime<Utc>,
) {
    let mut lines = vec![
        Line::from(Span::styled(
            story.display_title().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Author: {}", story.by),
            Style::default().fg(colors.metadata_author),
        )),
        Line::from(Span::styled(
            format!("Likes: {}", story.score.unwrap_or(0)),
            Style::default().fg(colors.metadata_score),
        )),
        Line::from(format!("Comments: {}", story.comment_count())),
        Line::from(Span::styled(
            format!("Hours Ago: {}", story.hours_ago(now)),
            Style::default().fg(colors.metadata_age),
        )),
        Line::from(Span::styled(
            format!("Link: {}", story.link()),
            Style::default().fg(colors.metadata_link),
        )),
    ];

    if let Some(text) = &story.text {
        lines.push(Line::from(""));
        lines.extend(plain_text(text).lines().map(|l| Line::from(l.to_string())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(
        "─".repeat(area.width.saturating_sub(2) as usize),
    ));
    lines.push(Line::from(Span::styled(
        "Comments",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    if story.comment_count() == 0 {
        lines.push(Line::from("No comments"));
    }

    for slot in &app.comments {
        match slot {
            CommentSlot::Loading(_) => {
                lines.push(Line::from(Span::styled(
                    "Loading...",
                    Style::default().fg(colors.pending),
                )));
            }
            CommentSlot::Loaded(comment) => {
                let body = if comment.deleted {
                    "[deleted]".to_string()
                } else {
                    plain_text(comment.text.as_deref().unwrap_or(""))
                };
                lines.extend(body.lines().map(|l| Line::from(l.to_string())));

                let mut meta = vec![Span::styled(
                    format!("  by {}", comment.by),
                    Style::default().fg(colors.metadata_author),
                )];
                if let Some(score) = comment.score {
                    meta.push(Span::raw(" | "));
                    meta.push(Span::styled(
                        format!("{} points", score),
                        Style::default().fg(colors.metadata_score),
                    ));
                }
                meta.push(Span::raw(" | "));
                meta.push(Span::styled(
                    format!("{} hours ago", comment.hours_ago(now)),
                    Style::default().fg(colors.metadata_age),
                ));
                lines.push(Line::from(meta));
            }
        }
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .title(format!(" {} ", story.display_title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if app.is_loading {
        "Loading top stories...".to_string()
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else {
        match app.view {
            ViewState::Feed => {
                "j/k:Nav  Enter:Comments  b:Bookmark  B:Bookmarks  o:Open  R:Refresh  t:Theme  q:Quit"
                    .to_string()
            }
            ViewState::Bookmarks => {
                "j/k:Nav  b:Remove  o:Open  B:Back to feed  t:Theme  q:Quit".to_string()
            }
            ViewState::StoryDetail(_) => {
                let pending = app.pending_comments();
                if pending > 0 {
                    format!("Loading {} comments...  Esc:Back  b:Bookmark  o:Open", pending)
                } else {
                    "j/k:Scroll  Esc:Back  b:Bookmark  o:Open  t:Theme  q:Quit".to_string()
                }
            }
        }
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}
