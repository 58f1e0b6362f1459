use chrono::Utc;

use crate::app::{AppContext, Result};
use crate::domain::item::plain_text;
use crate::domain::Item;

pub async fn top(ctx: &AppContext) -> Result<()> {
    let window = ctx.aggregator.load_feed().await?;

    if window.is_empty() {
        println!("No stories");
        return Ok(());
    }

    let now = Utc::now();
    for (rank, story) in window.iter().enumerate() {
        let marker = if ctx.bookmarks.is_bookmarked(&story.link()) {
            "★"
        } else {
            " "
        };
        println!("{:>2}. {} {}", rank + 1, marker, story.display_title());
        println!(
            "       {} points by {} | {} comments | {} hours ago",
            story.score.unwrap_or(0),
            story.by,
            story.comment_count(),
            story.hours_ago(now)
        );
        println!("       {}", story.link());
    }

    Ok(())
}

/// Print the story, then each direct comment the moment it resolves.
pub async fn comments(ctx: &AppContext, story_id: u64) -> Result<()> {
    let story = ctx.aggregator.resolve_story(story_id).await?;
    let now = Utc::now();

    println!("{}", story.display_title());
    println!("Author: {}", story.by);
    println!("Likes: {}", story.score.unwrap_or(0));
    println!("Comments: {}", story.comment_count());
    println!("Hours Ago: {}", story.hours_ago(now));
    println!();

    if story.comment_count() == 0 {
        println!("No comments");
        return Ok(());
    }

    let mut rx = ctx.aggregator.comments(&story);
    let mut missing = 0;
    while let Some(resolution) = rx.recv().await {
        match resolution.result {
            Ok(comment) => print_comment(&comment),
            Err(_) => missing += 1,
        }
    }

    if missing > 0 {
        println!("({} comments could not be loaded)", missing);
    }

    Ok(())
}

fn print_comment(comment: &Item) {
    let text = if comment.deleted {
        "[deleted]".to_string()
    } else {
        plain_text(comment.text.as_deref().unwrap_or(""))
    };

    println!("{}", text);
    println!(
        "  -- {} | {} hours ago",
        comment.by,
        comment.hours_ago(Utc::now())
    );
    println!();
}

pub fn list_bookmarks(ctx: &AppContext) -> Result<()> {
    let bookmarks = ctx.bookmarks.bookmarks();

    if bookmarks.is_empty() {
        println!("No bookmarks");
        return Ok(());
    }

    for bookmark in bookmarks {
        println!("{}\n  {}", bookmark.title, bookmark.url);
    }

    Ok(())
}

pub fn toggle_bookmark(ctx: &AppContext, url: &str, title: &str) -> Result<()> {
    let bookmarks = ctx.bookmarks.toggle(url, title)?;

    if ctx.bookmarks.is_bookmarked(url) {
        println!("Bookmarked: {}", title);
    } else {
        println!("Removed bookmark: {}", url);
    }
    println!("{} bookmarks saved", bookmarks.len());

    Ok(())
}
