use std::collections::HashSet;

use ratatui::widgets::ListState;

use crate::config::{ColorConfig, Config};
use crate::domain::{Bookmark, FeedWindow, Item, ViewState};
use crate::feed::CommentResolution;

/// A direct comment of the open story, in the order the story lists it.
#[derive(Debug, Clone, PartialEq)]
pub enum CommentSlot {
    Loading(u64),
    Loaded(Item),
}

impl CommentSlot {
    pub fn id(&self) -> u64 {
        match self {
            CommentSlot::Loading(id) => *id,
            CommentSlot::Loaded(item) => item.id,
        }
    }
}

pub struct TuiApp {
    pub view: ViewState,
    pub feed: FeedWindow,
    pub bookmarks: Vec<Bookmark>,
    bookmarked_urls: HashSet<String>,
    pub comments: Vec<CommentSlot>,
    /// Bumped on every story opening; comment results carry the value
    /// current when they were started.
    pub comment_generation: u64,
    pub feed_index: usize,
    pub bookmark_index: usize,
    pub detail_scroll: u16,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub is_loading: bool,
    pub dark_theme: bool,
    // List states for scrolling
    pub feed_list_state: ListState,
    pub bookmark_list_state: ListState,
}

impl TuiApp {
    pub fn new() -> Self {
        let mut feed_list_state = ListState::default();
        feed_list_state.select(Some(0));
        let mut bookmark_list_state = ListState::default();
        bookmark_list_state.select(Some(0));

        Self {
            view: ViewState::new(),
            feed: Vec::new(),
            bookmarks: Vec::new(),
            bookmarked_urls: HashSet::new(),
            comments: Vec::new(),
            comment_generation: 0,
            feed_index: 0,
            bookmark_index: 0,
            detail_scroll: 0,
            should_quit: false,
            status_message: None,
            is_loading: false,
            dark_theme: false,
            feed_list_state,
            bookmark_list_state,
        }
    }

    pub fn colors<'a>(&self, config: &'a Config) -> &'a ColorConfig {
        if self.dark_theme {
            &config.dark_colors
        } else {
            &config.colors
        }
    }

    /// Replace the feed with a freshly loaded window.
    pub fn set_feed(&mut self, feed: FeedWindow) {
        self.feed = feed;
        self.feed_index = self.feed_index.min(self.feed.len().saturating_sub(1));
        self.feed_list_state.select(Some(self.feed_index));
    }

    pub fn set_bookmarks(&mut self, bookmarks: Vec<Bookmark>) {
        self.bookmarked_urls = bookmarks.iter().map(|b| b.url.clone()).collect();
        self.bookmarks = bookmarks;
        self.bookmark_index = self
            .bookmark_index
            .min(self.bookmarks.len().saturating_sub(1));
        self.bookmark_list_state.select(Some(self.bookmark_index));
    }

    pub fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarked_urls.contains(url)
    }

    pub fn selected_story(&self) -> Option<&Item> {
        self.feed.get(self.feed_index)
    }

    pub fn selected_bookmark(&self) -> Option<&Bookmark> {
        self.bookmarks.get(self.bookmark_index)
    }

    /// The `(url, title)` the bookmark and open actions apply to.
    pub fn target(&self) -> Option<(String, String)> {
        match &self.view {
            ViewState::Feed => self
                .selected_story()
                .map(|story| (story.link(), story.display_title().to_string())),
            ViewState::Bookmarks => self
                .selected_bookmark()
                .map(|b| (b.url.clone(), b.title.clone())),
            ViewState::StoryDetail(story) => {
                Some((story.link(), story.display_title().to_string()))
            }
        }
    }

    /// Enter the detail view for the selected story. Returns the story whose
    /// comments should start resolving, or `None` if nothing changed.
    pub fn open_selected_story(&mut self) -> Option<Item> {
        let story = self.selected_story()?.clone();
        if !self.view.select_story(story.clone()) {
            return None;
        }

        self.comments = story
            .comment_ids()
            .iter()
            .map(|&id| CommentSlot::Loading(id))
            .collect();
        self.comment_generation += 1;
        self.detail_scroll = 0;
        Some(story)
    }

    pub fn go_back(&mut self) {
        if self.view.go_back() {
            self.comments.clear();
            self.detail_scroll = 0;
        }
    }

    pub fn toggle_bookmarks_view(&mut self) {
        self.view.toggle_bookmarks_view();
    }

    /// Fold one comment result into the detail view. Results from an opening
    /// that is no longer on screen are discarded; failed comments drop out.
    pub fn apply_comment(&mut self, resolution: CommentResolution) -> bool {
        if !self.view.is_showing_story(resolution.story_id)
            || resolution.generation != self.comment_generation
        {
            tracing::debug!(
                "Discarding comment {} for story {} no longer shown",
                resolution.comment_id,
                resolution.story_id
            );
            return false;
        }

        let Some(position) = self
            .comments
            .iter()
            .position(|slot| slot.id() == resolution.comment_id)
        else {
            return false;
        };

        match resolution.result {
            Ok(item) => self.comments[position] = CommentSlot::Loaded(item),
            Err(_) => {
                self.comments.remove(position);
            }
        }
        true
    }

    pub fn pending_comments(&self) -> usize {
        self.comments
            .iter()
            .filter(|slot| matches!(slot, CommentSlot::Loading(_)))
            .count()
    }

    pub fn move_up(&mut self) {
        match self.view {
            ViewState::Feed => {
                if self.feed_index > 0 {
                    self.feed_index -= 1;
                    self.feed_list_state.select(Some(self.feed_index));
                }
            }
            ViewState::Bookmarks => {
                if self.bookmark_index > 0 {
                    self.bookmark_index -= 1;
                    self.bookmark_list_state.select(Some(self.bookmark_index));
                }
            }
            ViewState::StoryDetail(_) => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.view {
            ViewState::Feed => {
                if self.feed_index + 1 < self.feed.len() {
                    self.feed_index += 1;
                    self.feed_list_state.select(Some(self.feed_index));
                }
            }
            ViewState::Bookmarks => {
                if self.bookmark_index + 1 < self.bookmarks.len() {
                    self.bookmark_index += 1;
                    self.bookmark_list_state.select(Some(self.bookmark_index));
                }
            }
            ViewState::StoryDetail(_) => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        self.dark_theme = !self.dark_theme;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
