use crate::domain::Item;

/// Which screen is showing. Exactly one is active and there is no history:
/// leaving a story always lands on the feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Feed,
    Bookmarks,
    StoryDetail(Box<Item>),
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a story's discussion. Only valid from the feed; returns whether
    /// the transition happened.
    pub fn select_story(&mut self, story: Item) -> bool {
        match self {
            ViewState::Feed => {
                *self = ViewState::StoryDetail(Box::new(story));
                true
            }
            ViewState::Bookmarks | ViewState::StoryDetail(_) => false,
        }
    }

    pub fn go_back(&mut self) -> bool {
        match self {
            ViewState::StoryDetail(_) => {
                *self = ViewState::Feed;
                true
            }
            ViewState::Feed | ViewState::Bookmarks => false,
        }
    }

    pub fn toggle_bookmarks_view(&mut self) -> bool {
        match self {
            ViewState::Feed => {
                *self = ViewState::Bookmarks;
                true
            }
            ViewState::Bookmarks => {
                *self = ViewState::Feed;
                true
            }
            ViewState::StoryDetail(_) => false,
        }
    }

    pub fn story(&self) -> Option<&Item> {
        match self {
            ViewState::StoryDetail(story) => Some(story),
            _ => None,
        }
    }

    /// True while `story_id` is the story on screen. Late comment results for
    /// any other story are dropped by the caller.
    pub fn is_showing_story(&self, story_id: u64) -> bool {
        self.story().is_some_and(|story| story.id == story_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemKind;

    fn story(id: u64) -> Item {
        Item {
            id,
            kind: ItemKind::Story,
            by: "dhouston".into(),
            time: 1175714200,
            score: Some(111),
            url: Some("http://www.getdropbox.com/u/2/screencast.html".into()),
            title: Some("My YC app: Dropbox".into()),
            text: None,
            kids: Some(vec![9224, 8917]),
            deleted: false,
            dead: false,
        }
    }

    #[test]
    fn test_initial_state_is_feed() {
        assert_eq!(ViewState::new(), ViewState::Feed);
    }

    #[test]
    fn test_select_then_back_returns_to_feed() {
        let mut view = ViewState::new();
        assert!(view.select_story(story(8863)));
        assert!(view.is_showing_story(8863));
        assert!(view.go_back());
        assert_eq!(view, ViewState::Feed);
    }

    #[test]
    fn test_back_never_restores_bookmarks() {
        let mut view = ViewState::new();
        view.toggle_bookmarks_view();
        view.toggle_bookmarks_view();
        view.select_story(story(1));
        view.go_back();
        assert_eq!(view, ViewState::Feed);
    }

    #[test]
    fn test_bookmarks_toggle_round_trip() {
        let mut view = ViewState::new();
        assert!(view.toggle_bookmarks_view());
        assert_eq!(view, ViewState::Bookmarks);
        assert!(view.toggle_bookmarks_view());
        assert_eq!(view, ViewState::Feed);
    }

    #[test]
    fn test_story_detail_unreachable_from_bookmarks() {
        let mut view = ViewState::new();
        view.toggle_bookmarks_view();
        assert!(!view.select_story(story(1)));
        assert_eq!(view, ViewState::Bookmarks);
    }

    #[test]
    fn test_detail_ignores_bookmarks_toggle_and_reselect() {
        let mut view = ViewState::new();
        view.select_story(story(1));
        assert!(!view.toggle_bookmarks_view());
        assert!(!view.select_story(story(2)));
        assert!(view.is_showing_story(1));
        assert!(!view.is_showing_story(2));
    }

    #[test]
    fn test_go_back_outside_detail_is_noop() {
        let mut view = ViewState::new();
        assert!(!view.go_back());
        assert_eq!(view, ViewState::Feed);

        view.toggle_bookmarks_view();
        assert!(!view.go_back());
        assert_eq!(view, ViewState::Bookmarks);
    }
}
