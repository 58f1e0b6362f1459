use serde::{Deserialize, Serialize};

use crate::domain::Item;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub url: String,
    pub title: String,
}

impl Bookmark {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }

    pub fn from_item(item: &Item) -> Self {
        Self::new(item.link(), item.display_title())
    }
}
