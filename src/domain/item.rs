use chrono::{DateTime, Utc};
use html_escape::decode_html_entities;
use serde::{Deserialize, Serialize};

/// Discussion link used when a story carries no external URL (Ask HN, polls).
pub const DISCUSSION_URL: &str = "https://news.ycombinator.com/item?id=";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Story,
    Comment,
    Job,
    Poll,
    PollOpt,
}

/// A resolved story or comment. Never mutated once it leaves the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub by: String,
    /// Creation time in unix seconds
    pub time: i64,
    pub score: Option<i64>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub kids: Option<Vec<u64>>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub dead: bool,
}

impl Item {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(Untitled)")
    }

    pub fn comment_ids(&self) -> &[u64] {
        self.kids.as_deref().unwrap_or(&[])
    }

    pub fn comment_count(&self) -> usize {
        self.comment_ids().len()
    }

    /// The link a bookmark for this item is keyed by.
    pub fn link(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("{}{}", DISCUSSION_URL, self.id),
        }
    }

    pub fn hours_ago(&self, now: DateTime<Utc>) -> i64 {
        hours_ago(self.time, now)
    }
}

/// Whole hours elapsed between `time` (unix seconds) and `now`, rounded down.
pub fn hours_ago(time: i64, now: DateTime<Utc>) -> i64 {
    (now.timestamp() - time).div_euclid(3600)
}

/// Flatten comment HTML to text: `<p>` starts a new paragraph, other tags
/// are dropped and entities decoded.
pub fn plain_text(html: &str) -> String {
    let mut result = String::new();
    let mut tag = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                let name = tag.trim_start_matches('/').to_ascii_lowercase();
                if name == "p" || name.starts_with("p ") {
                    result.push_str("\n\n");
                }
            }
            _ if in_tag => tag.push(c),
            _ => result.push(c),
        }
    }

    decode_html_entities(result.trim()).to_string()
}
