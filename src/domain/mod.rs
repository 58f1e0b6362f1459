pub mod bookmark;
pub mod item;
pub mod view;

pub use bookmark::Bookmark;
pub use item::{hours_ago, Item, ItemKind};
pub use view::ViewState;

/// Number of ranked stories shown per load.
pub const FEED_SIZE: usize = 10;

/// The top stories that resolved in one load cycle, in ranking order.
pub type FeedWindow = Vec<Item>;
