//! The feed's state model: who is signed in, which posts exist, and which
//! of them the viewer has liked. Components read it and send intents back
//! through these three stores; nothing here touches the DOM.

mod likes;
mod posts;
mod session;

pub use likes::LikeTracker;
pub use posts::PostCollection;
pub use session::{Session, SessionStore};

use crate::config::FeedConfig;

/// Root application state, owned by the top-level component.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub session: SessionStore,
    pub posts: PostCollection,
    pub likes: LikeTracker,
}

impl AppState {
    pub fn new(config: &FeedConfig) -> Self {
        let posts = if config.seed_demo_posts {
            PostCollection::with_demo_posts(config.max_post_chars)
        } else {
            PostCollection::new(config.max_post_chars)
        };
        Self {
            session: SessionStore::new(),
            posts,
            likes: LikeTracker::new(),
        }
    }
}
