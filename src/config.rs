//! Tunables for the feed and its presentation.

#[derive(Clone, Debug, PartialEq)]
pub struct FeedConfig {
    /// Ceiling on post length, in characters.
    pub max_post_chars: usize,
    /// Pause between pressing "Post" and the post landing in the feed.
    pub post_delay_ms: u32,
    pub toast_ms: u32,
    /// How many posts the profile page lists under "Recent Posts".
    pub profile_recent_posts: usize,
    pub seed_demo_posts: bool,
    pub log_level: log::Level,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_post_chars: 500,
            post_delay_ms: 500,
            toast_ms: 3000,
            profile_recent_posts: 5,
            seed_demo_posts: true,
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}
