use chrono::{DateTime, Duration, Utc};

use crate::error::PostError;
use crate::models::{validate_content, Post, PostId};

/// Every post in the process, newest first. Not scoped to a session.
#[derive(Clone, Debug, PartialEq)]
pub struct PostCollection {
    posts: Vec<Post>,
    next_seq: u64,
    max_chars: usize,
}

impl PostCollection {
    pub fn new(max_chars: usize) -> Self {
        Self {
            posts: Vec::new(),
            next_seq: 0,
            max_chars,
        }
    }

    /// A collection holding the two welcome posts shown on first load.
    pub fn with_demo_posts(max_chars: usize) -> Self {
        Self::with_demo_posts_at(max_chars, Utc::now())
    }

    pub fn with_demo_posts_at(max_chars: usize, now: DateTime<Utc>) -> Self {
        let mut collection = Self::new(max_chars);
        collection.posts = vec![
            Post::new(
                PostId::new("1"),
                "Welcome to PeerPals! This is a demo post to show how the platform works. \
                 Posts, likes and your profile live in memory for as long as this tab stays open."
                    .to_string(),
                "PeerPals Team".to_string(),
                now - Duration::hours(2),
            )
            .with_counts(5, 2),
            Post::new(
                PostId::new("2"),
                "Just built an amazing Yew component! The satisfaction of clean, reusable code \
                 never gets old. What's everyone working on today?"
                    .to_string(),
                "Sarah Chen".to_string(),
                now - Duration::hours(4),
            )
            .with_counts(12, 4),
        ];
        collection
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn create_post(&mut self, author: &str, raw_content: &str) -> Result<&Post, PostError> {
        self.create_post_at(author, raw_content, Utc::now())
    }

    /// Validates `raw_content` and, when it passes, puts the new post at the
    /// front of the feed. A rejection leaves the collection untouched.
    pub fn create_post_at(
        &mut self,
        author: &str,
        raw_content: &str,
        now: DateTime<Utc>,
    ) -> Result<&Post, PostError> {
        let content = match validate_content(raw_content, self.max_chars) {
            Ok(content) => content.to_string(),
            Err(e) => {
                log::debug!("rejected post from {}: {}", author, e);
                return Err(e);
            }
        };

        let id = PostId::new(format!("{}-{}", now.timestamp_millis(), self.next_seq));
        self.next_seq += 1;

        log::info!("{} posted {}", author, id);
        self.posts
            .insert(0, Post::new(id, content, author.to_string(), now));
        Ok(&self.posts[0])
    }

    pub fn list_all(&self) -> &[Post] {
        &self.posts
    }

    pub fn list_by_author(&self, name: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|post| post.author() == name)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id() == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn create_prepends_trimmed_post() {
        let mut posts = PostCollection::new(500);
        posts.create_post("Sarah", "first").unwrap();
        let created = posts.create_post("Omar", "  second  ").unwrap().clone();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts.list_all()[0], created);
        assert_eq!(created.content(), "second");
        assert_eq!(created.author(), "Omar");
        assert_eq!(created.base_likes(), 0);
        assert_eq!(created.base_comments(), 0);
        assert_eq!(posts.list_all()[1].content(), "first");
    }

    #[test]
    fn invalid_content_leaves_collection_unchanged() {
        let mut posts = PostCollection::with_demo_posts(500);
        let before = posts.clone();

        assert_eq!(posts.create_post("Sarah", "   "), Err(PostError::Empty));
        assert!(posts.create_post("Sarah", &"x".repeat(501)).is_err());
        assert_eq!(posts, before);
    }

    #[test]
    fn boundary_length_is_accepted() {
        let mut posts = PostCollection::new(500);
        assert!(posts.create_post("Sarah", &"x".repeat(500)).is_ok());
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn ids_are_unique_within_the_same_millisecond() {
        let now = Utc::now();
        let mut posts = PostCollection::new(500);
        for i in 0..20 {
            posts.create_post_at("Sarah", &format!("post {}", i), now).unwrap();
        }
        let ids: HashSet<_> = posts.list_all().iter().map(|p| p.id().clone()).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn list_by_author_keeps_relative_order() {
        let mut posts = PostCollection::new(500);
        for (author, content) in [("Sarah", "a"), ("Omar", "b"), ("Sarah", "c"), ("Omar", "d")] {
            posts.create_post(author, content).unwrap();
        }

        let sarah: Vec<_> = posts
            .list_by_author("Sarah")
            .iter()
            .map(|p| p.content().to_string())
            .collect();
        assert_eq!(sarah, vec!["c", "a"]);
        assert!(posts.list_by_author("sarah").is_empty());
    }

    #[test]
    fn demo_posts_are_newest_first() {
        let now = Utc::now();
        let posts = PostCollection::with_demo_posts_at(500, now);
        let all = posts.list_all();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id().as_str(), "1");
        assert_eq!(all[0].base_likes(), 5);
        assert_eq!(all[1].author(), "Sarah Chen");
        assert!(all[0].created_at() > all[1].created_at());
    }

    #[test]
    fn get_finds_by_id() {
        let posts = PostCollection::with_demo_posts(500);
        let id = PostId::new("2");
        assert_eq!(posts.get(&id).map(|p| p.base_likes()), Some(12));
        assert!(posts.get(&PostId::new("missing")).is_none());
    }
}
