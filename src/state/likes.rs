use std::collections::HashSet;

use crate::models::{Post, PostId};

/// Posts the current viewer has liked. One implicit viewer per process, so
/// this records whether the toggle is on, not who liked what.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LikeTracker {
    liked: HashSet<PostId>,
}

impl LikeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership for `id` and returns whether it is now liked.
    pub fn toggle_like(&mut self, id: &PostId) -> bool {
        let liked = if self.liked.remove(id) {
            false
        } else {
            self.liked.insert(id.clone());
            true
        };
        log::debug!("post {} liked: {}", id, liked);
        liked
    }

    pub fn is_liked(&self, id: &PostId) -> bool {
        self.liked.contains(id)
    }

    pub fn effective_like_count(&self, post: &Post) -> u32 {
        post.base_likes() + u32::from(self.is_liked(post.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PostCollection;

    fn demo() -> PostCollection {
        PostCollection::with_demo_posts(500)
    }

    #[test]
    fn single_toggle_changes_count_by_one() {
        let posts = demo();
        let post = &posts.list_all()[0];
        let mut likes = LikeTracker::new();

        assert_eq!(likes.effective_like_count(post), 5);
        assert!(likes.toggle_like(post.id()));
        assert_eq!(likes.effective_like_count(post), 6);
        assert_eq!(post.base_likes(), 5);
    }

    #[test]
    fn double_toggle_restores_count() {
        let posts = demo();
        let post = &posts.list_all()[1];
        let mut likes = LikeTracker::new();

        let before = likes.effective_like_count(post);
        likes.toggle_like(post.id());
        assert!(!likes.toggle_like(post.id()));
        assert_eq!(likes.effective_like_count(post), before);
        assert!(!likes.is_liked(post.id()));
    }

    #[test]
    fn likes_are_per_post() {
        let posts = demo();
        let (first, second) = (&posts.list_all()[0], &posts.list_all()[1]);
        let mut likes = LikeTracker::new();

        likes.toggle_like(first.id());
        assert!(likes.is_liked(first.id()));
        assert_eq!(likes.effective_like_count(second), second.base_likes());
    }

    #[test]
    fn unknown_ids_can_be_toggled() {
        let mut likes = LikeTracker::new();
        let id = PostId::new("gone");
        assert!(likes.toggle_like(&id));
        assert!(likes.is_liked(&id));
    }
}
