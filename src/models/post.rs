use std::fmt;

use chrono::{DateTime, Utc};
use crate::error::PostError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A message in the feed. Content, author and timestamp never change after
/// creation; the like count shown to the viewer is derived by the like tracker.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    id: PostId,
    content: String,
    author: String,
    created_at: DateTime<Utc>,
    base_likes: u32,
    base_comments: u32,
}

impl Post {
    pub(crate) fn new(id: PostId, content: String, author: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content,
            author,
            created_at,
            base_likes: 0,
            base_comments: 0,
        }
    }

    pub(crate) fn with_counts(mut self, likes: u32, comments: u32) -> Self {
        self.base_likes = likes;
        self.base_comments = comments;
        self
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn base_likes(&self) -> u32 {
        self.base_likes
    }

    pub fn base_comments(&self) -> u32 {
        self.base_comments
    }
}

/// Checks raw form input and returns the trimmed content to store.
/// The length limit applies to the untrimmed input, same as the counter
/// shown under the textarea.
pub fn validate_content(raw: &str, max_chars: usize) -> Result<&str, PostError> {
    let len = raw.chars().count();
    if len > max_chars {
        return Err(PostError::TooLong { len, max: max_chars });
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PostError::Empty);
    }
    Ok(trimmed)
}

/// Whether the post form may be submitted. A pending submission blocks
/// another until it lands.
pub fn can_submit(raw: &str, is_pending: bool, max_chars: usize) -> bool {
    !is_pending && validate_content(raw, max_chars).is_ok()
}

pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", hours / 24)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn validate_trims_content() {
        assert_eq!(validate_content("  hello \n", 500), Ok("hello"));
    }

    #[test]
    fn validate_rejects_blank() {
        assert_eq!(validate_content("", 500), Err(PostError::Empty));
        assert_eq!(validate_content(" \t\n ", 500), Err(PostError::Empty));
    }

    #[test]
    fn validate_limit_counts_characters_not_bytes() {
        let at_limit = "é".repeat(500);
        assert!(validate_content(&at_limit, 500).is_ok());

        let over = "é".repeat(501);
        assert_eq!(
            validate_content(&over, 500),
            Err(PostError::TooLong { len: 501, max: 500 })
        );
    }

    #[test]
    fn validate_limit_includes_surrounding_whitespace() {
        let raw = format!(" {} ", "a".repeat(499));
        assert!(matches!(
            validate_content(&raw, 500),
            Err(PostError::TooLong { len: 501, .. })
        ));
    }

    #[test]
    fn submit_blocked_while_pending() {
        assert!(can_submit("hello", false, 500));
        assert!(!can_submit("hello", true, 500));
        assert!(!can_submit("   ", false, 500));
        assert!(!can_submit(&"x".repeat(501), false, 500));
    }

    #[test]
    fn time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(format_time_ago(now - Duration::seconds(30), now), "Just now");
        assert_eq!(format_time_ago(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_time_ago(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(format_time_ago(now - Duration::hours(2), now), "2h ago");
        assert_eq!(format_time_ago(now - Duration::hours(23), now), "23h ago");
        assert_eq!(format_time_ago(now - Duration::hours(49), now), "2d ago");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now = Utc::now();
        assert_eq!(format_time_ago(now + Duration::minutes(10), now), "Just now");
    }
}
