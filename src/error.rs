use thiserror::Error;

/// Why a submitted post was not added to the feed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostError {
    #[error("post content is empty")]
    Empty,

    #[error("post is {len} characters, the limit is {max}")]
    TooLong { len: usize, max: usize },
}
