pub mod post;
pub mod user;

pub use post::{can_submit, format_time_ago, validate_content, Post, PostId};
pub use user::{Credentials, User};
