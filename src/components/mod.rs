pub mod auth;
pub mod feed;
pub mod header;
pub mod not_found;
pub mod post_creator;
pub mod post_feed;
pub mod profile;
pub mod toaster;
