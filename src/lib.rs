#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

use wasm_bindgen::prelude::*;

pub use config::FeedConfig;
pub use error::PostError;
pub use models::{Credentials, Post, PostId, User};
pub use state::{AppState, LikeTracker, PostCollection, Session, SessionStore};

// Use `wee_alloc` as the global allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    let config = FeedConfig::default();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    yew::start_app::<app::App>();
    Ok(())
}
