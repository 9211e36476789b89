mod client;
mod content;
mod feed_url;
pub mod models;

pub use client::*;
pub use content::*;
pub use feed_url::FeedUrl;
