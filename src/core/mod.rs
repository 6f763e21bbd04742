// Core business logic module

pub mod config;
pub mod denylist;
pub mod fetcher;
pub mod playlist;
pub mod writer;

// Re-export commonly used items
pub use config::Config;
pub use denylist::Denylist;
pub use fetcher::PlaylistFetcher;
pub use playlist::{transform, Transformed};
pub use writer::write_playlist;
