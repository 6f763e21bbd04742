// m3uclean library - public API

// Re-export error types
pub mod error;
pub use error::{PlaylistError, Result};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::denylist::Denylist;
pub use crate::core::playlist::{transform, Transformed};

// Initialize logging; diagnostics go to stderr
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
