//! Configuration loading and management for roster extraction.
//!
//! # Example
//!
//! ```no_run
//! use shift_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Name pattern: {}", config.scanner().name_pattern);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::ScannerConfig;
