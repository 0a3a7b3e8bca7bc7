//! # Laragen Core
//!
//! Core types and helpers for Laragen.
//!
//! This crate provides the foundational building blocks used throughout
//! the Laragen workspace, including:
//!
//! - **Errors**: Unified error handling with `GeneratorError` and `GeneratorResult`
//! - **Naming**: Word casing and pluralization rules behind class and file names
//! - **Config**: The target path layout and `laragen.toml` loading
//!

pub mod config;
pub mod error;
pub mod naming;

// Re-export commonly used items at crate root
pub use config::{CONFIG_FILE, PathsConfig};
pub use error::{GeneratorError, GeneratorResult};
pub use naming::{capitalize_words, normalize, pluralize};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
