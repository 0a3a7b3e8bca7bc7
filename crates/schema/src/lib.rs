//! # Laragen Schema
//!
//! This crate turns raw command line arguments into resolved generation
//! plans. Nothing here touches the file system; a plan either resolves
//! completely or fails before any file is written.
//!
//! ## Core Concepts
//!
//! - **MigrationRequest / MigrationPlan**: A migration name plus column
//!   tokens, resolved into class name, target table, action, and columns
//! - **Action**: What a migration does, read out of its name
//! - **ColumnSpec**: One parsed `field:type[:modifier]` token
//! - **ControllerSpec / MethodSpec**: A controller class and its methods
//! - **AssetSpec**: A css/js file routed by extension
//!

// Module declarations
pub mod action;
pub mod asset;
pub mod column;
pub mod controller;
pub mod migration;
pub mod table;

// Re-export commonly used types at crate root
pub use action::Action;
pub use asset::{AssetKind, AssetSpec};
pub use column::ColumnSpec;
pub use controller::{ControllerSpec, MethodSpec};
pub use migration::{MigrationPlan, MigrationRequest};
pub use table::{TABLE_PLACEHOLDER, infer_table_name};

// Re-export core types that are commonly used with plans
pub use laragen_core::{GeneratorError, GeneratorResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
