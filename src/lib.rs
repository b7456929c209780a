// Tech Catalog - Core Library
// Exposes the catalog model and its JSON persistence for the CLI and tests

pub mod entities;
pub mod error;
pub mod persistence;

// Re-export commonly used types
pub use entities::{Catalog, Technology};
pub use error::{CatalogError, CatalogResult, PersistenceCause};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
