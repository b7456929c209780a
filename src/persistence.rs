// 💾 Catalog persistence - whole-file JSON read/write
//
// Writes are pretty-printed and overwrite in place (no temp file, no rename).
// Every I/O or JSON failure surfaces as CatalogError::Persistence with its cause.

use crate::entities::Catalog;
use crate::error::{CatalogError, CatalogResult};
use std::fs;
use std::path::Path;

impl Catalog {
    /// Serialize this catalog as indented JSON at `path`, creating or
    /// overwriting the file.
    pub fn write_to_json<P: AsRef<Path>>(&self, path: P) -> CatalogResult<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(CatalogError::invalid_argument(
                "File path to write cannot be empty",
            ));
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CatalogError::persistence(path, e))?;
        fs::write(path, json).map_err(|e| CatalogError::persistence(path, e))?;

        tracing::debug!(
            path = %path.display(),
            technologies = self.technologies.len(),
            "Catalog written"
        );
        Ok(())
    }

    /// Load a catalog from the JSON file at `path`.
    ///
    /// Relative paths are resolved against the current directory first.
    /// Keys missing from the document come back empty.
    pub fn read_from_json<P: AsRef<Path>>(path: P) -> CatalogResult<Catalog> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(CatalogError::invalid_argument(
                "File path to read cannot be empty",
            ));
        }

        let path = std::path::absolute(path).map_err(|e| CatalogError::persistence(path, e))?;

        let content =
            fs::read_to_string(&path).map_err(|e| CatalogError::persistence(&path, e))?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(|e| CatalogError::persistence(&path, e))?;

        tracing::debug!(
            path = %path.display(),
            technologies = catalog.technologies.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }
}

// ============================================================================
// TESTS
// ============================================================================
