use std::fs;
use std::path::Path;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::MenuItem;

/// Load a catalog from a JSON array of menu items.
///
/// The file is validated the same way as the built-in table.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let items: Vec<MenuItem> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), items = items.len(), "loaded catalog file");
    Catalog::new(items)
}

/// Save a catalog as a pretty-printed JSON array.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.items())?;
    fs::write(path, json)?;
    Ok(())
}
