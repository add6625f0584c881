//! Catalog file loading.
//!
//! Reads the reserved-range catalog once at startup. Records that do not have the
//! expected shape are dropped so one bad entry cannot hide the rest of the file.

use crate::models::ReservedRange;
use log::Level;
use serde_json::Value;
use std::error::Error;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../reserved_ip.json");

/// Parse a catalog from JSON text.
///
/// # Returns
/// * `Ok(Vec<ReservedRange>)` - Every well-formed record, in file order
/// * `Err` - If the text is not a JSON array
pub fn parse_catalog(json: &str) -> Result<Vec<ReservedRange>, Box<dyn Error>> {
    let records: Vec<Value> =
        serde_json::from_str(json).map_err(|e| format!("Error parsing catalog JSON: {e}"))?;

    let mut catalog = Vec::with_capacity(records.len());
    for (i, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<ReservedRange>(record) {
            Ok(entry) => catalog.push(entry),
            Err(e) => log::warn!("Skipping catalog record #{i}: {e}"),
        }
    }
    Ok(catalog)
}

/// Read the catalog from a file.
///
/// # Arguments
/// * `catalog_file` - Path to the JSON catalog
pub fn read_catalog(catalog_file: &Path) -> Result<Vec<ReservedRange>, Box<dyn Error>> {
    let json = std::fs::read_to_string(catalog_file)
        .map_err(|e| format!("Error reading catalog {}: {e}", catalog_file.display()))?;
    log::info!("Reading catalog file: {}", catalog_file.display());
    parse_catalog(&json)
}

/// The catalog compiled into the binary.
pub fn builtin_catalog() -> Result<Vec<ReservedRange>, Box<dyn Error>> {
    parse_catalog(BUILTIN_CATALOG)
}

// Configured path: warn. Default path: info.
fn fallback_level(explicit: bool) -> Level {
    if explicit {
        Level::Warn
    } else {
        Level::Info
    }
}

/// Read the catalog from a file, falling back to the built-in copy.
///
/// Never fails: with neither source usable the catalog is empty and no annotations
/// are shown.
///
/// # Arguments
/// * `catalog_file` - Path to the JSON catalog
/// * `explicit` - The path was configured rather than defaulted
pub fn load_catalog(catalog_file: &Path, explicit: bool) -> Vec<ReservedRange> {
    match read_catalog(catalog_file) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::log!(fallback_level(explicit), "{e}, using built-in catalog");
            builtin_catalog().unwrap_or_else(|e| {
                log::error!("Built-in catalog unusable: {e}");
                Vec::new()
            })
        }
    }
}
