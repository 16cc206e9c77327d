use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use refdb_model::Catalog;

use crate::error::DataError;
use crate::paths::DataSource;

/// The dataset shipped with the binary.
pub const EMBEDDED_DATABASE: &str = include_str!("../data/database.json");

const EMBEDDED_NAME: &str = "<embedded>";

/// Load the catalog from a resolved source.
pub fn load_from_source(source: &DataSource) -> Result<Catalog, DataError> {
    match source {
        DataSource::Embedded => load_embedded_catalog(),
        DataSource::File(path) => load_catalog(path),
    }
}

pub fn load_embedded_catalog() -> Result<Catalog, DataError> {
    let records = crate::json::parse_records(EMBEDDED_DATABASE)
        .map_err(|source| DataError::json(EMBEDDED_NAME, source))?;
    let catalog = Catalog::new(records);
    info!(
        source = EMBEDDED_NAME,
        record_count = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Load a catalog from a `.json` or `.csv` file.
pub fn load_catalog(path: &Path) -> Result<Catalog, DataError> {
    let records = match dataset_format(path) {
        Some(DatasetFormat::Json) => {
            let text = std::fs::read_to_string(path).map_err(|source| DataError::io(path, source))?;
            crate::json::parse_records(&text).map_err(|source| DataError::json(path, source))?
        }
        Some(DatasetFormat::Csv) => {
            let file = File::open(path).map_err(|source| DataError::io(path, source))?;
            crate::csv::parse_records(file).map_err(|source| DataError::csv(path, source))?
        }
        None => {
            return Err(DataError::UnsupportedFormat {
                path: PathBuf::from(path),
            });
        }
    };
    debug!(path = %path.display(), raw_records = records.len(), "dataset parsed");
    let catalog = Catalog::new(records);
    info!(
        source = %path.display(),
        record_count = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DatasetFormat {
    Json,
    Csv,
}

fn dataset_format(path: &Path) -> Option<DatasetFormat> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "json" => Some(DatasetFormat::Json),
        "csv" => Some(DatasetFormat::Csv),
        _ => None,
    }
}
