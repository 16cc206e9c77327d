//! Dataset source resolution.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable for overriding the dataset file.
pub const DATA_ENV_VAR: &str = "REFDB_DATA";

/// Where the catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The dataset compiled into the binary.
    Embedded,
    /// A JSON or CSV file on disk.
    File(PathBuf),
}

/// Resolve the dataset source.
///
/// Resolution order:
/// 1. an explicit path (the `--data` flag)
/// 2. `REFDB_DATA` environment variable
/// 3. the embedded dataset
pub fn resolve_data_source(explicit: Option<PathBuf>) -> DataSource {
    resolve_with(explicit, std::env::var_os(DATA_ENV_VAR))
}

/// An empty `env_value` counts as unset.
fn resolve_with(explicit: Option<PathBuf>, env_value: Option<OsString>) -> DataSource {
    if let Some(path) = explicit {
        return DataSource::File(path);
    }
    match env_value {
        Some(path) if !path.is_empty() => DataSource::File(PathBuf::from(path)),
        _ => DataSource::Embedded,
    }
}
