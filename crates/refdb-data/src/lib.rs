#![deny(unsafe_code)]

pub mod csv;
pub mod error;
pub mod json;
pub mod loaders;
pub mod paths;

pub use crate::error::DataError;
pub use crate::loaders::{EMBEDDED_DATABASE, load_catalog, load_embedded_catalog, load_from_source};
pub use crate::paths::{DATA_ENV_VAR, DataSource, resolve_data_source};
