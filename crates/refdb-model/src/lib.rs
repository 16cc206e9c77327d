pub mod catalog;
pub mod record;

pub use catalog::Catalog;
pub use record::{Quantity, Record, Row};
