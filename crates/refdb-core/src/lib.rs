//! View layer over the reference database catalog.
//!
//! [`DatabaseView`] owns the page state (the displayed subset, the search
//! status and which sections are expanded). Everything else here is pure:
//! [`filter_records`] for the query scan, [`running_totals`] for the
//! per-row fold and [`RecordTable`] for the expanded section contents.

pub mod filter;
pub mod format;
pub mod table;
pub mod totals;
pub mod view;

pub use filter::{SearchState, filter_indices, filter_records};
pub use format::format_grouped;
pub use table::{RecordTable, TableRow};
pub use totals::running_totals;
pub use view::{DatabaseView, Section};
