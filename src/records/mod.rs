//! Contribution history: building, editing, and spreadsheet import/export

mod builder;
mod editor;
mod record;
pub mod io;

pub use builder::build_records;
pub use editor::{copy_forward, index_of_year, update_record};
pub use io::{export_records, import_records, import_warnings, read_records, write_records};
pub use record::{ContributionRecord, RecordEdit};
