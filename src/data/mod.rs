//! Loading quiz records from CSV.

mod loader;

pub use loader::{LoadError, ParsePolicy, load_records, load_records_from_path};
