//! Data export.
mod export;

pub use export::{export_csv, write_csv, ExportRow};
