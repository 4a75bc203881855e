//! Project ingestion: directory discovery and metadata export loading.
//!
//! Turns a batch directory tree into [`audioqc_model::Project`] records: one
//! item per subdirectory with its files classified by extension, plus the
//! collection management spreadsheet export keyed by item id.

pub mod discovery;
pub mod error;
pub mod export;

pub use discovery::{discover_items, load_project};
pub use error::{IngestError, Result};
pub use export::load_metadata_export;
