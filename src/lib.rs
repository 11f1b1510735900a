//! Personal book library.
//!
//! A [`BookStore`] owns the catalog and mirrors it to a durable
//! [`SnapshotSlot`] after every change; [`FieldValidator`] checks book forms
//! before they reach the store.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod query;
pub mod seed;
pub mod stats;
pub mod store;
pub mod transfer;
pub mod validation;

use std::path::Path;

pub use config::LibraryConfig;
pub use db::{MemorySlot, SnapshotSlot, SqliteSlot};
pub use error::{Result, StoreError};
pub use models::{Book, BookDraft, BookStatus, Genre};
pub use query::{FilterOptions, SearchFilters, SortKey, SortOrder};
pub use stats::LibraryStats;
pub use store::BookStore;
pub use validation::{BookField, BookForm, FieldError, FieldValidator, ValidationContext};

/// Open the SQLite-backed library under `data_dir`.
pub fn open_library(data_dir: &Path, config: LibraryConfig) -> Result<BookStore<SqliteSlot>> {
    config.validate()?;
    let db_path = config.resolve_database_path(data_dir);
    let slot = SqliteSlot::open(&db_path)?;
    log::info!("opened library database at {}", db_path.display());
    Ok(BookStore::open(slot, config))
}
