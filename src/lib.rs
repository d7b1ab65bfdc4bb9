//! Audiobook Catalog Library
//!
//! A Rust library for browsing a personal audiobook collection exported by
//! the Audible Library Extractor as "ALE-spreadsheet-library-v1.csv".
//!
//! This library provides tools for:
//! - Parsing the fixed-layout export with a quote-aware line splitter
//! - Normalizing series names and deriving numeric sort keys
//! - Filtering with mutually exclusive, precondition-checked selectors
//! - Sorting with per-column compound keys and empty-last rules
//! - Annotating ordered views with author-aware presentation stripes

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog;
        pub mod filter_engine;
        pub mod grouping;
        pub mod library_parser;
        pub mod sort_engine;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Book, BookFields, BookId, ProgressCategory, SortColumn, SortDirection};
pub use app::services::catalog::{Catalog, SelectionOutcome};
pub use config::CatalogConfig;
pub use error::{Error, Result};
