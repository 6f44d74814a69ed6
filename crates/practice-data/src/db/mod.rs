//! Database integration for loading generated tables.
//!
//! The [`Loader`] replaces destination tables wholesale with generated rows;
//! [`create_indexes`] adds secondary indexes once the tables exist.

mod indexes;
mod loader;
mod records;
pub mod table;

pub use indexes::{IndexSpec, PRACTICE_INDEXES, create_indexes};
pub use loader::{LoadError, Loader};
pub use table::{Column, Record, SqlType};
