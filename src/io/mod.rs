//! I/O: data-document fetching/parsing and progress persistence.
//!
//! Nothing in here is consulted after startup except the progress writer;
//! the catalog and question bank are loaded once and read-only thereafter.

pub mod load;
pub mod progress;
pub mod source;
