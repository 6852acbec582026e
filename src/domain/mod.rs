//! Domain types used throughout the app.
//!
//! This module defines:
//!
//! - the external data records (`CustomerType`, `QuizQuestion`)
//! - the loaded, read-only `TypeCatalog`
//! - classification outputs (`ClassificationResult`, `TypeScore`)
//! - UI navigation targets (`Section`) and the persisted progress schema

pub mod types;

pub use types::*;
