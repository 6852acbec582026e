//! `buyer-compass` library crate.
//!
//! The binary (`compass`) is a thin wrapper around this library so that:
//!
//! - the quiz core (session + classifier) is testable without a terminal
//! - modules are reusable (e.g., future web front-end, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod quiz;
pub mod report;
pub mod tui;
