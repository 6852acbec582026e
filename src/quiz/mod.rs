//! The quiz core: session state machine + classifier.
//!
//! Everything in here is pure, synchronous and free of I/O so it can be
//! tested without a terminal or data files. The front-ends (CLI prompt and
//! TUI) only drive these types and render their outputs.

pub mod classify;
pub mod session;

pub use classify::{ClassifyError, classify};
pub use session::{QuizSession, SessionError, SessionState};
