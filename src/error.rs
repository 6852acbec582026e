//! Application-level error type.
//!
//! `AppError` carries a process exit code alongside the message so `main` can
//! map failures to meaningful shell statuses:
//!
//! - `2` - input/usage errors (bad flags, unknown ids, canceled prompts)
//! - `3` - missing or unusable data (empty catalog, classification failures)
//! - `4` - terminal/runtime errors (raw mode, draw failures)
//!
//! Recoverable conditions inside the quiz core use their own typed enums
//! (`quiz::SessionError`, `quiz::ClassifyError`) and are converted to
//! `AppError` only at the command boundary.

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
