//! Terminal output formatting.
//!
//! We keep all formatting in one place so:
//! - the quiz core stays free of presentation concerns
//! - output changes are localized (important for future snapshot tests)

pub mod format;
pub mod strategies;

pub use format::{format_catalog, format_result, format_scores, format_type_card};
pub use strategies::{StrategyTab, format_strategy};
