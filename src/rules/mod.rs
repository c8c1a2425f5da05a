//! Rule implementations for sheetcheck.
//!
//! Rules are pure functions over finished module analyses and return
//! user-facing issues.
//!
//! - `unused_style`: unreferenced style sheet entries and failed style imports

pub mod unused_style;

pub use unused_style::{check_module, check_unused_style_issues};
