//! Interactive prompt flow using cliclack (Charm-style inline prompts)
//!
//! Only available when the `tui` feature is enabled.

mod prompts;

pub use prompts::{collect, confirm_project_name, NameDecision};
