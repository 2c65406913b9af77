//! Command handlers for the CLI.

mod completions;
mod list;
mod range;

pub use completions::handle_completions;
pub use list::handle_list;
pub use range::handle_range;
