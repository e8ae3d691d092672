//! CLI command handlers. Each command is in its own file.

mod compare;
mod completions;
mod generate;
mod select;

pub use compare::run_compare;
pub use completions::{run_completions, run_man};
pub use generate::run_generate;
