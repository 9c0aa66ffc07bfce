//! Console output for the batch.

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter, outcome_lines, summary_lines};
