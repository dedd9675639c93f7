//! Report data structures for commands.
//!
//! Operations build reports, commands render them to an Output target.

mod check;
mod generate;
mod output;

pub use check::{CheckReport, FileSummary};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};
