//! # CLI Layer
//!
//! This is **one possible UI client** for abook, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! - Running `abook` with no arguments lists the first page of contacts.
//! - `abook search` without a keyword prompts for one on stdin.
//! - The book file is `--file`, else `$ABOOK_FILE`, else the configured
//!   `book-file` (`filename.json` in the working directory by default).
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting (columns, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
