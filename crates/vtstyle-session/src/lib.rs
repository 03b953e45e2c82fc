//! # vtstyle-session
//!
//! Terminal session for vtstyle.
//!
//! This crate provides:
//! - Line reading from the input stream (UTF-8, newline stripped)
//! - Raw and styled writes to the output, error and discard streams
//! - Live terminal window-size queries behind the [`SizeQuery`] capability
//!
//! ## Architecture
//!
//! This is Layer 1 - it depends on vtstyle-core for the escape codec and
//! writes what the codec renders. All I/O is synchronous and blocking.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod session;
pub mod size;

// Re-export commonly used types
pub use session::{read_line_from, Stream, TerminalSession, TerminalSessionBuilder};
pub use size::{FixedSize, NoTerminalSize, SizeQuery, TtySize};
