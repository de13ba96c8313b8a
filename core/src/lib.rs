// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # typebelow core
//!
//! The line navigation and resume engine behind the `typebelow` binary. The binary
//! reveals a text source one line at a time and waits for the user to type a line
//! below it. When the user closes the terminal input (`Ctrl+D`), it prints a command
//! that resumes at the exact line they stopped on.
//!
//! The pieces, leaves first:
//!
//! | Module                 | What it does                                                |
//! | ---------------------- | ----------------------------------------------------------- |
//! | [`mod@source_buffer`]  | Owns the ingested bytes, counts lines, finds line offsets.  |
//! | [`mod@line_cursor`]    | Persistent byte offset that walks the buffer line by line.  |
//! | [`mod@starting_line`]  | Validates `-s` specs, including count-from-end negatives.   |
//! | [`mod@terminal_layout`]| Anchors the prompt at ~40% of the screen height.            |
//! | [`mod@session`]        | The reveal / await input state machine and resume hint.     |
//!
//! Data flow: raw bytes → [`SourceBuffer`] → [`resolve_starting_line`] →
//! [`LineCursor::advance_to`] → [`SessionLoop::run`].
//!
//! The ambient modules are [`mod@common`] (errors, [`miette`] report handler),
//! [`mod@decl_macros`], [`mod@log`] ([`tracing`] setup), [`mod@terminal_io`] (the
//! interactive terminal device) and [`mod@test_fixtures`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod common;
pub mod decl_macros;
pub mod line_cursor;
pub mod log;
pub mod session;
pub mod source_buffer;
pub mod starting_line;
pub mod terminal_io;
pub mod terminal_layout;
pub mod test_fixtures;

// Re-export.
pub use common::*;
pub use line_cursor::*;
pub use log::*;
pub use session::*;
pub use source_buffer::*;
pub use starting_line::*;
pub use terminal_io::*;
pub use terminal_layout::*;
pub use test_fixtures::*;
