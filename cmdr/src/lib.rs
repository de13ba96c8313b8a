// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # typebelow
//!
//! Reveal a text source one line at a time, and type each line below it. Useful for
//! typing practice, or for slowly reviewing a document line by line.
//!
//! ```text
//! typebelow notes.txt          # Start at the first line of notes.txt
//! typebelow -s 10 notes.txt    # Start at line 10
//! typebelow -s -2 notes.txt    # Start 2 lines from the end
//! cat notes.txt | typebelow -  # Read piped text
//! typebelow                    # Read the clipboard
//! ```
//!
//! Press `Ctrl+D` to stop. `typebelow` then prints the command that resumes on the line
//! you stopped at, eg: `typebelow -s 42 notes.txt`.
//!
//! Pass `-l` to write a debug log to `log.txt` in the current directory.
//!
//! This crate holds the collaborators around [`typebelow_core`]: argument parsing
//! ([`typebelow::CLIArg`]), ingestion from a file, stdin, or the clipboard
//! ([`typebelow::ingest()`]), and the launcher that hands everything to
//! [`typebelow_core::SessionLoop`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod color_constants;
pub mod common;
pub mod typebelow;

// Re-export.
pub use color_constants::*;
