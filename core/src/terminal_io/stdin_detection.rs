// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words isatty

use crate::{TERMINAL_CONTROL_BACKEND, TerminalControlBackend};
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinIsPipedResult {
    StdinIsPiped,
    StdinIsNotPiped,
}

/// If you run `echo "test" | typebelow -` or `typebelow - < notes.txt` this returns
/// [`StdinIsPipedResult::StdinIsPiped`]. If stdin is the terminal itself, then there is
/// nothing to read the source text from.
#[must_use]
pub fn is_stdin_piped() -> StdinIsPipedResult {
    let is_tty = match TERMINAL_CONTROL_BACKEND {
        #[cfg(unix)]
        TerminalControlBackend::DirectToAnsi => rustix::termios::isatty(std::io::stdin()),
        #[cfg(not(unix))]
        TerminalControlBackend::DirectToAnsi => std::io::stdin().is_terminal(),
        TerminalControlBackend::Crossterm => std::io::stdin().is_terminal(),
    };
    if is_tty {
        StdinIsPipedResult::StdinIsNotPiped
    } else {
        StdinIsPipedResult::StdinIsPiped
    }
}
