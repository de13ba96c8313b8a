// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use miette::IntoDiagnostic;

use crate::TerminalControl;

/// A [`TerminalControl`] that always reports the same height. `None` behaves like a
/// terminal whose size can't be queried. Cursor movement is written as a readable
/// marker, eg: `<up 8>`, so tests can assert on it without decoding escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHeightTerminal {
    pub height: Option<u16>,
}

impl FixedHeightTerminal {
    #[must_use]
    pub fn new(height: u16) -> Self {
        Self {
            height: Some(height),
        }
    }

    #[must_use]
    pub fn unknown_size() -> Self { Self { height: None } }
}

impl TerminalControl for FixedHeightTerminal {
    fn query_height(&self) -> miette::Result<u16> {
        self.height
            .ok_or_else(|| miette::miette!("terminal size is not available"))
    }

    fn move_cursor_up(&self, out: &mut dyn Write, rows: u16) -> miette::Result<()> {
        write!(out, "<up {rows}>").into_diagnostic()
    }
}
