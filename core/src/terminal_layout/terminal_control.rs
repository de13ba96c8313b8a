// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tcgetwinsize winsize

//! The only two things the session needs from the terminal: how tall it is, and a way to
//! move the cursor up some rows. [`TerminalControl`] is that capability, and
//! [`new_terminal_control`] picks the implementation once at startup based on
//! [`TERMINAL_CONTROL_BACKEND`].

use crossterm::{QueueableCommand, cursor::MoveUp};
use miette::IntoDiagnostic;
use std::io::Write;

pub const DEFAULT_TERMINAL_HEIGHT: u16 = 24;
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

pub trait TerminalControl {
    /// Number of rows in the terminal that `stdout` is attached to.
    ///
    /// # Errors
    ///
    /// Returns an error if the size can't be determined, eg: `stdout` is not a TTY.
    fn query_height(&self) -> miette::Result<u16>;

    /// Move the cursor up by `rows` rows by writing to `out`. Does not flush.
    ///
    /// # Errors
    ///
    /// Returns an error if `out` can't be written to.
    fn move_cursor_up(&self, out: &mut dyn Write, rows: u16) -> miette::Result<()>;
}

/// The terminal backends that can provide [`TerminalControl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalControlBackend {
    /// Cross-platform, native console API on Windows.
    Crossterm,
    /// Raw ANSI escape sequences, size via the `tcgetwinsize` syscall.
    DirectToAnsi,
}

/// On **Linux**, [`DirectToAnsi`] is used.
///
/// [`DirectToAnsi`]: variant@TerminalControlBackend::DirectToAnsi
#[cfg(target_os = "linux")]
pub const TERMINAL_CONTROL_BACKEND: TerminalControlBackend =
    TerminalControlBackend::DirectToAnsi;

/// On **macOS/Windows**, Crossterm is used.
#[cfg(not(target_os = "linux"))]
pub const TERMINAL_CONTROL_BACKEND: TerminalControlBackend =
    TerminalControlBackend::Crossterm;

#[must_use]
pub fn new_terminal_control() -> Box<dyn TerminalControl> {
    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🖥️ Terminal control backend selected",
        backend = ?TERMINAL_CONTROL_BACKEND
    );

    match TERMINAL_CONTROL_BACKEND {
        TerminalControlBackend::DirectToAnsi => Box::new(DirectToAnsiControl),
        TerminalControlBackend::Crossterm => Box::new(CrosstermControl),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DirectToAnsiControl;

impl TerminalControl for DirectToAnsiControl {
    #[cfg(unix)]
    fn query_height(&self) -> miette::Result<u16> {
        let winsize = rustix::termios::tcgetwinsize(std::io::stdout())
            .map_err(|e| miette::miette!("tcgetwinsize failed: {}", e))?;
        Ok(winsize.ws_row)
    }

    /// `tcgetwinsize` is Unix only, so this falls back to crossterm elsewhere.
    #[cfg(not(unix))]
    fn query_height(&self) -> miette::Result<u16> { CrosstermControl.query_height() }

    fn move_cursor_up(&self, out: &mut dyn Write, rows: u16) -> miette::Result<()> {
        if rows == 0 {
            return Ok(());
        }
        write!(out, "{}", cursor_up_sequence(rows)).into_diagnostic()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermControl;

impl TerminalControl for CrosstermControl {
    fn query_height(&self) -> miette::Result<u16> {
        let (_columns, rows) = crossterm::terminal::size().into_diagnostic()?;
        Ok(rows)
    }

    fn move_cursor_up(&self, out: &mut dyn Write, rows: u16) -> miette::Result<()> {
        if rows == 0 {
            return Ok(());
        }
        out.queue(MoveUp(rows)).into_diagnostic()?;
        Ok(())
    }
}

/// CSI `n` A, cursor up.
#[must_use]
pub fn cursor_up_sequence(rows: u16) -> crate::InlineString {
    crate::inline_string!("\x1b[{rows}A")
}
