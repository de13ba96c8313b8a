// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DEFAULT_TERMINAL_HEIGHT, TerminalControl};
use crate::{CommonResult, LockedOutputDevice, throws};

/// Keeps the input prompt anchored at ~40% of the terminal height below the line that
/// was just revealed, no matter how long that line was. It is recomputed for every line
/// since the terminal can be resized in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalFrame {
    pub height: u16,
    pub pad_lines: u16,
}

/// `max(1, floor(height * 0.4))`.
#[must_use]
pub fn compute_pad(height: u16) -> u16 {
    let pad = u32::from(height) * 2 / 5;
    u16::try_from(pad).unwrap_or(u16::MAX).max(1)
}

impl TerminalFrame {
    #[must_use]
    pub fn new(height: u16) -> Self {
        Self {
            height,
            pad_lines: compute_pad(height),
        }
    }

    /// Ask `control` for the height. If that fails, or reports zero rows (eg: not a
    /// TTY), fall back to [`DEFAULT_TERMINAL_HEIGHT`] rather than failing the session.
    #[must_use]
    pub fn query(control: &dyn TerminalControl) -> Self {
        let height = match control.query_height() {
            Ok(rows) if rows > 0 => rows,
            Ok(_) => DEFAULT_TERMINAL_HEIGHT,
            Err(err) => {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "Could not query terminal height, using default",
                    default_height = %DEFAULT_TERMINAL_HEIGHT,
                    error = %err
                );
                DEFAULT_TERMINAL_HEIGHT
            }
        };
        Self::new(height)
    }

    /// Emit [`Self::pad_lines`] blank lines and move the cursor back up by the same
    /// amount. The scrollback above is preserved and the prompt lands on a stable row.
    ///
    /// # Errors
    ///
    /// Returns an error if `out` can't be written to or flushed.
    pub fn position_prompt(
        &self,
        out: LockedOutputDevice<'_>,
        control: &dyn TerminalControl,
    ) -> CommonResult<()> {
        use miette::IntoDiagnostic;

        throws!({
            for _ in 0..self.pad_lines {
                out.write_all(b"\n").into_diagnostic()?;
            }
            control.move_cursor_up(out, self.pad_lines)?;
            out.flush().into_diagnostic()?;
        });
    }
}
