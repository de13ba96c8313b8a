// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The reveal / await input state machine.
//!
//! ```text
//! Start ─► Revealing ─► AwaitingInput ─┬─► Revealing   (typed a line, more remain)
//!                                      ├─► Ended       (typed a line, that was the last)
//!                                      └─► Interrupted (end of input)
//! ```
//!
//! Everything is strictly sequential. The only place the loop blocks is
//! [`InteractiveInput::read_line`], and closing that stream is the only way to cancel.

use miette::IntoDiagnostic;

use super::{InvocationMode, ResumeHint, ui_str};
use crate::{CommonResult, InteractiveInput, LineCursor, LockedOutputDevice,
            ReadLineOutcome, SourceBuffer, TerminalControl, TerminalFrame,
            resolve_starting_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Start,
    Revealing,
    /// `line` is on screen and waiting for the user to type below it.
    AwaitingInput { line: usize, is_last: bool },
    Ended,
    /// `line` was on screen but not completed.
    Interrupted { line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every line from the starting line to the end was revealed and answered.
    Ended { total_lines: usize },
    /// The interactive channel closed. `hint` restarts on the line that was showing.
    Interrupted {
        hint: ResumeHint,
        total_lines: usize,
    },
}

/// Drives a [`LineCursor`] over a [`SourceBuffer`], one line per typed response.
#[derive(Debug)]
pub struct SessionLoop<'a> {
    buffer: &'a SourceBuffer,
    starting_line: usize,
    mode: InvocationMode,
    program: String,
}

impl<'a> SessionLoop<'a> {
    /// Resolve the starting line against `buffer` up front, so that a bad `-s` value is
    /// reported before anything else happens (eg: opening the terminal).
    ///
    /// # Errors
    ///
    /// Returns [`crate::TypeBelowError::EmptyInput`] for an empty buffer, or whatever
    /// [`resolve_starting_line`] reports for the spec.
    pub fn try_new(
        buffer: &'a SourceBuffer,
        maybe_start_spec: Option<&str>,
        mode: InvocationMode,
        program: impl Into<String>,
    ) -> CommonResult<Self> {
        if buffer.is_empty() {
            return Err(crate::TypeBelowError::EmptyInput.into());
        }
        let starting_line = resolve_starting_line(maybe_start_spec, buffer.line_count())?;
        Ok(Self {
            buffer,
            starting_line,
            mode,
            program: program.into(),
        })
    }

    #[must_use]
    pub fn starting_line(&self) -> usize { self.starting_line }

    #[must_use]
    pub fn total_lines(&self) -> usize { self.buffer.line_count() }

    /// Run until the last line is answered or the user closes the interactive channel.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails. End of input is a normal
    /// [`SessionOutcome::Interrupted`].
    pub fn run(
        &self,
        out: LockedOutputDevice<'_>,
        input: &mut dyn InteractiveInput,
        terminal: &dyn TerminalControl,
    ) -> CommonResult<SessionOutcome> {
        let total_lines = self.total_lines();
        let mut cursor = LineCursor::new();
        let mut state = SessionState::Start;

        loop {
            state = match state {
                SessionState::Start => {
                    cursor.advance_to(self.buffer, self.starting_line);
                    let banner = ui_str::banner_msg(
                        self.mode.label(),
                        self.starting_line,
                        total_lines,
                    );
                    writeln!(out, "{banner}").into_diagnostic()?;
                    SessionState::Revealing
                }

                SessionState::Revealing => {
                    let line = cursor.current_line();
                    let revealed = cursor.reveal_next(self.buffer);

                    out.write_all(revealed.text).into_diagnostic()?;
                    if !revealed.ends_with_new_line() {
                        out.write_all(b"\n").into_diagnostic()?;
                    }

                    let frame = TerminalFrame::query(terminal);
                    frame.position_prompt(out, terminal)?;

                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "👀 Revealed line",
                        line = %line,
                        total_lines = %total_lines,
                        line_len = %revealed.len_without_new_line(),
                        is_last = %revealed.is_last,
                        terminal_height = %frame.height,
                        pad_lines = %frame.pad_lines
                    );

                    SessionState::AwaitingInput {
                        line,
                        is_last: revealed.is_last,
                    }
                }

                SessionState::AwaitingInput { line, is_last } => match input.read_line() {
                    ReadLineOutcome::Line(typed) => {
                        // The typed text isn't graded, only acknowledged.
                        tracing::debug!(
                            message = "⌨️ Line typed",
                            line = %line,
                            typed_len = %typed.len()
                        );
                        out.write_all(b"\n").into_diagnostic()?;
                        if is_last {
                            SessionState::Ended
                        } else {
                            SessionState::Revealing
                        }
                    }
                    ReadLineOutcome::EndOfInput => SessionState::Interrupted { line },
                },

                SessionState::Ended => {
                    let label = self.mode.label();
                    writeln!(out, "{}", ui_str::finished_msg(total_lines, label))
                        .into_diagnostic()?;
                    out.flush().into_diagnostic()?;

                    tracing::info!(
                        message = "🏁 Session ended",
                        total_lines = %total_lines,
                        source = %label
                    );

                    return Ok(SessionOutcome::Ended { total_lines });
                }

                SessionState::Interrupted { line } => {
                    let hint = ResumeHint::new(&self.program, line, self.mode.clone());
                    write!(out, "\n{}\n", ui_str::interrupted_msg(&hint, total_lines))
                        .into_diagnostic()?;
                    out.flush().into_diagnostic()?;

                    tracing::info!(
                        message = "⏸️ Session interrupted",
                        line = %line,
                        total_lines = %total_lines,
                        hint = %hint
                    );

                    return Ok(SessionOutcome::Interrupted { hint, total_lines });
                }
            };
        }
    }
}
