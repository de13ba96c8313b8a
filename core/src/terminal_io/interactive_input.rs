// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// What came back from one blocking read on the interactive channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadLineOutcome {
    /// The typed text, without its line terminator.
    Line(String),
    /// The user closed the stream (`Ctrl+D`, `Ctrl+Z`), or reading failed. Either way
    /// the session is interrupted, this is not an error.
    EndOfInput,
}

/// The interactive channel the user types into. It is bound to the controlling terminal,
/// independent of whichever stream supplied the source text, so piping text in on stdin
/// does not consume it.
///
/// See [`crate::TtyInputDevice`] for the real one, and [`crate::InteractiveInputMock`]
/// for tests.
pub trait InteractiveInput {
    /// Block until a whole line is available or the stream is closed.
    fn read_line(&mut self) -> ReadLineOutcome;
}
