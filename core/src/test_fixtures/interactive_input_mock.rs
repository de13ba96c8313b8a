// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::VecDeque;

use crate::{InteractiveInput, ReadLineOutcome};

/// Replays a scripted list of typed lines, then reports
/// [`ReadLineOutcome::EndOfInput`] forever after.
#[derive(Debug, Clone, Default)]
pub struct InteractiveInputMock {
    pub lines: VecDeque<String>,
    /// How many times [`InteractiveInput::read_line`] was called.
    pub read_count: usize,
}

impl InteractiveInputMock {
    #[must_use]
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            read_count: 0,
        }
    }

    /// The user hits `Ctrl+D` on the very first prompt.
    #[must_use]
    pub fn immediate_end_of_input() -> Self { Self::default() }
}

impl InteractiveInput for InteractiveInputMock {
    fn read_line(&mut self) -> ReadLineOutcome {
        self.read_count += 1;
        match self.lines.pop_front() {
            Some(line) => ReadLineOutcome::Line(line),
            None => ReadLineOutcome::EndOfInput,
        }
    }
}
