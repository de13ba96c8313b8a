// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use super::InvocationMode;

/// A literal, copy-pasteable command that restarts at [`Self::line`], eg:
/// `typebelow -s 3 notes.txt`, `typebelow -s 3 -` or `typebelow -s 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeHint {
    pub program: String,
    pub line: usize,
    pub mode: InvocationMode,
}

impl ResumeHint {
    #[must_use]
    pub fn new(program: impl Into<String>, line: usize, mode: InvocationMode) -> Self {
        Self {
            program: program.into(),
            line,
            mode,
        }
    }
}

impl Display for ResumeHint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} -s {}", self.program, self.line)?;
        if let Some(source_arg) = self.mode.source_arg() {
            write!(f, " {source_arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_file_mode() {
        let hint = ResumeHint::new("typebelow", 3, InvocationMode::File("notes.txt".into()));
        assert_eq!(hint.to_string(), "typebelow -s 3 notes.txt");
    }

    #[test]
    fn test_pipe_mode() {
        let hint = ResumeHint::new("./typebelow", 12, InvocationMode::Pipe);
        assert_eq!(hint.to_string(), "./typebelow -s 12 -");
    }

    #[test]
    fn test_clipboard_mode_has_no_source_arg() {
        let hint = ResumeHint::new("typebelow", 1, InvocationMode::Clipboard);
        assert_eq!(hint.to_string(), "typebelow -s 1");
    }
}
