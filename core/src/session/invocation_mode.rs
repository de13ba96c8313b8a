// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Where the source text came from. It decides the label shown in the banner and the
/// source argument of the resume hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationMode {
    /// Holds the path exactly as the user typed it.
    File(String),
    /// Piped or redirected stdin, `-` on the command line.
    Pipe,
    /// The OS clipboard, no source argument on the command line.
    Clipboard,
}

pub const PIPE_SOURCE_ARG: &str = "-";
pub const PIPE_LABEL: &str = "stdin";
pub const CLIPBOARD_LABEL: &str = "clipboard";

impl InvocationMode {
    /// Human readable name of the source, eg: `notes.txt`, `stdin`, `clipboard`.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            InvocationMode::File(path) => path,
            InvocationMode::Pipe => PIPE_LABEL,
            InvocationMode::Clipboard => CLIPBOARD_LABEL,
        }
    }

    /// The positional argument that selects this mode again, if any.
    #[must_use]
    pub fn source_arg(&self) -> Option<&str> {
        match self {
            InvocationMode::File(path) => Some(path),
            InvocationMode::Pipe => Some(PIPE_SOURCE_ARG),
            InvocationMode::Clipboard => None,
        }
    }

    /// Inverse of [`Self::source_arg`].
    #[must_use]
    pub fn from_source_arg(maybe_source_arg: Option<&str>) -> Self {
        match maybe_source_arg {
            None => InvocationMode::Clipboard,
            Some(PIPE_SOURCE_ARG) => InvocationMode::Pipe,
            Some(path) => InvocationMode::File(path.to_string()),
        }
    }
}
