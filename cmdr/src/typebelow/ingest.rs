// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Gets the whole source text into memory before the session starts. Whichever mode is
//! used, the result is one contiguous byte buffer.

use std::io::Read;

use typebelow_core::{CLIPBOARD_LABEL, CommonResult, InvocationMode, PIPE_LABEL,
                     StdinIsPipedResult, TypeBelowError, is_stdin_piped};

use super::{ClipboardService, ui_str};

/// Reads the source selected by `mode`. An empty file or empty pipe is returned as is,
/// [`typebelow_core::SourceBuffer::try_from_bytes`] rejects it.
///
/// # Errors
///
/// Returns [`TypeBelowError::SourceUnavailable`] if the source can't be read, and
/// [`TypeBelowError::EmptyInput`] for an empty clipboard.
pub fn ingest(
    mode: &InvocationMode,
    clipboard: &mut dyn ClipboardService,
) -> CommonResult<Vec<u8>> {
    let bytes = match mode {
        InvocationMode::File(path) => read_file(path)?,
        InvocationMode::Pipe => read_piped_stdin()?,
        InvocationMode::Clipboard => read_clipboard(clipboard)?,
    };

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "📥 Source ingested",
        source = %mode.label(),
        bytes = %bytes.len(),
        capacity = %bytes.capacity()
    );

    Ok(bytes)
}

/// # Errors
///
/// Returns [`TypeBelowError::SourceUnavailable`] naming `path` and the OS reason.
pub fn read_file(path: &str) -> CommonResult<Vec<u8>> {
    std::fs::read(path).map_err(|err| source_unavailable(path, err.to_string()))
}

/// # Errors
///
/// See [`read_piped`].
pub fn read_piped_stdin() -> CommonResult<Vec<u8>> {
    read_piped(is_stdin_piped(), std::io::stdin().lock())
}

/// # Errors
///
/// Returns [`TypeBelowError::SourceUnavailable`] if stdin is the terminal (nothing was
/// piped in) or reading `stdin` fails.
pub fn read_piped(
    stdin_is_piped: StdinIsPipedResult,
    stdin: impl Read,
) -> CommonResult<Vec<u8>> {
    match stdin_is_piped {
        StdinIsPipedResult::StdinIsNotPiped => Err(source_unavailable(
            PIPE_LABEL,
            ui_str::NO_PIPED_TEXT_REASON.to_string(),
        )),
        StdinIsPipedResult::StdinIsPiped => read_to_end(PIPE_LABEL, stdin),
    }
}

/// Drains `reader` into one buffer that grows as needed.
///
/// # Errors
///
/// Returns [`TypeBelowError::SourceUnavailable`] labeled with `label` if a read fails.
pub fn read_to_end(label: &str, mut reader: impl Read) -> CommonResult<Vec<u8>> {
    let mut acc = Vec::new();
    reader
        .read_to_end(&mut acc)
        .map_err(|err| source_unavailable(label, err.to_string()))?;
    Ok(acc)
}

/// # Errors
///
/// Returns [`TypeBelowError::SourceUnavailable`] if the clipboard can't be read, and
/// [`TypeBelowError::EmptyInput`] if it holds no text.
pub fn read_clipboard(clipboard: &mut dyn ClipboardService) -> CommonResult<Vec<u8>> {
    let content = clipboard.try_to_get_content_from_clipboard().map_err(|err| {
        source_unavailable(
            CLIPBOARD_LABEL,
            ui_str::clipboard_unavailable_reason(err.as_ref()),
        )
    })?;

    if content.is_empty() {
        return Err(TypeBelowError::EmptyInput.into());
    }

    Ok(content.into_bytes())
}

fn source_unavailable(source_label: &str, reason: String) -> miette::Report {
    // % is Display, ? is Debug.
    tracing::error!(
        message = "Source could not be read",
        source = %source_label,
        reason = %reason
    );
    TypeBelowError::SourceUnavailable {
        source_label: source_label.to_string(),
        reason,
    }
    .into()
}
