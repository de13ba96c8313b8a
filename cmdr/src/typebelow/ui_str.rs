// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use typebelow_core::{InlineString, inline_string};

use crate::common::fmt;

pub const NO_PIPED_TEXT_REASON: &str = "No piped-in text detected on stdin.";

#[must_use]
pub fn clipboard_unavailable_reason(error: &dyn std::error::Error) -> String {
    format!("The clipboard could not be read ({error}). Pass a file path or `-` instead.")
}

/// Printed to stderr right before the diagnostic report.
#[must_use]
pub fn unrecoverable_error_msg() -> InlineString {
    inline_string!(
        "{a}{b} {c}",
        a = fmt::error("typebelow could not start"),
        b = fmt::colon(),
        c = fmt::dim("details below")
    )
}
