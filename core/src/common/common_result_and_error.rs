// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which are [`std::error::Error`] wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`TypeBelowError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Every way an invocation of `typebelow` can fail. All of them are fatal to the current
/// invocation and none are retried. The top level handler in the binary renders them
/// (using the [`miette`] global report handler) and picks the process exit status.
///
/// End of input on the interactive terminal is **not** represented here. That is the
/// normal way to interrupt a session, and it produces a resume hint instead.
#[derive(thiserror::Error, Debug, Clone, miette::Diagnostic, PartialEq, Eq)]
pub enum TypeBelowError {
    #[error("Input is empty.")]
    #[diagnostic(
        code(typebelow::empty_input),
        help("The source has no text in it. Check the file, the pipe, or the clipboard.")
    )]
    EmptyInput,

    #[error("Invalid starting line number: {spec}")]
    #[diagnostic(
        code(typebelow::invalid_line_number),
        help("Pass a whole number, eg: `-s 10`, or count back from the end, eg: `-s -2`.")
    )]
    InvalidLineNumber { spec: String },

    #[error("{}", line_number_out_of_range_msg(*requested, *total_lines, *resolved))]
    #[diagnostic(
        code(typebelow::line_number_out_of_range),
        help("Lines are numbered from 1 to {total_lines}.")
    )]
    LineNumberOutOfRange {
        /// The signed value the user passed in.
        requested: i64,
        total_lines: usize,
        /// The (invalid) line that a negative spec evaluated to. [`None`] for specs
        /// that were rejected before any offset conversion.
        resolved: Option<i64>,
    },

    #[error("Could not read from '{source_label}': {reason}")]
    #[diagnostic(code(typebelow::source_unavailable))]
    SourceUnavailable {
        source_label: String,
        reason: String,
    },

    #[error("Could not open terminal '{device}' for user input: {reason}")]
    #[diagnostic(
        code(typebelow::interactive_channel_unavailable),
        help("typebelow needs a controlling terminal to read what you type.")
    )]
    InteractiveChannelUnavailable { device: String, reason: String },
}

fn line_number_out_of_range_msg(
    requested: i64,
    total_lines: usize,
    maybe_resolved: Option<i64>,
) -> String {
    match maybe_resolved {
        Some(resolved) => format!(
            "Starting line offset from end is greater than the total number of lines.\n\
             Total: {total_lines}\tSpecified: {requested}\n\
             Which would evaluate as line {resolved}."
        ),
        None if requested == 0 => format!(
            "Starting line specified: 0 is not a line, lines available: 1 to {total_lines}."
        ),
        None => format!(
            "Starting line specified: {requested} is greater than number of lines \
             available: {total_lines}."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_out_of_range_positive_reports_requested_and_total() {
        let it = TypeBelowError::LineNumberOutOfRange {
            requested: 12,
            total_lines: 10,
            resolved: None,
        };
        assert_eq!(
            it.to_string(),
            "Starting line specified: 12 is greater than number of lines available: 10."
        );
    }

    #[test]
    fn test_out_of_range_zero() {
        let it = TypeBelowError::LineNumberOutOfRange {
            requested: 0,
            total_lines: 4,
            resolved: None,
        };
        let msg = it.to_string();
        assert!(msg.contains("0 is not a line"));
        assert!(msg.contains("1 to 4"));
    }

    #[test]
    fn test_out_of_range_negative_reports_total_spec_and_resolved() {
        let it = TypeBelowError::LineNumberOutOfRange {
            requested: -7,
            total_lines: 5,
            resolved: Some(-1),
        };
        let msg = it.to_string();
        assert!(msg.contains("Total: 5"));
        assert!(msg.contains("Specified: -7"));
        assert!(msg.contains("Which would evaluate as line -1."));
    }

    #[test]
    fn test_error_survives_miette_report() {
        let report: miette::Report = TypeBelowError::EmptyInput.into();
        assert_eq!(report.to_string(), "Input is empty.");
        assert_eq!(
            report.downcast_ref::<TypeBelowError>(),
            Some(&TypeBelowError::EmptyInput)
        );
    }
}
