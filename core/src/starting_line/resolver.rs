// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns the user supplied `-s` value into a concrete 1-based line number.
//!
//! Positive values are absolute line numbers. Negative values count back from the end,
//! so `-1` is the last line and `-2` is the one before it. The result always satisfies
//! `1 <= line <= line_count`, otherwise one of the [`TypeBelowError`] range variants is
//! returned.

use crate::{CommonResult, TypeBelowError};

/// Line used when no spec is given.
pub const DEFAULT_STARTING_LINE: usize = 1;

/// Parse the textual spec as a signed integer. Leading whitespace is skipped, anything
/// after the digits (trailing whitespace included) makes it malformed.
///
/// # Errors
///
/// Returns [`TypeBelowError::InvalidLineNumber`] carrying the text as given.
pub fn parse_starting_line_spec(spec: &str) -> CommonResult<i64> {
    spec.trim_start().parse::<i64>().map_err(|_| {
        TypeBelowError::InvalidLineNumber {
            spec: spec.to_string(),
        }
        .into()
    })
}

/// Parse and resolve in one go. `None` means the flag was not passed.
///
/// # Errors
///
/// See [`parse_starting_line_spec`] and [`resolve_signed`].
pub fn resolve_starting_line(
    maybe_spec: Option<&str>,
    line_count: usize,
) -> CommonResult<usize> {
    let maybe_signed = maybe_spec.map(parse_starting_line_spec).transpose()?;
    let resolved_line = resolve_signed(maybe_signed, line_count)?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🎯 Starting line resolved",
        spec = ?maybe_spec,
        line_count = %line_count,
        resolved_line = %resolved_line
    );

    Ok(resolved_line)
}

/// # Errors
///
/// Returns [`TypeBelowError::LineNumberOutOfRange`] when:
/// - the spec is `0` (there is no line 0, rejected before any negative handling),
/// - a positive spec is greater than `line_count`,
/// - a negative spec reaches back before line 1.
pub fn resolve_signed(maybe_spec: Option<i64>, line_count: usize) -> CommonResult<usize> {
    let Some(spec) = maybe_spec else {
        return Ok(DEFAULT_STARTING_LINE);
    };

    let total = i64::try_from(line_count).unwrap_or(i64::MAX);

    let out_of_range = |resolved: Option<i64>| TypeBelowError::LineNumberOutOfRange {
        requested: spec,
        total_lines: line_count,
        resolved,
    };

    if spec == 0 || spec > total {
        return Err(out_of_range(None).into());
    }

    let resolved = if spec < 0 { total + spec + 1 } else { spec };

    if resolved < 1 {
        return Err(out_of_range(Some(resolved)).into());
    }

    usize::try_from(resolved).map_err(|_| out_of_range(Some(resolved)).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn error_of(result: CommonResult<usize>) -> TypeBelowError {
        let report = result.unwrap_err();
        let Some(it) = report.downcast_ref::<TypeBelowError>() else {
            panic!("unexpected error type: {report:?}");
        };
        it.clone()
    }

    #[test]
    fn test_absent_spec_starts_at_first_line() {
        assert_eq!(resolve_signed(None, 10).unwrap(), 1);
        assert_eq!(resolve_starting_line(None, 3).unwrap(), 1);
    }

    #[test_case(5, 1, 1; "first line")]
    #[test_case(5, 5, 5; "last line absolute")]
    #[test_case(5, -1, 5; "last line from end")]
    #[test_case(5, -2, 4; "second to last")]
    #[test_case(5, -5, 1; "from end back to first")]
    #[test_case(1, -1, 1; "single line from end")]
    fn test_resolve_valid(line_count: usize, spec: i64, expected: usize) {
        assert_eq!(resolve_signed(Some(spec), line_count).unwrap(), expected);
    }

    #[test]
    fn test_last_line_addressed_two_ways_agrees() {
        for n in 1..=50_usize {
            let n_signed = i64::try_from(n).unwrap();
            assert_eq!(
                resolve_signed(Some(-1), n).unwrap(),
                resolve_signed(Some(n_signed), n).unwrap()
            );
        }
    }

    #[test]
    fn test_zero_always_fails() {
        for n in 0..=20 {
            assert_eq!(
                error_of(resolve_signed(Some(0), n)),
                TypeBelowError::LineNumberOutOfRange {
                    requested: 0,
                    total_lines: n,
                    resolved: None,
                }
            );
        }
    }

    #[test]
    fn test_one_past_the_end_always_fails() {
        for n in 0..=20_usize {
            let past = i64::try_from(n).unwrap() + 1;
            assert_eq!(
                error_of(resolve_signed(Some(past), n)),
                TypeBelowError::LineNumberOutOfRange {
                    requested: past,
                    total_lines: n,
                    resolved: None,
                }
            );
        }
    }

    #[test]
    fn test_negative_past_the_start_reports_resolved_value() {
        assert_eq!(
            error_of(resolve_signed(Some(-6), 5)),
            TypeBelowError::LineNumberOutOfRange {
                requested: -6,
                total_lines: 5,
                resolved: Some(0),
            }
        );
        assert_eq!(
            error_of(resolve_signed(Some(-9), 5)),
            TypeBelowError::LineNumberOutOfRange {
                requested: -9,
                total_lines: 5,
                resolved: Some(-3),
            }
        );
    }

    #[test_case("12", 12; "positive")]
    #[test_case("-3", -3; "negative")]
    #[test_case("  7", 7; "leading spaces")]
    #[test_case("+4", 4; "explicit plus sign")]
    fn test_parse_well_formed(input: &str, expected: i64) {
        assert_eq!(parse_starting_line_spec(input).unwrap(), expected);
    }

    #[test_case("abc"; "letters")]
    #[test_case(""; "empty")]
    #[test_case("3x"; "trailing garbage")]
    #[test_case("7 "; "trailing space")]
    #[test_case(" 7\n"; "trailing new line")]
    #[test_case("1.5"; "fraction")]
    #[test_case("--2"; "double minus")]
    fn test_parse_malformed(input: &str) {
        let report = parse_starting_line_spec(input).unwrap_err();
        assert_eq!(
            report.downcast_ref::<TypeBelowError>(),
            Some(&TypeBelowError::InvalidLineNumber {
                spec: input.to_string()
            })
        );
    }

    #[test]
    fn test_resolve_starting_line_from_text() {
        assert_eq!(resolve_starting_line(Some("-2"), 5).unwrap(), 4);
        assert_eq!(resolve_starting_line(Some("3"), 10).unwrap(), 3);
        assert!(resolve_starting_line(Some("eleven"), 10).is_err());
        assert!(resolve_starting_line(Some("11"), 10).is_err());
    }
}
