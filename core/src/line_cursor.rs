// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A persistent byte offset into a [`SourceBuffer`] that walks it one line at a time.
//!
//! The cursor is owned by the session loop and mutated in place. The invariant it keeps
//! is that [`LineCursor::offset`] points to the first byte of
//! [`LineCursor::current_line`], or equals the buffer length once every line has been
//! revealed.

use crate::{NEW_LINE_BYTE, SourceBuffer, find_new_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCursor {
    offset: usize,
    current_line: usize,
}

/// One line handed out by [`LineCursor::reveal_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealedLine<'a> {
    /// Verbatim bytes, including the trailing `\n` when the line has one.
    pub text: &'a [u8],
    /// `true` when this is the final counted line of the buffer.
    pub is_last: bool,
}

impl RevealedLine<'_> {
    /// Length of the line without its trailing `\n`.
    #[must_use]
    pub fn len_without_new_line(&self) -> usize {
        match self.text.last() {
            Some(&NEW_LINE_BYTE) => self.text.len() - 1,
            _ => self.text.len(),
        }
    }

    #[must_use]
    pub fn ends_with_new_line(&self) -> bool { self.text.last() == Some(&NEW_LINE_BYTE) }
}

impl Default for LineCursor {
    fn default() -> Self { Self::new() }
}

impl LineCursor {
    /// Cursor at offset 0, line 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            current_line: 1,
        }
    }

    /// Seed a cursor at `resolved_line` of `buffer`.
    #[must_use]
    pub fn at_line(buffer: &SourceBuffer, resolved_line: usize) -> Self {
        let mut it = Self::new();
        it.advance_to(buffer, resolved_line);
        it
    }

    /// Reset to offset 0 and walk forward newline by newline, `resolved_line - 1` times.
    /// Stops early if the buffer has fewer newlines than that, which only happens when
    /// `resolved_line` was not validated against [`SourceBuffer::line_count`].
    pub fn advance_to(&mut self, buffer: &SourceBuffer, resolved_line: usize) {
        self.offset = 0;
        self.current_line = 1;

        let bytes = buffer.as_bytes();
        while self.current_line < resolved_line {
            let Some(new_line_index) = find_new_line(bytes, self.offset) else {
                tracing::warn!(
                    message = "Buffer ran out of newlines before the requested line",
                    resolved_line = %resolved_line,
                    stopped_at = %self.current_line
                );
                break;
            };
            self.offset = new_line_index + 1;
            self.current_line += 1;
        }
    }

    /// Hand out the span from the current offset up to and including the next `\n` (or
    /// to the end of the buffer), then move past it.
    ///
    /// `is_last` is set when the span ran into the end of the buffer without a `\n`. A
    /// buffer that ends in `\n` is credited with one empty final line by
    /// [`crate::count_lines`], so that empty line is what comes back with `is_last`. This
    /// means that starting from any valid line `L`, exactly `line_count - L + 1` calls
    /// are made before `is_last` shows up.
    pub fn reveal_next<'a>(&mut self, buffer: &'a SourceBuffer) -> RevealedLine<'a> {
        let bytes = buffer.as_bytes();
        let start = self.offset.min(bytes.len());

        match find_new_line(bytes, start) {
            Some(new_line_index) => {
                self.offset = new_line_index + 1;
                self.current_line += 1;
                RevealedLine {
                    text: &bytes[start..self.offset],
                    is_last: false,
                }
            }
            None => {
                self.offset = bytes.len();
                RevealedLine {
                    text: &bytes[start..],
                    is_last: true,
                }
            }
        }
    }

    #[must_use]
    pub fn offset(&self) -> usize { self.offset }

    /// 1-based. After the last line is revealed this stays on the last line number.
    #[must_use]
    pub fn current_line(&self) -> usize { self.current_line }

    #[must_use]
    pub fn is_exhausted(&self, buffer: &SourceBuffer) -> bool {
        self.offset >= buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn reveal_all(buffer: &SourceBuffer, from_line: usize) -> Vec<(String, bool)> {
        let mut cursor = LineCursor::at_line(buffer, from_line);
        let mut acc = vec![];
        loop {
            let line = cursor.reveal_next(buffer);
            acc.push((String::from_utf8_lossy(line.text).to_string(), line.is_last));
            if line.is_last {
                break;
            }
        }
        acc
    }

    #[test]
    fn test_advance_to_first_line_is_offset_zero() {
        let buffer = SourceBuffer::from_bytes("one\ntwo\n");
        let mut cursor = LineCursor::new();
        cursor.advance_to(&buffer, 1);
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.current_line(), 1);
    }

    #[test]
    fn test_advance_to_matches_line_start_offset() {
        let buffer = SourceBuffer::from_bytes("alpha\n\nbeta\ngamma");
        for line in 1..=buffer.line_count() {
            let cursor = LineCursor::at_line(&buffer, line);
            assert_eq!(cursor.offset(), buffer.line_start_offset(line));
            assert_eq!(cursor.current_line(), line);
        }
    }

    #[test]
    fn test_advance_to_stops_early_when_out_of_newlines() {
        let buffer = SourceBuffer::from_bytes("a\nb");
        let cursor = LineCursor::at_line(&buffer, 10);
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.current_line(), 2);
    }

    #[test]
    fn test_reveal_three_lines_without_trailing_new_line() {
        let buffer = SourceBuffer::from_bytes("a\nb\nc");
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(
            reveal_all(&buffer, 1),
            vec![
                ("a\n".to_string(), false),
                ("b\n".to_string(), false),
                ("c".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_trailing_new_line_reveals_final_empty_line() {
        let buffer = SourceBuffer::from_bytes("a\nb\n");
        assert_eq!(
            reveal_all(&buffer, 1),
            vec![
                ("a\n".to_string(), false),
                ("b\n".to_string(), false),
                (String::new(), true),
            ]
        );
    }

    #[test]
    fn test_blank_lines_are_revealed_not_skipped() {
        let buffer = SourceBuffer::from_bytes("x\n\n\ny");
        let lines = reveal_all(&buffer, 1);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], ("\n".to_string(), false));
        assert_eq!(lines[2], ("\n".to_string(), false));
    }

    #[test_case("a\nb\nc"; "no trailing newline")]
    #[test_case("a\nb\nc\n"; "trailing newline")]
    #[test_case("\n\n\n"; "only newlines")]
    #[test_case("single"; "single line")]
    #[test_case("x\r\ny\r\n"; "crlf endings")]
    fn test_reveal_count_until_last_matches_remaining_lines(input: &str) {
        let buffer = SourceBuffer::from_bytes(input);
        let line_count = buffer.line_count();
        for resolved_line in 1..=line_count {
            let mut cursor = LineCursor::at_line(&buffer, resolved_line);
            let expected_calls = line_count - resolved_line + 1;
            for call in 1..=expected_calls {
                let line = cursor.reveal_next(&buffer);
                assert_eq!(line.is_last, call == expected_calls);
            }
            assert!(cursor.is_exhausted(&buffer));
        }
    }

    #[test]
    fn test_current_line_tracks_reveals() {
        let buffer = SourceBuffer::from_bytes("1\n2\n3");
        let mut cursor = LineCursor::at_line(&buffer, 2);
        assert_eq!(cursor.current_line(), 2);
        _ = cursor.reveal_next(&buffer);
        assert_eq!(cursor.current_line(), 3);
        let last = cursor.reveal_next(&buffer);
        assert!(last.is_last);
        assert_eq!(cursor.current_line(), 3);
        assert_eq!(cursor.offset(), buffer.len());
    }

    #[test]
    fn test_len_without_new_line() {
        let buffer = SourceBuffer::from_bytes("abc\nde");
        let mut cursor = LineCursor::new();
        let first = cursor.reveal_next(&buffer);
        assert_eq!(first.len_without_new_line(), 3);
        assert!(first.ends_with_new_line());
        let second = cursor.reveal_next(&buffer);
        assert_eq!(second.len_without_new_line(), 2);
        assert!(!second.ends_with_new_line());
    }
}
