// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{count_lines, find_new_line};
use crate::{CommonResult, TypeBelowError};

/// The entire ingested text, held as one contiguous immutable byte sequence.
///
/// - It is created once from whatever the ingestion step read (file contents, piped
///   stdin captured to EOF, or clipboard text), and never changes after that.
/// - The bytes are not required to be UTF-8. They are written out verbatim.
/// - [`Self::line_count`] is computed once, at construction time, by a single scan.
///
/// The ingestion step grows a [`Vec<u8>`] (amortized O(1) append) and hands it over
/// here. The buffer then only exposes an immutable view of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    bytes: Box<[u8]>,
    line_count: usize,
}

impl SourceBuffer {
    /// Wrap the ingested bytes. Zero length input yields a buffer with
    /// [`Self::line_count`] of `0`, which callers must not navigate. Use
    /// [`Self::try_from_bytes`] to reject it up front.
    #[must_use]
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        let bytes = data.into().into_boxed_slice();
        let line_count = count_lines(&bytes);
        Self { bytes, line_count }
    }

    /// Same as [`Self::from_bytes`] but zero length input is reported as
    /// [`TypeBelowError::EmptyInput`].
    ///
    /// # Errors
    ///
    /// Returns [`TypeBelowError::EmptyInput`] if `data` has no bytes.
    pub fn try_from_bytes(data: impl Into<Vec<u8>>) -> CommonResult<Self> {
        let it = Self::from_bytes(data);

        if it.is_empty() {
            return Err(TypeBelowError::EmptyInput.into());
        }

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📥 Source buffer created",
            byte_count = %it.len(),
            line_count = %it.line_count
        );

        Ok(it)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.bytes }

    #[must_use]
    pub fn len(&self) -> usize { self.bytes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    /// 1-based total line count. See [`count_lines`] for the rules.
    #[must_use]
    pub fn line_count(&self) -> usize { self.line_count }

    /// Byte offset of the first byte of `target_line` (1-based).
    ///
    /// Scans forward from offset 0 consuming `target_line - 1` newlines, and returns
    /// the offset right after the last one consumed. If the buffer runs out of newlines
    /// first, the end of the buffer is returned. Callers are expected to have validated
    /// `target_line <= line_count` already.
    #[must_use]
    pub fn line_start_offset(&self, target_line: usize) -> usize {
        let mut offset = 0;
        for _ in 1..target_line {
            match find_new_line(&self.bytes, offset) {
                Some(new_line_index) => offset = new_line_index + 1,
                None => return self.len(),
            }
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_empty_buffer_has_no_lines() {
        let buffer = SourceBuffer::from_bytes(vec![]);
        assert!(buffer.is_empty());
        assert_eq!(buffer.line_count(), 0);
    }

    #[test]
    fn test_try_from_bytes_rejects_empty_input() {
        let result = SourceBuffer::try_from_bytes("");
        let report = result.unwrap_err();
        assert_eq!(
            report.downcast_ref::<TypeBelowError>(),
            Some(&TypeBelowError::EmptyInput)
        );
        assert_eq!(report.to_string(), "Input is empty.");
    }

    #[test]
    fn test_no_trailing_new_line_still_counts_last_line() {
        let buffer = SourceBuffer::try_from_bytes("a\nb\nc").unwrap();
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.as_bytes(), b"a\nb\nc");
    }

    #[test]
    fn test_non_utf8_bytes_are_kept_verbatim() {
        let data = vec![0xff, b'\n', 0xfe];
        let buffer = SourceBuffer::try_from_bytes(data.clone()).unwrap();
        assert_eq!(buffer.as_bytes(), data.as_slice());
        assert_eq!(buffer.line_count(), 2);
    }

    #[test_case(1, 0; "first line starts at zero")]
    #[test_case(2, 4; "after first newline")]
    #[test_case(3, 10; "after second newline")]
    #[test_case(4, 16; "empty line after trailing newline")]
    #[test_case(9, 16; "past the end clamps to length")]
    fn test_line_start_offset(target_line: usize, expected: usize) {
        let buffer = SourceBuffer::from_bytes("one\ntwo 2\nthree\n");
        assert_eq!(buffer.line_start_offset(target_line), expected);
    }

    #[test]
    fn test_line_start_offset_with_blank_lines() {
        let buffer = SourceBuffer::from_bytes("\n\nx");
        assert_eq!(buffer.line_start_offset(1), 0);
        assert_eq!(buffer.line_start_offset(2), 1);
        assert_eq!(buffer.line_start_offset(3), 2);
    }
}
