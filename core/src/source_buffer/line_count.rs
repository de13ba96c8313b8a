// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const NEW_LINE_BYTE: u8 = b'\n';

/// Count the lines in `bytes` in one pass.
///
/// - An empty slice has zero lines.
/// - Otherwise the count is the number of `\n` bytes plus one. So a final line that
///   lacks a trailing `\n` is still counted, and a slice that ends in `\n` is credited
///   with one (empty) line after it.
#[must_use]
pub fn count_lines(bytes: &[u8]) -> usize {
    if bytes.is_empty() {
        return 0;
    }
    1 + count_new_lines(bytes)
}

#[must_use]
pub fn count_new_lines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&byte| byte == NEW_LINE_BYTE).count()
}

/// Returns the index of the next `\n` at or after `from`, if any.
#[must_use]
pub fn find_new_line(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&byte| byte == NEW_LINE_BYTE)
        .map(|index| from + index)
}
