// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just
/// syntactic sugar that helps having to write `Ok(())` repeatedly.
///
/// Here's an example.
/// ```
/// use typebelow_core::{CommonResult, throws};
///
/// fn write_greeting(out: &mut Vec<u8>) -> CommonResult<()> {
///     throws!({
///         out.extend_from_slice(b"hello\n");
///     });
/// }
///
/// let mut out = vec![];
/// write_greeting(&mut out).unwrap();
/// assert_eq!(out, b"hello\n");
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

// XMARK: Clever Rust, use of decl macro w/ `tt` to allow any number of arguments.

/// Format the arguments into a [`crate::InlineString`] (stack allocated until it gets
/// larger than [`crate::DEFAULT_STRING_STORAGE_SIZE`]). It takes whatever you would pass
/// to [format!] or [write!].
///
/// ```
/// use typebelow_core::inline_string;
/// let it = inline_string!("line {} of {}", 3, 10);
/// assert_eq!(it, "line 3 of 10");
/// ```
#[macro_export]
macro_rules! inline_string {
    ($($format:tt)*) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        // We don't care about the result of this operation.
        _ = write!(&mut acc, $($format)*);
        acc
    }};
}
