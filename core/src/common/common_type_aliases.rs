// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallstr::SmallString;

// PERF: If you make this number too large, eg: more than 64, then every short status
// message pays for the larger stack slot.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;

/// Stack allocated string storage for small strings, like the banner and resume hint
/// messages. When this gets larger than [`DEFAULT_STRING_STORAGE_SIZE`], it will be
/// spilled on the heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Type alias for the output device that the session writes revealed lines to. This is
/// usually [`std::io::stdout`], and a [`crate::StdoutMock`] in tests.
pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// Disambiguate the type of `StdMutex` from other mutex types.
pub type StdMutex<T> = std::sync::Mutex<T>;
