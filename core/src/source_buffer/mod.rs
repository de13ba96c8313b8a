// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod line_count;
pub mod source_buffer_struct;

// Re-export.
pub use line_count::*;
pub use source_buffer_struct::*;
