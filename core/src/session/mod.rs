// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod invocation_mode;
pub mod resume_hint;
pub mod session_loop;
pub mod ui_str;

// Re-export.
pub use invocation_mode::*;
pub use resume_hint::*;
pub use session_loop::*;
