// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod terminal_control;
pub mod terminal_frame;

// Re-export.
pub use terminal_control::*;
pub use terminal_frame::*;
