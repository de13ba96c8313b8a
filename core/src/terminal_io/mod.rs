// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod interactive_input;
pub mod stdin_detection;
pub mod tty_input_device;

// Re-export.
pub use interactive_input::*;
pub use stdin_detection::*;
pub use tty_input_device::*;
