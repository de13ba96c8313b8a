// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fakes for the collaborators the session talks to, so that it can be driven end to
//! end in tests without a real terminal.

// Attach sources.
pub mod fixed_height_terminal;
pub mod friendly_random_id;
pub mod interactive_input_mock;
pub mod stdout_mock;
pub mod temp_dir;

// Re-export.
pub use fixed_height_terminal::*;
pub use friendly_random_id::*;
pub use interactive_input_mock::*;
pub use stdout_mock::*;
pub use temp_dir::*;
