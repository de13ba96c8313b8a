// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clap_config;
pub mod clipboard_service;
pub mod ingest;
pub mod launcher;
pub mod ui_str;

// Re-export.
pub use clap_config::*;
pub use clipboard_service::*;
pub use ingest::*;
pub use launcher::*;
