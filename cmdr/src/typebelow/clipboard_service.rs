// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::error::Error;

use copypasta_ext::copypasta::ClipboardProvider;
#[cfg(not(target_os = "linux"))]
use copypasta_ext::copypasta::ClipboardContext;
#[cfg(target_os = "linux")]
use copypasta_ext::x11_fork::ClipboardContext;

pub type ClipboardResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

/// Abstraction over the OS clipboard, so the clipboard source can be swapped out in
/// tests.
pub trait ClipboardService {
    /// # Errors
    ///
    /// Returns an error if the clipboard can't be opened or doesn't hold text.
    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
        let mut ctx = ClipboardContext::new()?;
        let content = ctx.get_contents()?;

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📋 Read text from clipboard",
            bytes = %content.len()
        );

        Ok(content)
    }
}

pub mod clipboard_test_fixtures {
    use super::{ClipboardResult, ClipboardService};

    /// Holds canned clipboard text. [`None`] behaves like a clipboard that can't be
    /// opened.
    #[derive(Debug, Clone, Default)]
    pub struct TestClipboard {
        pub content: Option<String>,
    }

    impl TestClipboard {
        #[must_use]
        pub fn new(content: impl Into<String>) -> Self {
            Self {
                content: Some(content.into()),
            }
        }

        #[must_use]
        pub fn unavailable() -> Self { Self { content: None } }
    }

    impl ClipboardService for TestClipboard {
        fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
            match &self.content {
                Some(content) => Ok(content.clone()),
                None => Err("no clipboard available".into()),
            }
        }
    }
}
