// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

use crossterm::style::{Stylize, style};
use typebelow_core::{InlineString, inline_string};

use crate::DefaultColors;

fn paint(arg_text: impl Display, color: DefaultColors) -> InlineString {
    let text = inline_string!("{}", arg_text);
    inline_string!("{}", style(text.as_str()).with(color.as_crossterm_color()))
}

#[must_use]
pub fn colon() -> InlineString { dim(":") }

/// Error text style.
#[must_use]
pub fn error(arg_text: impl Display) -> InlineString {
    paint(arg_text, DefaultColors::SoftPink)
}

/// De-emphasize (dim) text.
#[must_use]
pub fn dim(arg_text: impl Display) -> InlineString {
    paint(arg_text, DefaultColors::SlateGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_keep_the_text() {
        for it in [error("abc"), dim("abc")] {
            let plain = strip_ansi_escapes::strip_str(it.as_str());
            assert_eq!(plain, "abc");
        }
    }
}
