// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultColors {
    SlateGray,
    SoftPink,
}

impl DefaultColors {
    #[must_use]
    pub fn as_crossterm_color(self) -> Color {
        match self {
            DefaultColors::SlateGray => Color::Rgb { r: 94, g: 103, b: 111 },
            DefaultColors::SoftPink => Color::Rgb { r: 255, g: 140, b: 170 },
        }
    }
}
