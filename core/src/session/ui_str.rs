// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything the session prints besides the revealed text itself.

use super::{InvocationMode, ResumeHint};

#[must_use]
pub fn banner_msg(label: &str, starting_line: usize, total_lines: usize) -> String {
    format!("Reading from '{label}', starting from line {starting_line} of {total_lines}.")
}

#[must_use]
pub fn program_ended_msg(line: usize, total_lines: usize) -> String {
    format!("Program ended on line {line} of {total_lines}.")
}

#[must_use]
pub fn resume_instruction_msg(mode: &InvocationMode) -> &'static str {
    match mode {
        InvocationMode::File(_) => "To continue from this point next time use the command:",
        InvocationMode::Pipe => "To resume from the same piped or redirected content, use:",
        InvocationMode::Clipboard => "To resume from the same clipboard content, use:",
    }
}

/// The full interrupted block: ended line, instruction, then the hint on its own line.
#[must_use]
pub fn interrupted_msg(hint: &ResumeHint, total_lines: usize) -> String {
    format!(
        "{a}\n{b}\n{hint}",
        a = program_ended_msg(hint.line, total_lines),
        b = resume_instruction_msg(&hint.mode),
    )
}

#[must_use]
pub fn finished_msg(total_lines: usize, label: &str) -> String {
    format!("Finished all {total_lines} lines from '{label}'.")
}
