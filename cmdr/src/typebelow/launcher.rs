// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use typebelow_core::{CommonResult, InteractiveInput, InvocationMode, LockedOutputDevice,
                     SessionLoop, SessionOutcome, SourceBuffer, TerminalControl,
                     TtyInputDevice, new_terminal_control};

use super::{CLIArg, ClipboardService, SystemClipboard, ingest};

/// Runs one `typebelow` invocation against the real process environment: stdout, the
/// controlling terminal, and the OS clipboard.
///
/// # Errors
///
/// See [`run_session`].
pub fn run_typebelow(cli_arg: &CLIArg, program: &str) -> CommonResult<SessionOutcome> {
    let terminal = new_terminal_control();
    let stdout = std::io::stdout();
    let mut stdout_lock = stdout.lock();
    run_session(
        cli_arg,
        program,
        &mut SystemClipboard,
        TtyInputDevice::try_open,
        terminal.as_ref(),
        &mut stdout_lock,
    )
}

/// The checks happen in this order: ingest, empty input, starting line, then the
/// interactive terminal is opened with `open_input`. So a bad `-s` value is reported
/// without touching the terminal.
///
/// # Errors
///
/// Returns the first [`typebelow_core::TypeBelowError`] hit along the way.
pub fn run_session<I: InteractiveInput>(
    cli_arg: &CLIArg,
    program: &str,
    clipboard: &mut dyn ClipboardService,
    open_input: impl FnOnce() -> CommonResult<I>,
    terminal: &dyn TerminalControl,
    out: LockedOutputDevice<'_>,
) -> CommonResult<SessionOutcome> {
    let mode = InvocationMode::from_source_arg(cli_arg.source.as_deref());
    let bytes = ingest(&mode, clipboard)?;
    let buffer = SourceBuffer::try_from_bytes(bytes)?;
    let session = SessionLoop::try_new(&buffer, cli_arg.start.as_deref(), mode, program)?;
    let mut input = open_input()?;
    session.run(out, &mut input, terminal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typebelow::{GlobalOption, clipboard_test_fixtures::TestClipboard};
    use pretty_assertions::assert_eq;
    use typebelow_core::{FixedHeightTerminal, InteractiveInputMock, StdoutMock,
                         TypeBelowError, try_create_temp_dir};

    fn cli_arg(source: Option<&str>, start: Option<&str>) -> CLIArg {
        CLIArg {
            source: source.map(ToString::to_string),
            start: start.map(ToString::to_string),
            global_options: GlobalOption {
                enable_logging: false,
            },
        }
    }

    #[test]
    fn test_clipboard_session_is_interrupted_with_hint() {
        let stdout_mock = StdoutMock::new();
        let outcome = run_session(
            &cli_arg(None, Some("2")),
            "typebelow",
            &mut TestClipboard::new("alpha\nbeta\ngamma"),
            || Ok(InteractiveInputMock::new(["beta"])),
            &FixedHeightTerminal::new(20),
            &mut stdout_mock.clone(),
        )
        .unwrap();

        let SessionOutcome::Interrupted { hint, total_lines } = outcome else {
            panic!("expected an interrupted session");
        };
        assert_eq!(total_lines, 3);
        assert_eq!(hint.to_string(), "typebelow -s 3");

        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.starts_with("Reading from 'clipboard', starting from line 2 of 3.\n"));
        assert!(output.contains("To resume from the same clipboard content, use:\n"));
        assert!(!output.contains("alpha"));
    }

    #[test]
    fn test_file_session_runs_to_the_end() {
        let dir = try_create_temp_dir().unwrap();
        let path = dir.join("two.txt");
        std::fs::write(&path, "first\nsecond").unwrap();
        let path = path.to_string_lossy().into_owned();

        let outcome = run_session(
            &cli_arg(Some(&path), Some("-1")),
            "typebelow",
            &mut TestClipboard::unavailable(),
            || Ok(InteractiveInputMock::new(["second"])),
            &FixedHeightTerminal::new(20),
            &mut StdoutMock::new(),
        )
        .unwrap();

        assert_eq!(outcome, SessionOutcome::Ended { total_lines: 2 });
    }

    #[test]
    fn test_bad_start_fails_before_the_terminal_is_opened() {
        let report = run_session(
            &cli_arg(None, Some("9")),
            "typebelow",
            &mut TestClipboard::new("one\ntwo"),
            || -> CommonResult<InteractiveInputMock> {
                panic!("the terminal must not be opened")
            },
            &FixedHeightTerminal::new(20),
            &mut StdoutMock::new(),
        )
        .unwrap_err();

        assert_eq!(
            report.downcast_ref::<TypeBelowError>(),
            Some(&TypeBelowError::LineNumberOutOfRange {
                requested: 9,
                total_lines: 2,
                resolved: None,
            })
        );
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let dir = try_create_temp_dir().unwrap();
        let path = dir.join("empty.txt");
        std::fs::write(&path, "").unwrap();
        let path = path.to_string_lossy().into_owned();

        let stdout_mock = StdoutMock::new();
        let report = run_session(
            &cli_arg(Some(&path), None),
            "typebelow",
            &mut TestClipboard::unavailable(),
            || Ok(InteractiveInputMock::immediate_end_of_input()),
            &FixedHeightTerminal::new(20),
            &mut stdout_mock.clone(),
        )
        .unwrap_err();

        assert_eq!(
            report.downcast_ref::<TypeBelowError>(),
            Some(&TypeBelowError::EmptyInput)
        );
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }

    #[test]
    fn test_terminal_open_failure_is_reported() {
        let report = run_session(
            &cli_arg(None, None),
            "typebelow",
            &mut TestClipboard::new("text"),
            || -> CommonResult<InteractiveInputMock> {
                Err(TypeBelowError::InteractiveChannelUnavailable {
                    device: "/dev/tty".into(),
                    reason: "No such device or address".into(),
                }
                .into())
            },
            &FixedHeightTerminal::new(20),
            &mut StdoutMock::new(),
        )
        .unwrap_err();

        assert!(matches!(
            report.downcast_ref::<TypeBelowError>(),
            Some(TypeBelowError::InteractiveChannelUnavailable { .. })
        ));
    }
}
