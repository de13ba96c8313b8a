// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs::File,
          io::{BufRead, BufReader}};

use super::{InteractiveInput, ReadLineOutcome};
use crate::{CommonResult, TypeBelowError};

/// The controlling terminal, opened for reading.
#[cfg(unix)]
pub const CONTROLLING_TERMINAL_DEVICE: &str = "/dev/tty";

/// The console, opened for reading.
#[cfg(windows)]
pub const CONTROLLING_TERMINAL_DEVICE: &str = "CON";

/// Reads what the user types from [`CONTROLLING_TERMINAL_DEVICE`]. This works even when
/// stdin is a pipe or a redirected file. Any other [`BufRead`] can stand in for the
/// device with [`TtyInputDevice::from_reader`].
#[derive(Debug)]
pub struct TtyInputDevice<R = BufReader<File>> {
    reader: R,
}

impl TtyInputDevice {
    /// # Errors
    ///
    /// Returns [`TypeBelowError::InteractiveChannelUnavailable`] if there is no
    /// controlling terminal, eg: when run from cron or a CI job.
    pub fn try_open() -> CommonResult<Self> {
        Self::try_open_path(CONTROLLING_TERMINAL_DEVICE)
    }

    /// # Errors
    ///
    /// Returns [`TypeBelowError::InteractiveChannelUnavailable`] if `device` can't be
    /// opened for reading.
    pub fn try_open_path(device: &str) -> CommonResult<Self> {
        match File::open(device) {
            Ok(file) => {
                tracing::debug!(message = "⌨️ Interactive terminal opened", device = %device);
                Ok(Self {
                    reader: BufReader::new(file),
                })
            }
            Err(err) => Err(TypeBelowError::InteractiveChannelUnavailable {
                device: device.to_string(),
                reason: err.to_string(),
            }
            .into()),
        }
    }
}

impl<R: BufRead> TtyInputDevice<R> {
    #[must_use]
    pub fn from_reader(reader: R) -> Self { Self { reader } }
}

impl<R: BufRead> InteractiveInput for TtyInputDevice<R> {
    fn read_line(&mut self) -> ReadLineOutcome {
        let mut acc = Vec::new();
        match self.reader.read_until(b'\n', &mut acc) {
            Ok(0) => ReadLineOutcome::EndOfInput,
            Ok(_) => ReadLineOutcome::Line(strip_line_terminator(&acc)),
            Err(err) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "Read from interactive terminal failed, treating as end of input",
                    error = %err
                );
                ReadLineOutcome::EndOfInput
            }
        }
    }
}

/// Drop a trailing `\n` or `\r\n`, and decode lossily since the typed text is never
/// written back out.
#[must_use]
pub fn strip_line_terminator(line: &[u8]) -> String {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}
