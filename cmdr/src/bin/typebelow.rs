// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Derive reference](https://docs.rs/clap/latest/clap/_derive/index.html)

use clap::Parser;
use typebelow_cmdr::typebelow::{CLIArg, run_typebelow, ui_str};
use typebelow_core::{CommonResult, SessionOutcome, ok, try_initialize_logging_global,
                     setup_default_miette_global_report_handler};

const DEFAULT_PROGRAM_NAME: &str = "typebelow";

fn main() -> CommonResult<()> {
    setup_default_miette_global_report_handler(None);

    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    // The resume hint repeats the program the way it was invoked.
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());

    let res = match run_typebelow(&cli_arg, &program) {
        Ok(outcome) => {
            display_session_outcome(&outcome);
            ok!()
        }
        Err(report) => {
            report_unrecoverable_errors(&report);
            Err(report)
        }
    };

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    res
}

/// Both outcomes already printed their closing message, this only logs them.
fn display_session_outcome(outcome: &SessionOutcome) {
    // % is Display, ? is Debug.
    tracing::debug!(message = "typebelow finished", outcome = ?outcome);
}

/// Returning the report from `main()` hands it to the global miette report handler,
/// which prints it and exits with a non-zero status.
fn report_unrecoverable_errors(report: &miette::Report) {
    // % is Display, ? is Debug.
    tracing::error!(
        message = "Could not run typebelow due to the following problem",
        error = ?report
    );

    eprintln!("{}", ui_str::unrecoverable_error_msg());
}
