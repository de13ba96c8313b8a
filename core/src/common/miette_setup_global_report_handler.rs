// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Background information on miette's architecture:
//! - Miette allows customization how the [`miette::Report`] is displayed to terminal
//!   output, when the top-level miette handler in `main() -> miette::Result<_>` is
//!   activated. This hook is only activated at the time that the error is displayed, it
//!   is lazy. So it is possible to detect the terminal width just before the output is
//!   generated.
//! - Using [`miette::MietteHandlerOpts`] you can configure the default
//!   [`miette::MietteHandler`]. Under the hood, `build()` produces a
//!   [`miette::GraphicalReportHandler`] which is the "real" handler struct.

use miette::MietteHandlerOpts;
use tracing::debug;

use crate::DEFAULT_TERMINAL_WIDTH;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
///
/// `maybe_footer` is printed below every report, eg: where to file issues.
pub fn setup_default_miette_global_report_handler(maybe_footer: Option<&'static str>) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_TERMINAL_WIDTH, |(columns, _rows)| columns);
            debug!("miette::set_hook -> terminal_width: {}", it);
            usize::from(it)
        };
        let opts = MietteHandlerOpts::new()
            .width(terminal_width)
            .wrap_lines(true)
            .unicode(true)
            .tab_width(4)
            .break_words(true)
            .with_cause_chain();
        let opts = match maybe_footer {
            Some(footer) => opts.footer(footer.to_string()),
            None => opts,
        };
        Box::new(opts.build())
    }))
    .ok();
}
