// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "typebelow")]
#[command(about = "⌨️ Reveal text one line at a time, and type each line below it")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    /* cspell:disable-next-line */
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nRead from a file, from piped stdin with `-`, or from the clipboard when no source is given.\nUSAGE 📓:\n  typebelow [\x1b[34moptions\x1b[0m] [\x1b[32msource\x1b[0m]\n\nEXAMPLES:\n  typebelow notes.txt          Start at the first line of notes.txt\n  typebelow -s 10 notes.txt    Start at line 10\n  typebelow -s -2 notes.txt    Start 2 lines from the end\n  cat notes.txt | typebelow -  Read piped text\n  typebelow                    Read the clipboard\n\nPress Ctrl+D to stop. typebelow prints a command that resumes on the same line.\n\n[options]\n{options}"
)]
pub struct CLIArg {
    /// A file path, `-` for piped or redirected stdin. Leave it out to read the
    /// clipboard.
    #[arg(name = "source")]
    pub source: Option<String>,

    #[arg(
        short = 's',
        long = "start",
        value_name = "LINE",
        allow_hyphen_values = true,
        help = "Line to start on. Negative numbers count back from the end, eg: `-1` is the last line."
    )]
    pub start: Option<String>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_command_is_well_formed() { CLIArg::command().debug_assert(); }

    #[test_case(&["typebelow"], None, None, false; "clipboard")]
    #[test_case(&["typebelow", "notes.txt"], Some("notes.txt"), None, false; "file")]
    #[test_case(&["typebelow", "-"], Some("-"), None, false; "pipe")]
    #[test_case(&["typebelow", "-s", "10", "notes.txt"], Some("notes.txt"), Some("10"), false; "positive start")]
    #[test_case(&["typebelow", "-s", "-2", "-"], Some("-"), Some("-2"), false; "negative start with pipe")]
    #[test_case(&["typebelow", "--start=abc", "-l"], None, Some("abc"), true; "unvalidated start and logging")]
    fn test_parse(
        args: &[&str],
        source: Option<&str>,
        start: Option<&str>,
        enable_logging: bool,
    ) {
        let it = CLIArg::try_parse_from(args).unwrap();
        assert_eq!(it.source.as_deref(), source);
        assert_eq!(it.start.as_deref(), start);
        assert_eq!(it.global_options.enable_logging, enable_logging);
    }

    #[test]
    fn test_start_needs_a_value() {
        assert!(CLIArg::try_parse_from(["typebelow", "-s"]).is_err());
    }
}
