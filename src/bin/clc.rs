// src/bin/clc.rs

//! Driver program _clc_ drives the [_clclib_].
//!
//! Processes user-passed command-line arguments.
//! If STDIN is piped then lines are read from STDIN, otherwise an
//! `adb <ADB_ARGS> logcat` subprocess is started and lines are read from
//! its stdout.
//!
//! Each line is classified and printed by a [`LogcatProcessor`] until the
//! end of the stream or until the user presses Ctrl+C.
//!
//! `clc.rs` should be the main thread and the only thread that prints to STDOUT.
//!
//! [_clclib_]: clclib
//! [`LogcatProcessor`]: clclib::readers::logcatprocessor::LogcatProcessor

#![allow(non_camel_case_types)]

use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Instant;

use ::anyhow;
use ::clap::{
    Parser,
    ValueEnum,
};
use ::const_format::concatcp;
#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
    stack::stack_offset_set,
};

use ::clclib::common::{Width, ADB_DEFAULT};
use ::clclib::{e_err, e_wrn};
use ::clclib::printer::printers::{
    ColorChoice,
    PrinterLogcat,
};
use ::clclib::printer::summary::print_summary;
use ::clclib::readers::geometry::TerminalGeometry;
use ::clclib::readers::linesource::{
    AdbSource,
    LineSource,
};
use ::clclib::readers::logcatprocessor::{
    ExitSignal,
    LogcatProcessor,
};

/// process exit code when interrupted by the user
const EXIT_OK: i32 = 0;

/// Shared with the Ctrl+C handler.
static EXIT_SIGNAL: ExitSignal = ExitSignal::new();

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

const CLI_HELP_AFTER: &str = concatcp!(
    r#"Reads from STDIN if STDIN is piped, e.g.

    adb logcat -v threadtime | clc

otherwise runs "adb [ADB_ARGS] logcat", e.g.

    clc -- -s emulator-5554

Recognized line formats are "brief", "time", "threadtime", and the format
printed by clc. Other lines are not printed.

---

Version: "#, env!("CARGO_PKG_VERSION"), r#"
MSRV: "#, env!("CARGO_PKG_RUST_VERSION"), r#"
License: "#, env!("CARGO_PKG_LICENSE"), r#"
"#,
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    name = "clc",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(colored logcat)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Arguments passed to adb before the "logcat" command, e.g. "-d" or
    /// "-s SERIAL". Pass "--" first so they are not read as clc options.
    #[clap(
        required = false,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        verbatim_doc_comment,
    )]
    adb_args: Vec<String>,

    /// Choose to print to terminal using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,

    /// Wrap messages at this width instead of the terminal width.
    /// Default is the terminal width, or 80 if STDOUT is not a terminal.
    #[clap(
        short = 'w',
        long,
        verbatim_doc_comment,
        value_parser = clap::value_parser!(u16).range(1..),
    )]
    width: Option<u16>,

    /// Read from STDIN even if STDIN is a terminal.
    #[clap(
        long,
        verbatim_doc_comment,
    )]
    stdin: bool,

    /// Path of the adb program.
    #[clap(
        long,
        verbatim_doc_comment,
        default_value_t = String::from(ADB_DEFAULT),
    )]
    adb: String,

    /// Print a summary of lines processed to stderr.
    /// Most useful for developers.
    #[clap(
        short,
        long,
        verbatim_doc_comment,
    )]
    summary: bool,
}

/// set a process signal handler
///
/// The handler waits for any line being printed, then exits.
pub fn set_signal_handler() -> anyhow::Result<(), ctrlc::Error> {
    defn!();

    ctrlc::set_handler(move || {
        defn!();
        let _guard = EXIT_SIGNAL.request_exit();
        defx!("exit {}", EXIT_OK);
        std::process::exit(EXIT_OK);
    })?;

    defx!();

    Ok(())
}

/// Process the user-passed command-line arguments.
/// Run the [`LogcatProcessor`].
/// Determine a process return code.
///
/// [`LogcatProcessor`]: clclib::readers::logcatprocessor::LogcatProcessor
pub fn main() -> ExitCode {
    let start_time = Instant::now();
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let args = CLI_Args::parse();
    defo!("args {:?}", args);

    // map `CLI_Color_Choice` to `ColorChoice`
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };
    defo!("color_choice {:?}", color_choice);

    if let Err(err) = set_signal_handler() {
        e_err!("set_signal_handler() failed: {:?}", err);
        defx!("return FAILURE");
        return ExitCode::FAILURE;
    }

    let geometry = TerminalGeometry::from_terminal()
        .with_width(args.width.map(|w| w as Width));
    defo!("geometry {:?}", geometry);

    let stdin = std::io::stdin();
    let mut source: Box<dyn LineSource> = if args.stdin || !stdin.is_terminal() {
        defo!("read from STDIN");
        if !args.adb_args.is_empty() {
            e_wrn!("reading from STDIN; ignoring ADB_ARGS {:?}", args.adb_args);
        }
        Box::new(stdin.lock())
    } else {
        match AdbSource::spawn(&args.adb, &args.adb_args) {
            Ok(adb) => {
                defo!("read from {:?}", adb);
                Box::new(adb)
            }
            Err(err) => {
                e_err!("{}", err);
                defx!("return FAILURE");
                return ExitCode::FAILURE;
            }
        }
    };

    let mut printer = PrinterLogcat::new(color_choice);
    let mut processor = LogcatProcessor::new(&geometry);
    let exitcode: ExitCode = match processor.process(source.as_mut(), &mut printer, &EXIT_SIGNAL) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            e_err!("{}", err);
            ExitCode::FAILURE
        }
    };
    // stop the adb subprocess, if any
    drop(source);

    if args.summary {
        print_summary(processor.summary(), processor.geometry(), color_choice, start_time);
    }
    defx!("exitcode {:?}", exitcode);

    exitcode
}
