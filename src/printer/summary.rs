// src/printer/summary.rs

//! CLI option `--summary` printing functions.
//! Only used by `clc.rs`.

use std::time::{Duration, Instant};

use ::si_trace_print::defñ;

use crate::common::Count;
use crate::data::logline::LINE_GRAMMARS;
use crate::printer::colors::AnsiColor;
use crate::printer::printers::{
    print_colored_stderr,
    ColorChoice,
    COLOR_ERROR,
};
use crate::readers::geometry::TerminalGeometry;
use crate::readers::logcatprocessor::SummaryProcessor;

/// For printing various levels of indentation.
const OPT_SUMMARY_PRINT_INDENT1: &str = "  ";
const OPT_SUMMARY_PRINT_INDENT2: &str = "    ";

/// Color of the summary section titles.
const COLOR_SUMMARY_TITLE: AnsiColor = AnsiColor::Green;

const WIDEN: usize = 9;

/// create percentage of `a` to `total`
fn percent64(a: Count, total: Count) -> f64 {
    if total == 0 {
        return 0.0;
    }

    (a as f64) / (total as f64) * 100.0
}

fn print_title(title: &str, color_choice: ColorChoice) {
    if let Err(_err) = print_colored_stderr(COLOR_SUMMARY_TITLE, Some(color_choice), title.as_bytes()) {
        crate::de_err!("print_colored_stderr error {}", _err);
    }
    eprintln!();
}

/// Print a count, highlighted in [`COLOR_ERROR`] if `highlight` and not
/// zero.
fn print_count(name: &str, count: Count, total: Count, highlight: bool, color_choice: ColorChoice) {
    eprint!("{}{:<24}", OPT_SUMMARY_PRINT_INDENT2, name);
    let value = format!("{:>width$} ({:5.1}%)", count, percent64(count, total), width = WIDEN);
    if highlight && count != 0 {
        if let Err(_err) = print_colored_stderr(COLOR_ERROR, Some(color_choice), value.as_bytes()) {
            crate::de_err!("print_colored_stderr error {}", _err);
        }
        eprintln!();
    } else {
        eprintln!("{}", value);
    }
}

/// Print the `--summary` report of one [`SummaryProcessor`] to stderr.
pub fn print_summary(
    summary: &SummaryProcessor,
    geometry: &TerminalGeometry,
    color_choice: ColorChoice,
    start_time: Instant,
) {
    defñ!("{:?}", summary);
    let elapsed: Duration = Instant::now().duration_since(start_time);
    let total: Count = summary.lines_read;

    eprintln!();
    print_title("Summary:", color_choice);

    eprintln!("{}Input:", OPT_SUMMARY_PRINT_INDENT1);
    eprintln!("{}{:<24}{:>width$}", OPT_SUMMARY_PRINT_INDENT2, "lines", summary.lines_read, width = WIDEN);
    eprintln!("{}{:<24}{:>width$}", OPT_SUMMARY_PRINT_INDENT2, "bytes", summary.bytes_read, width = WIDEN);

    eprintln!("{}Grammars:", OPT_SUMMARY_PRINT_INDENT1);
    for grammar in LINE_GRAMMARS.iter() {
        print_count(grammar.name(), summary.grammar_count(*grammar), total, false, color_choice);
    }

    eprintln!("{}Skipped:", OPT_SUMMARY_PRINT_INDENT1);
    print_count("unrecognized", summary.lines_unrecognized, total, true, color_choice);
    print_count("unknown severity", summary.lines_unknown_severity, total, true, color_choice);

    eprintln!("{}Printed:", OPT_SUMMARY_PRINT_INDENT1);
    print_count("lines", summary.lines_printed, total, false, color_choice);
    eprintln!("{}{:<24}{:>width$}", OPT_SUMMARY_PRINT_INDENT2, "bytes", summary.bytes_printed, width = WIDEN);

    eprintln!("{}Terminal:", OPT_SUMMARY_PRINT_INDENT1);
    eprintln!("{}{:<24}{:>width$}", OPT_SUMMARY_PRINT_INDENT2, "width", geometry.width, width = WIDEN);
    eprintln!("{}{:<24}{:>width$}", OPT_SUMMARY_PRINT_INDENT2, "height", geometry.height, width = WIDEN);

    eprintln!("{}Run:", OPT_SUMMARY_PRINT_INDENT1);
    eprintln!("{}{:<24}{:>width$}", OPT_SUMMARY_PRINT_INDENT2, "interrupted", summary.exit_early, width = WIDEN);
    eprintln!("{}{:<24}{:>width$.3}s", OPT_SUMMARY_PRINT_INDENT2, "elapsed", elapsed.as_secs_f64(), width = WIDEN);
}
