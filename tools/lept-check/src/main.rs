//! `lept-check`: validate that each input holds exactly one JSON scalar.

use lept_check::{init_tracing, CheckConfig, CheckError, Checker};

fn main() {
    init_tracing();

    let (config, inputs) = match CheckConfig::from_args(std::env::args().skip(1)) {
        Ok(parsed) => parsed,
        Err(CheckError::Usage(msg)) => {
            eprintln!("error: {msg}");
            print_usage();
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let checker = Checker::new(config);
    let summary = checker.run(&inputs);

    for report in &summary.reports {
        if let Some(line) = report.render(checker.config()) {
            println!("{line}");
        }
    }
    if !checker.config().quiet {
        println!(
            "{} passed, {} failed ({:.2?})",
            summary.passed(),
            summary.failed(),
            summary.duration
        );
    }

    if summary.has_failures() {
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: lept-check [options] <path>...");
    eprintln!();
    eprintln!("Each input must contain exactly one JSON value (null, true, false, or a number).");
    eprintln!("Use `-` to read standard input.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -q, --quiet       Only report failures");
    eprintln!("  -v, --verbose     Print the parsed value of each input");
    eprintln!("  --no-parallel     Check inputs one at a time");
}
