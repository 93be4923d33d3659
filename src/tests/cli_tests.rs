//! # Command-Line Parsing Tests
//!
//! Checks that the coordinate flags accept the values a user types at the
//! prompt, negative ones included.

use crate::Cli;
use clap::Parser;

/// Negative coordinates parse as values, not as unknown flags.
#[test]
fn negative_coordinates_parse() {
    let cli = Cli::try_parse_from(["bca-analysis", "--closure", "-0.5", "--cursor", "-1"])
        .expect("negative coordinates should parse");
    assert_eq!(cli.closure, Some(-0.5));
    assert_eq!(cli.cursor, Some(-1.0));
}

/// Mode and window overrides reach the parsed arguments.
#[test]
fn mode_and_window_overrides() {
    let cli = Cli::try_parse_from(["bca-analysis", "-m", "sqrt", "-w", "0", "-vv", "--json"])
        .expect("overrides should parse");
    assert!(matches!(cli.mode, Some(crate::ModeArg::Sqrt)));
    assert_eq!(cli.window, Some(0));
    assert_eq!(cli.verbose, 2);
    assert!(cli.json);
}

/// A window half-width cannot be negative.
#[test]
fn negative_window_is_rejected() {
    assert!(Cli::try_parse_from(["bca-analysis", "--window", "-1"]).is_err());
}
