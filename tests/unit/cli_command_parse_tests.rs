use std::path::PathBuf;

use clap::Parser;

use janitor::cli::{Cli, Commands, OutputFormat};

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["janitor"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

#[test]
fn parse_find_all_flags() {
    let cli = parse(&[
        "find",
        "--before",
        "2023-03-01T00:00:00Z",
        "--ignore",
        "^keep-",
        "--space-guid",
        "space-1",
        "--input",
        "apps.json",
        "--show-ignored",
    ]);
    match cli.command {
        Commands::Find(args) => {
            assert_eq!(args.before.as_deref(), Some("2023-03-01T00:00:00Z"));
            assert_eq!(args.ignore.as_deref(), Some("^keep-"));
            assert_eq!(args.space_guid.as_deref(), Some("space-1"));
            assert_eq!(args.input, Some(PathBuf::from("apps.json")));
            assert!(args.show_ignored);
        }
    }
}

#[test]
fn parse_find_without_before_is_allowed() {
    // Absence is reported as a missing argument when the command runs.
    let cli = parse(&["find"]);
    let Commands::Find(args) = cli.command;
    assert!(args.before.is_none());
    assert!(args.ignore.is_none());
    assert!(!args.show_ignored);
}

#[test]
fn parse_global_flags_after_subcommand() {
    let cli = parse(&["find", "--before", "now", "-vv", "--format", "jsonl"]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.output_format(), Some(OutputFormat::Jsonl));
    assert!(cli.wants_json());
}

#[test]
fn robot_overrides_format() {
    let cli = parse(&["--robot", "--format", "plain", "find", "--before", "now"]);
    assert_eq!(cli.output_format(), Some(OutputFormat::Json));
}

#[test]
fn no_format_flag_defers_to_config() {
    let cli = parse(&["-q", "find", "--before", "now"]);
    assert!(cli.quiet);
    assert_eq!(cli.output_format(), None);
    assert!(!cli.wants_json());
}
