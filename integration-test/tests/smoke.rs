use std::process::Command;
use std::sync::Once;
use test_driver::{run, RunOutput};

fn target_dir() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    format!("{manifest_dir}/../target/debug")
}

fn optdump_binary() -> String {
    format!("{}/optdump", target_dir())
}

static BUILD_INIT: Once = Once::new();

/// Build the optdump binary if not already done.
fn ensure_binary() {
    BUILD_INIT.call_once(|| {
        let manifest_dir = env!("CARGO_MANIFEST_DIR");
        let workspace_root = format!("{manifest_dir}/..");
        let status = Command::new("cargo")
            .args(["build", "-p", "gangopt"])
            .current_dir(&workspace_root)
            .status()
            .expect("failed to run cargo build");
        assert!(status.success(), "cargo build -p gangopt failed");
    });
}

fn optdump(args: &[&str], expected_code: i32) -> RunOutput {
    ensure_binary();
    run(&optdump_binary(), args, &[], expected_code)
}

const TRY_HELP: &str = "Try 'optdump --help' or 'optdump --usage' for more information.\n";

#[test]
fn test_ganged_shorts_and_positionals() {
    let out = optdump(&["-avvn", "bob", "-p=8080", "src", "a", "b"], 0);
    assert_eq!(out.field("all"), "true");
    assert_eq!(out.field("verbose"), "2");
    assert_eq!(out.field("name"), "bob");
    assert_eq!(out.field("port"), "8080");
    assert_eq!(out.field("source"), "src");
    assert_eq!(out.field("targets"), "a,b");
    assert!(out.stderr.is_empty(), "stderr: {}", out.stderr);
}

#[test]
fn test_long_prefix_and_inline_value() {
    let out = optdump(&["--na=alice", "--verb", "--color", "src", "dst"], 0);
    assert_eq!(out.field("name"), "alice");
    assert_eq!(out.field("verbose"), "1");
    assert_eq!(out.field("color"), "always");
}

#[test]
fn test_alias_with_value() {
    let out = optdump(&["--colour=never", "src", "dst"], 0);
    assert_eq!(out.field("color"), "never");
}

#[test]
fn test_list_option_stops_at_option() {
    let out = optdump(&["-I", "x", "y", "--all", "src", "dst"], 0);
    assert_eq!(out.field("include"), "x,y");
    assert_eq!(out.field("all"), "true");
}

#[test]
fn test_terminator_allows_dash_positionals() {
    let out = optdump(&["-a", "--", "-src", "--", "-x"], 0);
    assert_eq!(out.field("source"), "-src");
    assert_eq!(out.field("targets"), "--,-x");
}

#[test]
fn test_unknown_option() {
    let out = optdump(&["-z", "src", "dst"], 1);
    assert_eq!(out.stderr, format!("optdump: unknown option: -z\n{TRY_HELP}"));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_ambiguous_prefix_is_unknown() {
    // --co matches both --color and --colour.
    let out = optdump(&["--co", "src", "dst"], 1);
    assert!(out.stderr.starts_with("optdump: unknown option: --co\n"));
}

#[test]
fn test_missing_argument() {
    let out = optdump(&["src", "dst", "-n"], 1);
    assert!(
        out.stderr.starts_with("optdump: invalid positional argument: -n\n"),
        "stderr: {}",
        out.stderr
    );

    let out = optdump(&["--name"], 1);
    assert!(out.stderr.starts_with("optdump: missing argument for option: --name\n"));
}

#[test]
fn test_superfluous_argument() {
    let out = optdump(&["--all=yes", "src", "dst"], 1);
    assert!(out.stderr.starts_with("optdump: option doesn't take an argument: --all\n"));
}

#[test]
fn test_invalid_argument_from_setter() {
    let out = optdump(&["--port", "http", "src", "dst"], 1);
    assert!(
        out.stderr.starts_with("optdump: invalid argument 'http' for --port: "),
        "stderr: {}",
        out.stderr
    );

    let out = optdump(&["--color=blue", "src", "dst"], 1);
    assert!(out
        .stderr
        .starts_with("optdump: invalid argument 'blue' for --color: expected always, never or auto\n"));
}

#[test]
fn test_missing_positional() {
    let out = optdump(&["src"], 1);
    assert!(out.stderr.starts_with("optdump: missing positional argument: TARGET\n"));

    let out = optdump(&[], 1);
    assert!(out.stderr.starts_with("optdump: missing positional argument: SOURCE\n"));
}

#[test]
fn test_misplaced_terminator() {
    let out = optdump(&["src", "--", "dst"], 1);
    assert!(out.stderr.starts_with("optdump: misplaced terminator: --\n"));
}

#[test]
fn test_help_and_usage() {
    let out = optdump(&["--help"], 0);
    assert!(out.stdout.starts_with("Usage: optdump [OPTIONS] SOURCE TARGET...\n"));
    assert!(out.stdout.contains("\nOutput:\n"));
    assert!(out.stdout.contains("  -I, --include=DIR...        Directories to search\n"));
    assert!(out.stdout.contains("      --help                  Give this help list\n"));
    assert!(out.stderr.is_empty());

    let out = optdump(&["--us"], 0);
    assert!(out.stdout.starts_with("Usage: optdump [-av] "));
    assert!(out.stdout.ends_with("SOURCE TARGET...\n"));
}

#[test]
fn test_help_wins_before_missing_positionals() {
    let out = optdump(&["-a", "--help"], 0);
    assert!(out.stdout.starts_with("Usage: optdump"));
}

#[test]
fn test_trace_logging_goes_to_stderr() {
    ensure_binary();
    let out = run(
        &optdump_binary(),
        &["-a", "src", "dst"],
        &[("RUST_LOG", "gangopt=trace"), ("NO_COLOR", "1")],
        0,
    );
    assert_eq!(out.field("all"), "true");
    assert!(out.stderr.contains("parse complete"), "stderr: {}", out.stderr);
    assert!(!out.stdout.contains("parse complete"));
}
