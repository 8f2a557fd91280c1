//! Exit codes and stream discipline: results on stdout, diagnostics on
//! stderr, 0 for success and 2 for any failure.

fn run(args: &[&str]) -> (i32, String, String) {
    let argv: Vec<String> = std::iter::once("potsettle".to_string())
        .chain(args.iter().map(|s| s.to_string()))
        .collect();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = potsettle_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn help_goes_to_stdout_with_zero() {
    let (code, stdout, stderr) = run(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("settle"));
    assert!(stderr.is_empty());
}

#[test]
fn version_exits_zero() {
    let (code, stdout, _) = run(&["--version"]);
    assert_eq!(code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_command_lists_available_commands() {
    let (code, stdout, stderr) = run(&["play"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    for cmd in ["settle", "verify", "deal", "cfg"] {
        assert!(stderr.contains(&format!("  {cmd}")), "{cmd} missing: {stderr}");
    }
}

#[test]
fn deal_output_is_a_single_json_line() {
    let (code, stdout, stderr) = run(&["deal", "--seed", "42"]);
    assert_eq!(code, 0, "stderr={stderr}");
    assert_eq!(stdout.lines().count(), 1);
    let hand: potsettle_engine::Hand = serde_json::from_str(&stdout).unwrap();
    assert_eq!(hand.id, "sample-42");
}

#[test]
fn deal_rejects_stack_at_or_below_blind() {
    let (code, stdout, stderr) = run(&["deal", "--bb-size", "100", "--stack", "50"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("Error: Invalid input: stack 50 must exceed the big blind 100"));
}
