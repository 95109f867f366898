use std::path::Path;
use std::process::Command;

/// Run the fdump binary with the given args and return (exit_code, stdout).
fn run_fdump(args: &[&str]) -> (i32, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_fdump"))
        .args(args)
        .output()
        .expect("failed to execute fdump");

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    (code, stdout)
}

#[test]
fn no_args_exits_zero_with_greeting() {
    let (code, stdout) = run_fdump(&[]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("fdump v"), "greeting missing: {stdout}");
    assert!(stdout.contains("(0 argument(s))"));
    assert!(stdout.contains("dumping /test.c"));
    // No arguments, no echo section.
    assert!(!stdout.contains("arguments:"));
}

#[test]
fn echoes_arguments_verbatim() {
    let (code, stdout) = run_fdump(&["alpha", "beta gamma"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("(2 argument(s))"));
    assert!(stdout.contains("arguments:"));
    assert!(stdout.contains("arg[0] = \"alpha\""));
    assert!(stdout.contains("arg[1] = \"beta gamma\""));
}

#[test]
fn hyphen_arguments_are_echoed_not_parsed() {
    let (code, stdout) = run_fdump(&["--weird", "-x"]);
    assert_eq!(code, 0, "unknown flags must be treated as plain arguments");
    assert!(stdout.contains("arg[0] = \"--weird\""));
    assert!(stdout.contains("arg[1] = \"-x\""));
}

#[test]
fn target_outcome_is_reported_and_exit_stays_zero() {
    let (code, stdout) = run_fdump(&[]);
    // Open failure is narrated on stdout, never via the exit code.
    assert_eq!(code, 0);

    if Path::new("/test.c").exists() {
        let contents = String::from_utf8_lossy(&std::fs::read("/test.c").unwrap()).into_owned();
        assert!(stdout.contains(&contents), "dump missing file contents");
        assert!(stdout.contains("bytes ==="), "byte-count trailer missing");
    } else {
        assert!(
            stdout.contains("failed to open /test.c"),
            "open-failure notice missing: {stdout}"
        );
    }
}
