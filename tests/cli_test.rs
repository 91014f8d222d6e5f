use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use hailsolve::puzzle::SAMPLE;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hailsolve"))
        .args(args)
        .output()
        .expect("Failed to execute hailsolve")
}

fn write_input(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("hailsolve_{}_{}.txt", name, std::process::id()));
    fs::write(&path, content).expect("Failed to write input file");
    path
}

#[test]
fn test_solve_builtin_input() {
    let output = run_cli(&["solve"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.first(), Some(&"sat"));
    assert!(stdout.contains("x = 191146615936494"));
    assert!(stdout.contains("x + y + z = 664822352550558"));
    assert_eq!(lines.last(), Some(&"664822352550558"));
}

#[test]
fn test_solve_sample_file() {
    let path = write_input("sample", SAMPLE);
    let output = run_cli(&["solve", "--input", path.to_str().unwrap(), "--verbose"]);
    let _ = fs::remove_file(&path);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("x + y + z = 47"));
    assert!(stdout.contains("Oracle: z3"));
}

#[test]
fn test_solve_unsat_exits_with_error() {
    let path = write_input(
        "unsat",
        "19, 13, 30 @ -2, 1, -2\n18, 19, 22 @ -1, -1, -2\n20, 25, 34 @ -2, -2, -4\n0, 0, 0 @ 0, 0, 0\n",
    );
    let output = run_cli(&["solve", "-i", path.to_str().unwrap()]);
    let _ = fs::remove_file(&path);

    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "unsat");
    assert!(String::from_utf8_lossy(&output.stderr).contains("no solution"));
}

const MET_IN_THE_PAST: &str = "29, 13, -10 @ -2, 1, -2\n30, 7, -2 @ -1, -1, -2\n28, 1, -14 @ -2, -2, -4\n";

#[test]
fn test_solve_allow_negative_time() {
    let path = write_input("past", MET_IN_THE_PAST);

    let bounded = run_cli(&["solve", "--input", path.to_str().unwrap()]);
    let relaxed = run_cli(&[
        "solve",
        "--input",
        path.to_str().unwrap(),
        "--allow-negative-time",
    ]);
    let _ = fs::remove_file(&path);

    assert!(!bounded.status.success());
    assert_eq!(String::from_utf8_lossy(&bounded.stdout).trim(), "unsat");

    let stdout = String::from_utf8_lossy(&relaxed.stdout);
    assert!(
        relaxed.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&relaxed.stderr)
    );
    assert!(stdout.contains("t1 = -3"));
    assert!(stdout.contains("x + y + z = 47"));
}

#[test]
fn test_solve_with_timeout() {
    let path = write_input("timeout", SAMPLE);
    let output = run_cli(&["solve", "--input", path.to_str().unwrap(), "--timeout", "60"]);
    let _ = fs::remove_file(&path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next(), Some("sat"));
    assert_eq!(stdout.lines().last(), Some("47"));
}

#[test]
fn test_solve_rejects_non_numeric_timeout() {
    let output = run_cli(&["solve", "--timeout", "soon"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--timeout"));
}

#[test]
fn test_solve_reports_parse_errors() {
    let path = write_input("malformed", "19, 13 @ -2, 1, -2\n");
    let output = run_cli(&["solve", "--input", path.to_str().unwrap()]);
    let _ = fs::remove_file(&path);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 1"));
    assert!(stderr.contains("expected 3 position components"));
}

#[test]
fn test_intersect_sample() {
    let path = write_input("intersect", SAMPLE);
    let output = run_cli(&[
        "intersect",
        "--input",
        path.to_str().unwrap(),
        "--min",
        "7",
        "--max",
        "27",
    ]);
    let _ = fs::remove_file(&path);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "2");
}

#[test]
fn test_intersect_rejects_empty_area() {
    let output = run_cli(&["intersect", "--min", "10", "--max", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("empty test area"));
}
