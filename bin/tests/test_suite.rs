use std::process::Command;

use itertools::Itertools;
use lazy_regex::regex;
use test_suite_proc_macro::generate_tests;

use pretty_assertions::assert_eq;

/// Runs the `rlox` binary on the case at `path` and checks its output
/// against the `// expect: ...` and `// [line N] Error...` comments in it.
pub fn lox_expect(path: &str) {
    let code = std::fs::read_to_string(path).unwrap();

    let error_regex = regex!(r"// (\[line \d+\] Error.*)");
    let output_regex = regex!(r"// expect: (.*)");

    let mut expected_errors = vec![];
    let mut expected_output = vec![];
    for line in code.lines() {
        if let Some(cap) = error_regex.captures(line) {
            expected_errors.push(cap[1].to_string());
        } else if let Some(cap) = output_regex.captures(line) {
            expected_output.push(cap[1].to_string());
        }
    }

    let output = Command::new(env!("CARGO_BIN_EXE_rlox"))
        .arg(path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(
        String::from_utf8(output.stdout).unwrap().lines().collect_vec(),
        expected_output,
        "Actual output (left) does not match expected output (right)"
    );
    assert_eq!(
        String::from_utf8(output.stderr).unwrap().lines().collect_vec(),
        expected_errors,
        "Actual errors (left) do not match expected errors (right)"
    );
    assert_eq!(
        output.status.code(),
        Some(if expected_errors.is_empty() { 0 } else { 65 })
    );
}

generate_tests!();
