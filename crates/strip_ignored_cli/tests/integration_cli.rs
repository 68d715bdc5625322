// crates/strip_ignored_cli/tests/integration_cli.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = "    // acquit:ignore:start\n    setup();\n    // acquit:ignore:end\n    var x = 1;\n    ++x;\n";

fn strip_ignored() -> Command {
    let mut cmd = Command::cargo_bin("strip_ignored").unwrap();
    cmd.env_remove("STRIP_IGNORED_START")
        .env_remove("STRIP_IGNORED_END")
        .env_remove("STRIP_IGNORED_NEXT_LINE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_stdin_to_stdout() {
    strip_ignored()
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("var x = 1;\n++x;\n");
}

#[test]
fn test_no_trailing_newline_is_added() {
    strip_ignored()
        .write_stdin("a\n// acquit:ignore-next-line\nb\nc")
        .assert()
        .success()
        .stdout("a\nc");
}

#[test]
fn test_file_to_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("sample.js");
    let output = dir.path().join("out.js");
    fs::write(&input, SAMPLE).unwrap();

    strip_ignored()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "var x = 1;\n++x;\n");
}

#[test]
fn test_custom_markers_from_flags() {
    strip_ignored()
        .args(["--start", "// bacon", "--end", "// eggs"])
        .write_stdin("a\n// bacon\nb\n// eggs\n// acquit:ignore:start\n")
        .assert()
        .success()
        .stdout("a\n// acquit:ignore:start\n");
}

#[test]
fn test_custom_markers_from_environment() {
    strip_ignored()
        .env("STRIP_IGNORED_NEXT_LINE", "# skip")
        .write_stdin("a\n# skip\nb\nc\n")
        .assert()
        .success()
        .stdout("a\nc\n");
}

#[test]
fn test_flag_overrides_environment() {
    strip_ignored()
        .env("STRIP_IGNORED_NEXT_LINE", "# skip")
        .args(["--next-line", "# drop"])
        .write_stdin("# skip\n# drop\nb\nc\n")
        .assert()
        .success()
        .stdout("# skip\nc\n");
}

#[test]
fn test_indent_policy_flag() {
    let code = "// acquit:ignore:start\nsetTimeout(function() {\n// acquit:ignore:end\n  something.save()\n";
    strip_ignored()
        .write_stdin(code)
        .assert()
        .success()
        .stdout("something.save()\n");
    strip_ignored()
        .arg("--no-indent-from-following-line")
        .write_stdin(code)
        .assert()
        .success()
        .stdout("  something.save()\n");
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.js");
    strip_ignored()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}

#[test]
fn test_verbose_warns_about_unterminated_region() {
    strip_ignored()
        .arg("--verbose")
        .write_stdin("a\n// acquit:ignore:start\nb\n")
        .assert()
        .success()
        .stdout("a\n")
        .stderr(predicate::str::contains("never closed"));
}
