//! Specs for `routeset compile`.

use crate::prelude::*;

#[test]
fn prints_bare_pattern() {
    assert_eq!(compile_stdout(&["ab", "ac"]), "a(b|c)\n");
}

#[test]
fn wrap_flag_groups_single_chain() {
    assert_eq!(compile_stdout(&["x"]), "x\n");
    assert_eq!(compile_stdout(&["x", "--wrap"]), "(x)\n");
}

#[test]
fn escapes_version_dots() {
    assert_eq!(
        compile_stdout(&["1.0.0", "1.0.0-pre", "--wrap"]),
        "(1\\.0\\.0(-pre)?)\n"
    );
}

#[test]
fn output_is_independent_of_argument_order() {
    assert_eq!(
        compile_stdout(&["help", "home", "hello"]),
        compile_stdout(&["hello", "help", "home"])
    );
}

#[test]
fn reads_strings_from_stdin() {
    assert_cmd::Command::from_std(routeset_cmd())
        .args(["compile", "--from", "-"])
        .write_stdin("logo\nicon\n\n")
        .assert()
        .success()
        .stdout("(icon|logo)\n");
}

#[test]
fn reads_strings_from_file_and_arguments() {
    let dir = temp_empty_project();
    let list = dir.path().join("pages.txt");
    std::fs::write(&list, "about\n").unwrap();

    let stdout = compile_stdout(&["index", "--from", list.to_str().unwrap()]);
    assert_eq!(stdout, "(about|index)\n");
}

#[test]
fn json_output() {
    let stdout = compile_stdout(&["a", "ab", "-o", "json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["pattern"], "a(b)?");
    assert_eq!(json["matches_empty"], false);
    assert_eq!(json["members"], 2);
}

#[test]
fn verify_passes_for_compiled_pattern() {
    routeset_cmd()
        .args(["compile", "v1.0", "v1.1", "v2.0", "--verify"])
        .assert()
        .success()
        .stdout("v(1\\.(0|1)|2\\.0)\n");
}

#[test]
fn no_strings_is_argument_error() {
    routeset_cmd()
        .arg("compile")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no strings given"));
}

#[test]
fn empty_string_member_is_rejected_by_default() {
    routeset_cmd()
        .args(["compile", "", "a"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("empty string"));
}

#[test]
fn allow_empty_makes_pattern_optional() {
    let stdout = compile_stdout(&["", "a", "--allow-empty", "-o", "json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["pattern"], "(a)?");
    assert_eq!(json["matches_empty"], true);
}

#[test]
fn missing_input_file_is_internal_error() {
    let dir = temp_empty_project();
    let missing = dir.path().join("missing.txt");
    routeset_cmd()
        .args(["compile", "--from", missing.to_str().unwrap()])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("io error"));
}
