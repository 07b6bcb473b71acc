//! Specs for `routeset build`.

use crate::prelude::*;

const SITE_CONFIG: &str = r#"
version = 1

[sets.versions]
members = ["1.0.0", "1.0.0-pre", "1.1.0"]
wrap = true

[sets.images]
members = ["logo", "icon", "banner"]

[sets.pages]
members = ["", "about", "contact"]
allow_empty = true
"#;

#[test]
fn builds_all_sets_in_name_order() {
    let dir = temp_project(SITE_CONFIG);
    assert_eq!(
        build_stdout(dir.path(), &[]),
        "images\t(banner|icon|logo)\n\
         pages\t(about|contact)?\n\
         versions\t(1\\.(0\\.0(-pre)?|1\\.0))\n"
    );
}

#[test]
fn builds_selected_sets() {
    let dir = temp_project(SITE_CONFIG);
    assert_eq!(
        build_stdout(dir.path(), &["images"]),
        "images\t(banner|icon|logo)\n"
    );
}

#[test]
fn json_output_keys_sets_by_name() {
    let dir = temp_project(SITE_CONFIG);
    let stdout = build_stdout(dir.path(), &["--verify", "-o", "json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["sets"]["pages"]["matches_empty"], true);
    assert_eq!(json["sets"]["versions"]["members"], 3);
    assert_eq!(json["sets"]["images"]["pattern"], "(banner|icon|logo)");
}

#[test]
fn discovers_config_from_subdirectory() {
    let dir = temp_project(SITE_CONFIG);
    let nested = dir.path().join("src").join("templates");
    std::fs::create_dir_all(&nested).unwrap();
    assert!(build_stdout(&nested, &["pages"]).starts_with("pages\t"));
}

#[test]
fn explicit_config_flag() {
    let dir = temp_empty_project();
    let config = dir.path().join("deploy.toml");
    std::fs::write(&config, "version = 1\n[sets.a]\nmembers = [\"x\", \"y\"]\n").unwrap();

    routeset_cmd()
        .args(["build", "-C"])
        .arg(&config)
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("a\t(x|y)\n");
}

#[test]
fn unknown_set_is_argument_error() {
    let dir = temp_project(SITE_CONFIG);
    routeset_cmd()
        .args(["build", "fonts"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown set `fonts`"));
}

#[test]
fn missing_config_is_config_error() {
    let dir = temp_empty_project();
    routeset_cmd()
        .arg("build")
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no routeset.toml found"));
}

#[test]
fn unsupported_version_is_config_error() {
    let dir = temp_project("version = 2\n");
    routeset_cmd()
        .arg("build")
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

#[test]
fn empty_set_names_the_set() {
    let dir = temp_project("version = 1\n[sets.fonts]\nmembers = []\n");
    routeset_cmd()
        .arg("build")
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("set `fonts`").and(predicates::str::contains("empty string set")));
}

#[test]
fn empty_member_without_allow_empty_fails() {
    let dir = temp_project("version = 1\n[sets.pages]\nmembers = [\"\", \"about\"]\n");
    routeset_cmd()
        .arg("build")
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("set `pages`"));
}

#[test]
fn unknown_set_key_warns_with_suggestion() {
    let dir = temp_project("version = 1\n[sets.a]\nmembers = [\"x\"]\nwrapped = true\n");
    routeset_cmd()
        .arg("build")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("a\tx\n")
        .stderr(predicates::str::contains("Did you mean `wrap`?"));
}
