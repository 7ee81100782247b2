//! Integration tests for bgen-cli.
//!
//! Every test that touches files runs inside its own temp directory with a
//! local `.bgen.toml`, so nothing leaks into the user's real config.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const REGISTRY: &str = "\
import { DropdownProps, DropdownState, DropdownOptions } from \"../behaviors/dropdown\";

interface BehaviorTypes {
\t'dropdown': {
\t\tstate: DropdownState,
\t\tprops: DropdownProps,
\t\toptions: DropdownOptions,
\t}
}
";

fn bgen() -> Command {
    Command::cargo_bin("bgen").unwrap()
}

/// Temp project with a local config file and a seeded registry.
fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".bgen.toml"), "").unwrap();
    fs::create_dir_all(temp.path().join("src_ts/build_element")).unwrap();
    fs::write(
        temp.path().join("src_ts/build_element/behaviorTypes.ts"),
        REGISTRY,
    )
    .unwrap();
    temp
}

// ── CLI surface ───────────────────────────────────────────────────────────────

#[test]
fn help_flag() {
    bgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("behavior"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    bgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_command_help() {
    bgen()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--build-element-folder"))
        .stdout(predicate::str::contains("--yes"));
}

#[test]
fn completions_bash() {
    bgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bgen"));
}

// ── config command ────────────────────────────────────────────────────────────

#[test]
fn config_list_shows_defaults() {
    let temp = TempDir::new().unwrap();
    bgen()
        .current_dir(temp.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src_ts/build_element"))
        .stdout(predicate::str::contains("src_ts/defaultTypes.d.ts"));
}

#[test]
fn config_set_persists_across_invocations() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".bgen.toml"), "").unwrap();

    bgen()
        .current_dir(temp.path())
        .args(["config", "set", "paths.behavior_folder", "lib/behaviors"])
        .assert()
        .success();

    bgen()
        .current_dir(temp.path())
        .args(["config", "get", "paths.behavior_folder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lib/behaviors"));
}

#[test]
fn config_path_prints_local_file_when_present() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".bgen.toml"), "").unwrap();

    bgen()
        .current_dir(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".bgen.toml"));
}

// ── new command ───────────────────────────────────────────────────────────────

#[test]
fn new_generates_file_and_patches_registry() {
    let temp = project();

    bgen()
        .current_dir(temp.path())
        .args(["new", "--name", "my-toggle", "--yes"])
        .assert()
        .success();

    // Behavior file rendered with relative imports and folded identifier.
    let behavior = fs::read_to_string(temp.path().join("src_ts/behaviors/my-toggle.ts")).unwrap();
    assert!(behavior.contains("from \"../build_element/buildElement\";"));
    assert!(behavior.contains("from \"../defaultTypes\";"));
    assert!(behavior.contains("export const myToggle = buildElement<MyToggleState, MyToggleProps, MyToggleOptions>"));
    assert!(behavior.contains("name: \"my-toggle\""));

    // Registry gained the entry (after the existing one) and the import
    // (after the existing import run).
    let registry =
        fs::read_to_string(temp.path().join("src_ts/build_element/behaviorTypes.ts")).unwrap();
    assert!(registry.contains(
        "import { MyToggleProps, MyToggleState, MyToggleOptions } from \"../behaviors/my-toggle\";"
    ));
    assert!(registry.contains("\t'my-toggle': {\n\t\tstate: MyToggleState,"));
    assert!(registry.find("'dropdown'").unwrap() < registry.find("'my-toggle'").unwrap());
    assert!(
        registry.find("behaviors/dropdown\";").unwrap()
            < registry.find("behaviors/my-toggle\";").unwrap()
    );
}

#[test]
fn new_into_empty_registry_block() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".bgen.toml"), "").unwrap();
    fs::create_dir_all(temp.path().join("src_ts/build_element")).unwrap();
    fs::write(
        temp.path().join("src_ts/build_element/behaviorTypes.ts"),
        "interface BehaviorTypes {\n}\n",
    )
    .unwrap();

    bgen()
        .current_dir(temp.path())
        .args(["new", "--name", "slider", "--yes"])
        .assert()
        .success();

    let registry =
        fs::read_to_string(temp.path().join("src_ts/build_element/behaviorTypes.ts")).unwrap();
    assert_eq!(registry.matches("'slider': {").count(), 1);
    assert!(registry.starts_with("import { SliderProps, SliderState, SliderOptions }"));
}

#[test]
fn new_with_malformed_registry_warns_but_succeeds() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".bgen.toml"), "").unwrap();
    fs::create_dir_all(temp.path().join("src_ts/build_element")).unwrap();
    fs::write(
        temp.path().join("src_ts/build_element/behaviorTypes.ts"),
        "// registry went missing\n",
    )
    .unwrap();

    bgen()
        .current_dir(temp.path())
        .args(["new", "--name", "my-toggle", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("formatted incorrectly"));

    // The behavior file is still produced and the import is still added.
    assert!(temp.path().join("src_ts/behaviors/my-toggle.ts").exists());
    let registry =
        fs::read_to_string(temp.path().join("src_ts/build_element/behaviorTypes.ts")).unwrap();
    assert!(!registry.contains("'my-toggle': {"));
    assert!(registry.starts_with("import { MyToggleProps, MyToggleState, MyToggleOptions }"));
    assert!(registry.ends_with("// registry went missing\n"));
}

#[test]
fn new_without_registry_file_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".bgen.toml"), "").unwrap();

    bgen()
        .current_dir(temp.path())
        .args(["new", "--name", "my-toggle", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("behaviorTypes.ts"));
}

#[test]
fn new_persists_folder_overrides() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".bgen.toml"), "").unwrap();
    fs::create_dir_all(temp.path().join("lib/build_element")).unwrap();
    fs::write(
        temp.path().join("lib/build_element/behaviorTypes.ts"),
        "interface BehaviorTypes {\n}\n",
    )
    .unwrap();

    bgen()
        .current_dir(temp.path())
        .args([
            "new",
            "--name",
            "dial",
            "--yes",
            "-b",
            "lib/build_element",
            "-d",
            "lib/defaultTypes.d.ts",
            "--path",
            "lib/behaviors",
        ])
        .assert()
        .success();

    assert!(temp.path().join("lib/behaviors/dial.ts").exists());

    // The overrides were written back to the local config store.
    let saved = fs::read_to_string(temp.path().join(".bgen.toml")).unwrap();
    assert!(saved.contains("lib/build_element"));
    assert!(saved.contains("lib/behaviors"));
    assert!(saved.contains("lib/defaultTypes.d.ts"));

    // A second run picks the stored folders up without flags.
    fs::write(
        temp.path().join("lib/build_element/behaviorTypes.ts"),
        "interface BehaviorTypes {\n}\n",
    )
    .unwrap();
    bgen()
        .current_dir(temp.path())
        .args(["new", "--name", "knob", "--yes"])
        .assert()
        .success();
    assert!(temp.path().join("lib/behaviors/knob.ts").exists());
}

#[test]
fn quiet_run_prints_nothing_on_stdout() {
    let temp = project();

    bgen()
        .current_dir(temp.path())
        .args(["--quiet", "new", "--name", "my-toggle", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
