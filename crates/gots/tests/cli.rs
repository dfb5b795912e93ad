//! Integration tests for the gots binary.

use assert_cmd::Command;
use tempfile::TempDir;

/// A command isolated from the user's global config.
fn gots(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gots").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env_remove("RUST_LOG");
    cmd
}

const UNTAGGED: &str = "type Person struct {\n\tFirstName string\n}\n";

#[test]
fn converts_stdin() {
    let dir = TempDir::new().unwrap();
    gots(&dir)
        .arg("convert")
        .write_stdin("interface Settings {\n  enabled: boolean;\n}\n")
        .assert()
        .success()
        .stdout("type Settings struct {\n\tEnabled bool `json:\"enabled\"`\n}\n");
}

#[test]
fn converts_file_to_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("user.go");
    let output = dir.path().join("user.ts");
    std::fs::write(
        &input,
        "type User struct {\n\tName string `json:\"name\"`\n\tAge int `json:\"age\"`\n}\n",
    )
    .unwrap();

    gots(&dir)
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "interface User {\n  name: string;\n  age: number;\n}\n"
    );
}

#[test]
fn untagged_struct_gets_tags() {
    let dir = TempDir::new().unwrap();
    gots(&dir)
        .args(["convert", "-"])
        .write_stdin(UNTAGGED)
        .assert()
        .success()
        .stdout("type Person struct {\n\tFirstName string `json:\"first_name\"`\n}\n");
}

#[test]
fn no_tag_check_flag_converts() {
    let dir = TempDir::new().unwrap();
    gots(&dir)
        .args(["convert", "--no-tag-check"])
        .write_stdin(UNTAGGED)
        .assert()
        .success()
        .stdout("interface Person {\n  firstName: string;\n}\n");
}

#[test]
fn project_config_disables_tag_check() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".gots")).unwrap();
    std::fs::write(
        dir.path().join(".gots").join("config.toml"),
        "enable_json_tag_check = false\n",
    )
    .unwrap();

    gots(&dir)
        .arg("convert")
        .write_stdin(UNTAGGED)
        .assert()
        .success()
        .stdout("interface Person {\n  firstName: string;\n}\n");
}

#[test]
fn explicit_config_extends_type_tables() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("gots.toml");
    std::fs::write(&config, "[types.go_to_ts]\n\"uuid.UUID\" = \"string\"\n").unwrap();

    gots(&dir)
        .arg("--config")
        .arg(&config)
        .arg("convert")
        .write_stdin("type Row struct {\n\tID uuid.UUID `json:\"id\"`\n}")
        .assert()
        .success()
        .stdout("interface Row {\n  id: string;\n}\n");
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    gots(&dir)
        .args(["--config", "nope.toml", "convert"])
        .write_stdin(UNTAGGED)
        .assert()
        .failure();
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let out = gots(&dir)
        .args(["convert", "--json"])
        .write_stdin(UNTAGGED)
        .output()
        .unwrap();
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["kind"], "tags-added");
    assert_eq!(
        value["output"],
        "type Person struct {\n\tFirstName string `json:\"first_name\"`\n}"
    );
}

#[test]
fn empty_input_warns() {
    let dir = TempDir::new().unwrap();
    let out = gots(&dir)
        .arg("convert")
        .write_stdin("  \n")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("warning: Select a Go struct or TS interface."));
}

#[test]
fn unrecognized_input_errors() {
    let dir = TempDir::new().unwrap();
    let out = gots(&dir)
        .arg("convert")
        .write_stdin("random text")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error: Not a Go struct or TS interface."));
}

#[test]
fn tags_command_ignores_the_gate() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".gots")).unwrap();
    std::fs::write(
        dir.path().join(".gots").join("config.toml"),
        "enable_json_tag_check = false\n",
    )
    .unwrap();

    gots(&dir)
        .arg("tags")
        .write_stdin("type Config struct {\n\tPublicKey string // pk\n\tprivateKey string\n}")
        .assert()
        .success()
        .stdout("type Config struct {\n\tPublicKey string `json:\"public_key\"`  // pk\n\tprivateKey string\n}\n");
}

#[test]
fn tags_command_rejects_typescript() {
    let dir = TempDir::new().unwrap();
    gots(&dir)
        .arg("tags")
        .write_stdin("interface A {\n  x: number;\n}")
        .assert()
        .failure();
}
