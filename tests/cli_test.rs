use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn scrawl(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("scrawl").unwrap();
    // Keep config discovery away from the real user directories
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn seed(data: &Path) {
    fs::create_dir_all(data).unwrap();
    fs::write(data.join("note-one"), "First line\nsecond line").unwrap();
    fs::write(data.join("link-abc"), "https://example.com").unwrap();
    fs::write(data.join("file-1a2b3c4dreport.txt"), "report body").unwrap();
    fs::write(data.join("temporary-print"), "scratch").unwrap();
}

#[test]
fn test_count_excludes_scratch_slot() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("data");
    seed(&data);

    scrawl(temp_dir.path())
        .arg("--data-dir")
        .arg(&data)
        .arg("count")
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_list_shows_every_section() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("data");
    seed(&data);

    scrawl(temp_dir.path())
        .arg("--data-dir")
        .arg(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("note  note-one  First line"))
        .stdout(predicate::str::contains("second line").not())
        .stdout(predicate::str::contains("link  link-abc  https://example.com"))
        .stdout(predicate::str::contains("file  file-1a2b3c4dreport.txt  report.txt"))
        .stdout(predicate::str::contains("temporary-print").not());
}

#[test]
fn test_list_empty_directory() {
    let temp_dir = tempfile::tempdir().unwrap();

    scrawl(temp_dir.path())
        .arg("ls")
        .arg("--data-dir")
        .arg(temp_dir.path().join("missing"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No items."));
}

#[test]
fn test_view_prints_raw_contents() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("data");
    seed(&data);

    scrawl(temp_dir.path())
        .arg("--data-dir")
        .arg(&data)
        .arg("view")
        .arg("note-one")
        .assert()
        .success()
        .stdout("First line\nsecond line");
}

#[test]
fn test_delete_then_view_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("data");
    seed(&data);

    scrawl(temp_dir.path())
        .arg("--data-dir")
        .arg(&data)
        .arg("rm")
        .arg("link-abc")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted link-abc"));
    assert!(!data.join("link-abc").exists());

    scrawl(temp_dir.path())
        .arg("--data-dir")
        .arg(&data)
        .arg("view")
        .arg("link-abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item not found: link-abc"));
}

#[test]
fn test_unsafe_id_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("data");
    seed(&data);
    fs::write(temp_dir.path().join("outside"), "secret").unwrap();

    scrawl(temp_dir.path())
        .arg("--data-dir")
        .arg(&data)
        .arg("delete")
        .arg("../outside")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid item id"));
    assert!(temp_dir.path().join("outside").exists());
}

#[test]
fn test_local_config_file_is_discovered() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("elsewhere");
    seed(&data);
    fs::write(
        temp_dir.path().join("scrawl.json"),
        format!(r#"{{ "data_dir": {:?} }}"#, data.to_str().unwrap()),
    )
    .unwrap();

    scrawl(temp_dir.path())
        .arg("count")
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = temp_dir.path().join("bad.json");
    fs::write(&config, r#"{ "max_upload_bytes": 0 }"#).unwrap();

    scrawl(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .arg("count")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
