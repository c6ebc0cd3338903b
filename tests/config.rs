use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

fn command() -> Command {
    Command::cargo_bin("vsclean").expect("binary exists")
}

#[test]
fn config_add_exclude_protects_folders_from_clean() {
    let temp = assert_fs::TempDir::new().unwrap();
    let home = temp.child("home");
    home.create_dir_all().unwrap();
    let config_root = temp.child("xdg-config");
    config_root.create_dir_all().unwrap();

    let kept = home.child("repos/vendor/Lib/bin");
    kept.create_dir_all().unwrap();
    kept.child("Lib.dll").write_str("binary").unwrap();
    let removed = home.child("repos/App/obj");
    removed.create_dir_all().unwrap();
    removed.child("cache").write_str("cache").unwrap();

    // Add exclude entry
    let mut config_cmd = command();
    config_cmd
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("config")
        .arg("--add-exclude")
        .arg("~/repos/vendor/**");
    config_cmd.assert().success().stdout(predicate::str::contains("Added exclude pattern"));

    let config_path = config_root.child("vsclean/config.toml");
    let contents = fs::read_to_string(config_path.path()).unwrap();
    assert!(contents.contains("repos/vendor/**"));

    // Clean should now leave the vendored folder alone
    let mut clean_cmd = command();
    clean_cmd
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("clean")
        .arg("-y")
        .arg(home.child("repos").path());

    clean_cmd
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: ~/repos/App/obj"))
        .stdout(predicate::str::contains("vendor").not())
        .stdout(predicate::str::contains("Total space freed: 5.00 B"));

    kept.child("Lib.dll").assert(predicate::path::exists());
    removed.assert(predicate::path::missing());

    // Path option prints location
    let mut path_cmd = command();
    path_cmd
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("config")
        .arg("--path");
    path_cmd.assert().success().stdout(predicate::str::contains("vsclean/config.toml"));
}

#[test]
fn broken_config_is_reported() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_root = temp.child("xdg-config");
    config_root.child("vsclean/config.toml").write_str("exclude = [").unwrap();
    temp.child("proj/bin/a").write_str("a").unwrap();

    command()
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("clean")
        .arg("-y")
        .arg(temp.child("proj").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));

    temp.child("proj/bin/a").assert(predicate::path::exists());
}

#[test]
fn config_lists_and_removes_excludes() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_root = temp.child("xdg-config");

    command()
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("No exclude patterns."));

    command()
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("config")
        .arg("--add-exclude")
        .arg("/srv/keep/**")
        .assert()
        .success();

    command()
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exclude patterns:"))
        .stdout(predicate::str::contains("/srv/keep/**"));

    command()
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("config")
        .arg("--remove-exclude")
        .arg("/srv/keep/**")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed exclude pattern"));

    let contents = fs::read_to_string(config_root.child("vsclean/config.toml").path()).unwrap();
    assert!(!contents.contains("/srv/keep/**"));
}

#[test]
fn config_rejects_invalid_glob() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_root = temp.child("xdg-config");

    command()
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("config")
        .arg("--add-exclude")
        .arg("/srv/[")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid exclude pattern"));

    config_root.child("vsclean/config.toml").assert(predicate::path::missing());
}
