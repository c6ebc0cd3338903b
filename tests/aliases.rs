use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn command() -> Command {
    Command::cargo_bin("vsclean").expect("binary exists")
}

#[test]
fn alias_cl_works_like_clean() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("project/bin");
    output.create_dir_all().unwrap();
    output.child("app.exe").write_str("MZ").unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("cl")
        .arg("-y")
        .arg(temp.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Deleted: ~/project/bin (2.00 B)"));

    output.assert(predicate::path::missing());
}

#[test]
fn alias_cfg_works_like_config() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("cfg")
        .arg("--path");

    cmd.assert().success().stdout(predicate::str::contains("config.toml"));
}
