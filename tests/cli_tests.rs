//! Integration tests for the configkeys command line

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Command isolated from the real home directory and user config
fn configkeys(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("configkeys").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env("SHELL", "/bin/zsh");
    cmd
}

#[test]
fn test_no_command_prints_help() {
    let dir = tempdir().unwrap();

    configkeys(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("remove"));
}

#[test]
fn test_set_creates_profile() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".zshrc");

    configkeys(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "set", "GEMINI_API_KEY", "mykey123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added GEMINI_API_KEY"))
        .stdout(predicate::str::contains("source "));

    let content = fs::read_to_string(&rc_file).unwrap();
    assert_eq!(
        content,
        "\n# Added by ConfigureMacKeys\nexport GEMINI_API_KEY=mykey123\n"
    );
    // Nothing existed before, so nothing to back up
    assert!(!dir.path().join(".zshrc.backup").exists());
}

#[test]
fn test_set_twice_keeps_single_declaration() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".zshrc");
    fs::write(&rc_file, "alias ll='ls -la'\n").unwrap();

    configkeys(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "set", "TOKEN", "v1"])
        .assert()
        .success();
    configkeys(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "set", "TOKEN", "v2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated TOKEN"))
        .stdout(predicate::str::contains("Backup created"));

    let content = fs::read_to_string(&rc_file).unwrap();
    assert_eq!(
        content,
        "alias ll='ls -la'\n\n# Added by ConfigureMacKeys\nexport TOKEN=v2\n"
    );

    let backup = fs::read_to_string(dir.path().join(".zshrc.backup")).unwrap();
    assert!(backup.contains("export TOKEN=v1\n"));
}

#[test]
fn test_set_updates_scenario() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".zshrc");
    fs::write(&rc_file, "export FOO=1\nexport BAR=2\n").unwrap();

    configkeys(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "set", "FOO", "9"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&rc_file).unwrap(),
        "export BAR=2\n\n# Added by ConfigureMacKeys\nexport FOO=9\n"
    );
}

#[test]
fn test_set_empty_name_is_rejected() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".zshrc");

    configkeys(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "set", "", "value"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Variable name cannot be empty"));

    assert!(!rc_file.exists());
}

#[test]
fn test_set_temp_does_not_touch_file() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".zshrc");

    configkeys(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "set", "DEBUG", "1", "--temp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export DEBUG=1"))
        .stdout(predicate::str::contains("configkeys set DEBUG 1"))
        .stdout(predicate::str::contains("eval").not());

    assert!(!rc_file.exists());
}

#[test]
fn test_set_name_with_braces_keeps_path_in_message() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".zshrc");
    let rc_str = rc_file.to_str().unwrap();

    configkeys(dir.path())
        .args(["-f", rc_str, "set", "X{}", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Added X{{}} to {}", rc_str)));

    configkeys(dir.path())
        .args(["-f", rc_str, "remove", "X{}"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Removed X{{}} from {}", rc_str)));
}

#[test]
fn test_remove_existing_variable() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".zshrc");
    fs::write(&rc_file, "export OLD_VAR=1\nalias g=git\n").unwrap();

    configkeys(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "remove", "OLD_VAR"])
        .env("OLD_VAR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed OLD_VAR"))
        .stdout(predicate::str::contains("Removed OLD_VAR from current session"));

    assert_eq!(fs::read_to_string(&rc_file).unwrap(), "alias g=git\n");
    assert_eq!(
        fs::read_to_string(dir.path().join(".zshrc.backup")).unwrap(),
        "export OLD_VAR=1\nalias g=git\n"
    );
}

#[test]
fn test_remove_missing_variable() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".zshrc");
    let original = "export KEEP=1\n";
    fs::write(&rc_file, original).unwrap();

    configkeys(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "rm", "MISSING"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Variable 'MISSING' not found"));

    assert_eq!(fs::read_to_string(&rc_file).unwrap(), original);
}

#[test]
fn test_remove_without_profile() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".zshrc");

    configkeys(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "remove", "ANY"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No configuration file found"));

    assert!(!rc_file.exists());
    assert!(!dir.path().join(".zshrc.backup").exists());
}

#[test]
fn test_list_filter_sorted() {
    let dir = tempdir().unwrap();

    let output = configkeys(dir.path())
        .args(["list", "configkeys_it"])
        .env("CONFIGKEYS_IT_ZETA", "z")
        .env("configkeys_it_alpha", "a")
        .env("CONFIGKEYS_IT_MID", "m")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 environment variable(s):"))
        .stdout(predicate::str::contains("HOME=").not())
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let mid = stdout.find("CONFIGKEYS_IT_MID=m").unwrap();
    let zeta = stdout.find("CONFIGKEYS_IT_ZETA=z").unwrap();
    let alpha = stdout.find("configkeys_it_alpha=a").unwrap();
    assert!(mid < zeta);
    assert!(zeta < alpha);
}

#[test]
fn test_list_no_match() {
    let dir = tempdir().unwrap();

    configkeys(dir.path())
        .args(["list", "NO_SUCH_VARIABLE_ANYWHERE"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No environment variables found matching 'NO_SUCH_VARIABLE_ANYWHERE'",
        ));
}

#[test]
fn test_list_truncates_long_values() {
    let dir = tempdir().unwrap();
    let long = "x".repeat(150);

    configkeys(dir.path())
        .args(["list", "CONFIGKEYS_LONG"])
        .env("CONFIGKEYS_LONG", &long)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "CONFIGKEYS_LONG={}...",
            "x".repeat(97)
        )))
        .stdout(predicate::str::contains("x".repeat(98)).not());
}

#[test]
fn test_info_reports_profile() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".zshrc");
    fs::write(&rc_file, "export EDITOR=nvim\nexport PAGER=less\n").unwrap();

    configkeys(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains(rc_file.to_str().unwrap()))
        .stdout(predicate::str::contains("Yes"))
        .stdout(predicate::str::contains("37 bytes"))
        .stdout(predicate::str::contains("UTC"))
        .stdout(predicate::str::contains("EDITOR, PAGER"));
}

#[test]
fn test_info_missing_profile() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".zshrc");

    configkeys(dir.path())
        .args(["-f", rc_file.to_str().unwrap(), "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No"))
        .stdout(predicate::str::contains("bytes").not());
}

#[test]
fn test_default_profile_follows_shell() {
    let dir = tempdir().unwrap();

    configkeys(dir.path())
        .args(["set", "A", "1"])
        .env("SHELL", "/bin/bash")
        .assert()
        .success();

    assert!(dir.path().join(".bashrc").exists());
    assert!(!dir.path().join(".zshrc").exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_profile_path_from_config() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join(".config").join("configkeys");
    fs::create_dir_all(&config_dir).unwrap();
    let target = dir.path().join("custom_profile");
    fs::write(
        config_dir.join("config.toml"),
        format!("[profile]\npath = \"{}\"\n", target.display()),
    )
    .unwrap();

    configkeys(dir.path())
        .args(["set", "FROM_CONFIG", "yes"])
        .assert()
        .success();

    assert!(fs::read_to_string(&target)
        .unwrap()
        .ends_with("export FROM_CONFIG=yes\n"));
}
