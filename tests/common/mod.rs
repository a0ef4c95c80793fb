#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// `seekernotes` with its config rooted at `config_root`
pub fn seekernotes_cmd(config_root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("seekernotes").unwrap();
    cmd.arg("--config-dir").arg(config_root);
    cmd
}

/// Point the config at `notes_dir`
pub fn set_dir(config_root: &Path, notes_dir: &Path) {
    seekernotes_cmd(config_root)
        .arg("set-dir")
        .arg(notes_dir)
        .assert()
        .success();
}
