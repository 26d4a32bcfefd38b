use assert_cmd::Command;

pub fn dateconv_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dateconv").unwrap();
    cmd.env_remove("DATECONV_LOG");
    cmd
}
