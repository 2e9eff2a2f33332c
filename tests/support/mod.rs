use assert_cmd::Command;

pub const BIN: &str = "web3-privacy-roadmap";

/// Command for the built binary with logging pinned to its default.
pub fn roadmap() -> Command {
    let mut cmd = Command::cargo_bin(BIN).expect("binary built by cargo");
    cmd.env_remove("ROADMAP_LOG").env_remove("ROADMAP_LOG_FORMAT");
    cmd
}

/// Run with `args`, require exit 0, and return stdout.
pub fn stdout_of(args: &[&str]) -> String {
    let output = roadmap().args(args).assert().success().get_output().clone();
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}
