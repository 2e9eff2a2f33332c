// End-to-end checks of the binary: every dispatch path, exit codes, and the
// split between stdout text and stderr diagnostics.
mod support;

use predicates::prelude::*;
use privacy_roadmap::{TrackCatalog, format_checklist, list_tracks};
use support::{roadmap, stdout_of};

#[test]
fn list_flag_prints_listing() {
    let catalog = TrackCatalog::builtin();
    let stdout = stdout_of(&["--list"]);
    assert_eq!(stdout, format!("{}\n", list_tracks(&catalog)));

    let entries = stdout.lines().filter(|line| line.starts_with("- ")).count();
    assert_eq!(entries, catalog.len());
}

#[test]
fn list_flag_short_circuits_track() {
    assert_eq!(stdout_of(&["--track", "aztec", "--list"]), stdout_of(&["--list"]));
}

#[test]
fn no_flags_prints_overview() {
    let stdout = stdout_of(&[]);
    assert!(stdout.starts_with("web3_privacy_roadmap - design checklist generator\n\n"));
    assert!(stdout.contains("Available tracks related to Web3 privacy and soundness:"));
    assert!(stdout.contains("Examples:\n"));
    assert!(stdout.lines().any(|line| line.contains("--track")));
}

#[test]
fn every_track_renders_verbose_by_default() {
    let catalog = TrackCatalog::builtin();
    for track in catalog.tracks() {
        let stdout = stdout_of(&["--track", track.key().as_str()]);
        assert_eq!(stdout, format_checklist(track, false));
        assert_eq!(
            stdout.lines().next(),
            Some(format!("Track: {}", track.name()).as_str())
        );
    }
}

#[test]
fn compact_flag_renders_one_line_per_item() {
    let stdout = stdout_of(&["--track", "zama", "--compact"]);
    let items: Vec<&str> = stdout
        .lines()
        .filter(|line| line.contains(". ["))
        .collect();
    assert_eq!(items.len(), 6);
    assert_eq!(
        items[0],
        "1. [high] Data model - Define which fields must remain encrypted end-to-end."
    );
    assert_eq!(
        items[4],
        "5. [medium] Interoperability - Specify how FHE outputs interact with on-chain logic."
    );
}

#[test]
fn track_key_is_case_insensitive() {
    assert_eq!(
        stdout_of(&["--track", "AZTEC"]),
        stdout_of(&["--track", "aztec"])
    );
    assert_eq!(
        stdout_of(&["--track=Soundness", "--compact"]),
        stdout_of(&["--compact", "--track", "soundness"])
    );
}

#[test]
fn unknown_track_reports_and_exits_zero() {
    let catalog = TrackCatalog::builtin();
    roadmap()
        .args(["--track", "nope"])
        .assert()
        .success()
        .stdout(format!("Unknown track key.\n\n{}\n", list_tracks(&catalog)));
}

#[test]
fn help_goes_to_stdout() {
    roadmap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--track TRACK"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn bad_arguments_exit_with_usage() {
    roadmap()
        .arg("--bogus")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unrecognized arguments: --bogus"))
        .stderr(predicate::str::contains("Usage:"));

    roadmap()
        .arg("--track")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--track"));
}

#[test]
fn track_followed_by_flag_is_missing_its_value() {
    for flag in ["--list", "--compact"] {
        roadmap()
            .args(["--track", flag])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(
                "argument --track: expected one argument",
            ));
    }
}

#[test]
fn long_option_prefixes_are_accepted() {
    assert_eq!(
        stdout_of(&["--tr", "aztec", "--comp"]),
        stdout_of(&["--track", "aztec", "--compact"])
    );
    assert_eq!(stdout_of(&["--tr=zama"]), stdout_of(&["--track", "zama"]));
}

#[test]
fn help_anywhere_wins_over_bad_arguments() {
    roadmap()
        .args(["--bogus", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage:"))
        .stderr(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn non_utf8_arguments_exit_with_usage() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    roadmap()
        .arg(OsString::from_vec(vec![0xff]))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not valid UTF-8"));

    roadmap()
        .arg("--track")
        .arg(OsString::from_vec(vec![0xff]))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("argument --track is not valid UTF-8"));
}

#[test]
fn debug_logging_stays_off_stdout() {
    let quiet = stdout_of(&["--track", "aztec"]);
    roadmap()
        .args(["--track", "aztec"])
        .env("ROADMAP_LOG", "debug")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(quiet)
        .stderr(predicate::str::contains("rendering checklist"));
}

#[test]
fn json_log_format_emits_json_lines() {
    roadmap()
        .args(["--track", "nope"])
        .env("ROADMAP_LOG", "debug")
        .env("ROADMAP_LOG_FORMAT", "json")
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"unknown track key\""));
}
