//! Command-line invocation parsing and the one decision each run makes.
//!
//! `Invocation::parse` mirrors a conventional flag parser (`--track <key>`,
//! `--track=<key>`, boolean `--compact`/`--list`, `-h/--help`, unique
//! prefixes such as `--tr` for long options). Resolution
//! against the catalog yields an `Outcome`, and `Outcome::render` produces the
//! exact stdout text. Every outcome is terminal and none of them is an error.

use crate::catalog::{Track, TrackCatalog};
use crate::render::{format_checklist, list_tracks};
use anyhow::{Context, Result, bail};
use std::ffi::OsString;
use tracing::debug;

pub const PROGRAM_NAME: &str = "web3-privacy-roadmap";
pub const BANNER: &str = "web3_privacy_roadmap - design checklist generator";
pub const UNKNOWN_TRACK: &str = "Unknown track key.";

/// Parsed command line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Invocation {
    pub track: Option<String>,
    pub compact: bool,
    pub list: bool,
}

/// What the command line asked for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Run(Invocation),
    Help,
}

/// Long options; any unique prefix of one of these selects it.
const LONG_OPTIONS: [&str; 4] = ["--help", "--track", "--compact", "--list"];

/// Resolve `name` against `options`, exactly or by unique prefix.
///
/// `Ok(None)` means nothing matched.
fn match_long_option(name: &str, options: &[&'static str]) -> Result<Option<&'static str>> {
    if let Some(exact) = options.iter().find(|option| **option == name) {
        return Ok(Some(*exact));
    }
    if name.len() <= 2 {
        return Ok(None);
    }
    let candidates: Vec<&'static str> = options
        .iter()
        .copied()
        .filter(|option| option.starts_with(name))
        .collect();
    match candidates.as_slice() {
        [] => Ok(None),
        [single] => Ok(Some(*single)),
        many => bail!(
            "ambiguous option: {name} could match {}",
            many.join(", ")
        ),
    }
}

fn utf8_argument(raw: OsString, what: &str) -> Result<String> {
    raw.into_string()
        .map_err(|raw| anyhow::anyhow!("{what} is not valid UTF-8: {:?}", raw))
}

impl Invocation {
    /// Parse arguments, excluding the program name.
    ///
    /// Later `--track` values replace earlier ones. Help wins over
    /// unrecognized arguments anywhere on the line; those are only reported
    /// once the whole line has been read.
    pub fn parse<I>(args: I) -> Result<Command>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut invocation = Invocation::default();
        let mut unrecognized: Vec<String> = Vec::new();
        let mut args = args.into_iter();
        while let Some(raw) = args.next() {
            let arg = utf8_argument(raw, "argument")?;
            if arg == "-h" {
                return Ok(Command::Help);
            }
            if !arg.starts_with("--") || arg == "--" {
                unrecognized.push(arg);
                continue;
            }

            let (name, inline_value) = match arg.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (arg.as_str(), None),
            };
            let Some(option) = match_long_option(name, &LONG_OPTIONS)? else {
                unrecognized.push(arg.clone());
                continue;
            };

            match (option, inline_value) {
                ("--help", None) => return Ok(Command::Help),
                ("--compact", None) => invocation.compact = true,
                ("--list", None) => invocation.list = true,
                ("--track", Some(value)) => invocation.track = Some(value.to_string()),
                ("--track", None) => {
                    let value = args
                        .next()
                        .context("argument --track: expected one argument")?;
                    let value = utf8_argument(value, "argument --track")?;
                    if value.starts_with('-') && value != "-" {
                        bail!("argument --track: expected one argument");
                    }
                    invocation.track = Some(value);
                }
                (flag, Some(value)) => {
                    bail!("argument {flag}: ignored explicit argument '{value}'")
                }
                (other, None) => bail!("unhandled option {other}"),
            }
        }

        if !unrecognized.is_empty() {
            bail!("unrecognized arguments: {}", unrecognized.join(" "));
        }
        Ok(Command::Run(invocation))
    }

    /// Decide which output this invocation produces.
    pub fn resolve<'a>(&self, catalog: &'a TrackCatalog) -> Outcome<'a> {
        if self.list {
            debug!("listing tracks");
            return Outcome::Listing(catalog);
        }

        let requested = match self.track.as_deref() {
            Some(track) if !track.is_empty() => track,
            _ => {
                debug!("no track requested; showing overview");
                return Outcome::Overview(catalog);
            }
        };

        match catalog.lookup(requested) {
            Some(track) => {
                debug!(key = %track.key(), compact = self.compact, "rendering checklist");
                Outcome::Checklist {
                    track,
                    compact: self.compact,
                }
            }
            None => {
                debug!(requested, "unknown track key");
                Outcome::UnknownTrack(catalog)
            }
        }
    }
}

/// Terminal result of one invocation.
#[derive(Clone, Copy, Debug)]
pub enum Outcome<'a> {
    Listing(&'a TrackCatalog),
    Overview(&'a TrackCatalog),
    UnknownTrack(&'a TrackCatalog),
    Checklist { track: &'a Track, compact: bool },
}

impl Outcome<'_> {
    /// Full stdout text for this outcome, newline-terminated.
    pub fn render(&self) -> String {
        match self {
            Outcome::Listing(catalog) => format!("{}\n", list_tracks(catalog)),
            Outcome::Overview(catalog) => format!(
                "{BANNER}\n\n{}\nExamples:\n  {PROGRAM_NAME} --track aztec\n  {PROGRAM_NAME} --track zama --compact\n",
                list_tracks(catalog)
            ),
            Outcome::UnknownTrack(catalog) => {
                format!("{UNKNOWN_TRACK}\n\n{}\n", list_tracks(catalog))
            }
            Outcome::Checklist { track, compact } => format_checklist(track, *compact),
        }
    }
}

pub fn usage() -> String {
    format!(
        "Usage: {PROGRAM_NAME} [-h] [--track TRACK] [--compact] [--list]\n\n\
         Generate a design checklist for different Web3 privacy and soundness tracks\n\
         inspired by ecosystems like Aztec, Zama, and research labs focused on protocol soundness.\n\n\
         Options:\n  \
         -h, --help       Show this help message and exit.\n  \
         --track TRACK    Which track to print (aztec, zama, soundness).\n  \
         --compact        Print checklist in a compact one-line-per-item format.\n  \
         --list           List all available tracks.\n"
    )
}
