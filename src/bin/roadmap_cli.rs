//! Prints a design checklist for one Web3 privacy or soundness track.
//!
//! `--list` shows the catalog, `--track <key>` renders a checklist
//! (`--compact` for one line per item), and no flags prints an overview.
//! Unknown keys are reported on stdout and still exit 0.

use anyhow::Result;
use privacy_roadmap::logging::init_logging;
use privacy_roadmap::{Command, Invocation, TrackCatalog, usage};
use std::env;
use std::io::{self, Write};

fn main() {
    init_logging();
    let command = match Invocation::parse(env::args_os().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{err:#}\n");
            eprint!("{}", usage());
            std::process::exit(2);
        }
    };
    if let Err(err) = run(command) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let output = match command {
        Command::Help => usage(),
        Command::Run(invocation) => {
            let catalog = TrackCatalog::builtin();
            invocation.resolve(&catalog).render()
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
