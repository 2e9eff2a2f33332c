//! Plain-text rendering for tracks and the track listing.
//!
//! Renderers write into any `fmt::Write` so the binary and tests share one
//! code path; the `format_*`/`list_*` wrappers collect into a `String`.

use crate::catalog::{ChecklistItem, Track, TrackCatalog};
use std::fmt;

pub const LISTING_PREAMBLE: &str = "Available tracks related to Web3 privacy and soundness:";
pub const LISTING_HINT: &str =
    "Use --track with one of the keys above to print a detailed checklist.";

/// Render a track checklist, one line per item when `compact` is set.
///
/// The result always ends with exactly one newline.
pub fn format_checklist(track: &Track, compact: bool) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail.
    let _ = write_checklist(track, compact, &mut output);
    let trimmed = output.trim_end().len();
    output.truncate(trimmed);
    output.push('\n');
    output
}

pub fn write_checklist(track: &Track, compact: bool, writer: &mut impl fmt::Write) -> fmt::Result {
    writeln!(writer, "Track: {}", track.name())?;
    writeln!(writer)?;
    writeln!(writer, "Summary:")?;
    writeln!(writer, "  {}", track.summary())?;
    writeln!(writer)?;
    writeln!(writer, "Checklist:")?;
    for (idx, item) in track.items().iter().enumerate() {
        if compact {
            write_compact_item(idx + 1, item, writer)?;
        } else {
            write_verbose_item(idx + 1, item, writer)?;
        }
    }
    Ok(())
}

fn write_compact_item(idx: usize, item: &ChecklistItem, writer: &mut impl fmt::Write) -> fmt::Result {
    writeln!(
        writer,
        "{}. [{}] {} - {}",
        idx,
        item.priority(),
        item.category(),
        item.description()
    )
}

fn write_verbose_item(idx: usize, item: &ChecklistItem, writer: &mut impl fmt::Write) -> fmt::Result {
    writeln!(writer, "{}. Category: {}", idx, item.category())?;
    writeln!(writer, "   Priority: {}", item.priority())?;
    writeln!(writer, "   Task: {}", item.description())?;
    writeln!(writer)
}

/// Render the track listing: preamble, one `- <key>: <name>` line per track
/// in catalog order, then a usage hint. No trailing newline.
pub fn list_tracks(catalog: &TrackCatalog) -> String {
    let mut lines = Vec::with_capacity(catalog.len() + 3);
    lines.push(LISTING_PREAMBLE.to_string());
    for track in catalog.tracks() {
        lines.push(format!("- {}: {}", track.key(), track.name()));
    }
    lines.push(String::new());
    lines.push(LISTING_HINT.to_string());
    lines.join("\n")
}
