//! Shared library for the web3-privacy-roadmap checklist printer.
//!
//! The crate exposes the built-in track catalog, the plain-text renderers and
//! the invocation dispatch used by the `web3-privacy-roadmap` binary. All of
//! it is pure: the catalog is rebuilt per run and rendering returns strings.

pub mod catalog;
pub mod dispatch;
pub mod logging;
pub mod render;

pub use catalog::{ChecklistItem, Priority, Track, TrackCatalog, TrackKey};
pub use dispatch::{Command, Invocation, Outcome, usage};
pub use render::{format_checklist, list_tracks, write_checklist};
