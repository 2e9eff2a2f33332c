//! Track catalog wiring.
//!
//! The catalog is compiled into the binary and built once per invocation.
//! Callers use `TrackCatalog` for ordered iteration and case-insensitive
//! lookup; the record types live in `model`.

mod builtin;
pub mod identity;
pub mod index;
pub mod model;

pub use identity::{Priority, TrackKey};
pub use index::TrackCatalog;
pub use model::{ChecklistItem, Track};
