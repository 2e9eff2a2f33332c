//! Indexed, read-only view of the track catalog.
//!
//! Tracks are kept in insertion order for listing, with a derived index keyed
//! by `TrackKey` for lookups. The index is built from each track's own key, so
//! a catalog entry and its track can never disagree about the key.

use crate::catalog::builtin::builtin_tracks;
use crate::catalog::identity::TrackKey;
use crate::catalog::model::Track;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Clone, Debug)]
/// Track catalog plus a derived index keyed by track key.
pub struct TrackCatalog {
    tracks: Vec<Track>,
    by_key: BTreeMap<TrackKey, usize>,
}

impl TrackCatalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        Self::from_tracks(builtin_tracks())
    }

    fn from_tracks(tracks: Vec<Track>) -> Self {
        let mut by_key = BTreeMap::new();
        for (position, track) in tracks.iter().enumerate() {
            let previous = by_key.insert(track.key().clone(), position);
            debug_assert!(previous.is_none(), "duplicate track key {}", track.key());
        }
        Self { tracks, by_key }
    }

    /// Resolve a track by key.
    pub fn get(&self, key: &TrackKey) -> Option<&Track> {
        self.by_key.get(key).map(|&position| &self.tracks[position])
    }

    /// Resolve raw user input, ignoring case.
    pub fn lookup(&self, input: &str) -> Option<&Track> {
        let key = TrackKey::normalized(input);
        let found = self.get(&key);
        debug!(input, key = %key, found = found.is_some(), "track lookup");
        found
    }

    /// Tracks in catalog order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn keys(&self) -> impl Iterator<Item = &TrackKey> {
        self.tracks.iter().map(Track::key)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
