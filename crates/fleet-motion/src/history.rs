//! Bounded per-vehicle position trail.
//!
//! The trail is a sliding window over the most recent positions: appending
//! beyond capacity evicts the oldest entry.  Capacity is fixed at
//! construction; the scheduler takes it from `SimConfig::history_capacity`
//! (default 20).

use std::collections::VecDeque;

use fleet_core::{GeoPoint, Timestamp};

/// Default trail capacity, matching `SimConfig::default()`.
pub const DEFAULT_CAPACITY: usize = 20;

/// One recorded position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackPoint {
    pub point: GeoPoint,
    pub timestamp: Timestamp,
}

/// A bounded, chronologically ordered trail of recent positions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionHistory {
    entries: VecDeque<TrackPoint>,
    capacity: usize,
}

impl PositionHistory {
    /// An empty trail holding at most `capacity` entries.
    ///
    /// A zero capacity is coerced to 1 so `push` always retains the newest
    /// point.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild a trail from persisted entries, keeping only the newest
    /// `capacity` in their original order.
    pub fn from_entries(entries: Vec<TrackPoint>, capacity: usize) -> Self {
        let mut history = Self::with_capacity(capacity);
        let skip = entries.len().saturating_sub(history.capacity);
        for entry in entries.into_iter().skip(skip) {
            history.entries.push_back(entry);
        }
        history
    }

    /// Append the newest position, evicting the oldest beyond capacity.
    pub fn push(&mut self, entry: TrackPoint) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &TrackPoint> {
        self.entries.iter()
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&TrackPoint> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for PositionHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
