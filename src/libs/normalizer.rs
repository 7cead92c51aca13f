//! Turns a noisy list of punches into a canonical, time-ordered one.
//!
//! The attendance feed frequently records the same physical punch more than
//! once, a few seconds apart. Normalization sorts the admitted punches by
//! time (stable, so equal timestamps keep their arrival order) and keeps only
//! the first punch of each `(status, bucket)` pair, where the bucket is the
//! timestamp truncated to [`DEDUP_BUCKET_SECONDS`].
//!
//! The output is non-decreasing in time and free of duplicate
//! `(status, bucket)` keys. Normalizing already-normalized entries returns
//! them unchanged.

use crate::libs::punch::{NormalizedEntry, PunchEvent, PunchStatus, RawPunch};
use std::collections::HashSet;

/// Width of the dedup bucket: punches of the same kind within the same
/// wall-clock minute collapse into one.
pub const DEDUP_BUCKET_SECONDS: i64 = 60;

/// Admits raw punches and normalizes them at minute granularity.
///
/// Punches with unmodeled status codes or unreadable timestamps are dropped.
pub fn normalize(raw: &[RawPunch]) -> Vec<NormalizedEntry> {
    let admitted: Vec<PunchEvent> = raw.iter().filter_map(PunchEvent::from_raw).collect();
    let dropped = raw.len() - admitted.len();
    if dropped > 0 {
        tracing::debug!(dropped, "skipped unmodeled or unreadable punches");
    }
    normalize_events(admitted)
}

/// Normalizes already-admitted punch events at minute granularity.
pub fn normalize_events(events: Vec<PunchEvent>) -> Vec<NormalizedEntry> {
    normalize_events_with_bucket(events, DEDUP_BUCKET_SECONDS)
}

/// Normalizes punch events with an explicit dedup bucket width in seconds.
///
/// A width of zero or less dedups on the exact second.
pub fn normalize_events_with_bucket(mut events: Vec<PunchEvent>, bucket_seconds: i64) -> Vec<NormalizedEntry> {
    let bucket_seconds = bucket_seconds.max(1);

    // `sort_by_key` is stable: ties keep arrival order, so the first-seen
    // duplicate is the one that survives.
    events.sort_by_key(|event| event.timestamp);

    let mut seen: HashSet<(PunchStatus, i64)> = HashSet::with_capacity(events.len());
    let before = events.len();
    events.retain(|event| seen.insert(dedup_key(event, bucket_seconds)));

    if events.len() < before {
        tracing::debug!(collapsed = before - events.len(), "collapsed duplicate punches");
    }
    events
}

fn dedup_key(event: &PunchEvent, bucket_seconds: i64) -> (PunchStatus, i64) {
    (event.status, event.timestamp.timestamp().div_euclid(bucket_seconds))
}
