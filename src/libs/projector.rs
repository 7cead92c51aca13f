//! Worked-time projection over normalized punches.
//!
//! The projector walks the entries left to right with a two-state machine:
//!
//! ```text
//!            IN (record start)            IN (overwrite start)
//!   CLOSED ─────────────────────▶ OPEN ◀──────────────────────┐
//!     ▲  │                         │  └───────────────────────┘
//!     │  └─ OUT: no-op             │
//!     └──── OUT: emit interval ────┘
//! ```
//!
//! Each OUT that closes an open session adds `out - in` to the worked total.
//! An OUT with nothing open contributes nothing. When the scan ends in
//! `OPEN`, the session is extended up to `now` only if it started on the same
//! local calendar day as `now`; a session left open since an earlier day adds
//! nothing and produces no projection.
//!
//! The projected completion time is `now + remaining` and exists only for a
//! same-day open session with time still left to work.
//!
//! `now` and the daily target are always supplied by the caller, which keeps
//! the computation deterministic.

use crate::libs::punch::{NormalizedEntry, PunchStatus};
use chrono::{DateTime, Duration, Local};

/// Default length of a full workday.
pub const DEFAULT_DAILY_TARGET_MINUTES: i64 = 8 * 60;

pub fn default_daily_target() -> Duration {
    Duration::minutes(DEFAULT_DAILY_TARGET_MINUTES)
}

/// Scan cursor over the punch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Closed,
    Open(DateTime<Local>),
}

impl ScanState {
    /// Applies one punch and returns the worked interval it closes, if any.
    pub fn step(&mut self, entry: &NormalizedEntry) -> Option<(DateTime<Local>, DateTime<Local>)> {
        match (entry.status, *self) {
            (PunchStatus::In, _) => {
                *self = ScanState::Open(entry.timestamp);
                None
            }
            (PunchStatus::Out, ScanState::Open(start)) => {
                *self = ScanState::Closed;
                Some((start, entry.timestamp))
            }
            (PunchStatus::Out, ScanState::Closed) => None,
        }
    }
}

/// One stretch of presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkSession {
    pub start: DateTime<Local>,
    /// `None` while the session is still running.
    pub end: Option<DateTime<Local>>,
    pub duration: Duration,
}

impl WorkSession {
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

/// Everything the projector derives from a day of punches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub total_worked: Duration,
    pub remaining: Duration,
    pub sessions: Vec<WorkSession>,
    /// Start of the same-day session that is still open.
    pub open_since: Option<DateTime<Local>>,
    pub last_in_time: Option<DateTime<Local>>,
    pub last_out_time: Option<DateTime<Local>>,
    pub expected_completion: Option<DateTime<Local>>,
}

impl Projection {
    pub fn is_clocked_in(&self) -> bool {
        self.open_since.is_some()
    }
}

/// Derives worked time and the projected completion from normalized entries.
pub fn project(entries: &[NormalizedEntry], now: DateTime<Local>, daily_target: Duration) -> Projection {
    let mut state = ScanState::Closed;
    let mut sessions = Vec::new();
    let mut total_worked = Duration::zero();

    for entry in entries {
        if let Some((start, end)) = state.step(entry) {
            let duration = end - start;
            total_worked = total_worked + duration;
            sessions.push(WorkSession {
                start,
                end: Some(end),
                duration,
            });
        }
    }

    let open_since = match state {
        ScanState::Open(start) if start.date_naive() == now.date_naive() => Some(start),
        ScanState::Open(start) => {
            tracing::debug!(%start, "ignoring session left open on an earlier day");
            None
        }
        ScanState::Closed => None,
    };

    if let Some(start) = open_since {
        // A start ahead of `now` (clock skew) counts as open but adds nothing.
        let running = (now - start).max(Duration::zero());
        total_worked = total_worked + running;
        sessions.push(WorkSession {
            start,
            end: None,
            duration: running,
        });
    }

    let remaining = (daily_target - total_worked).max(Duration::zero());
    let expected_completion = match open_since {
        // No projection past the representable date range.
        Some(_) if remaining > Duration::zero() => now.checked_add_signed(remaining),
        _ => None,
    };

    let last_of = |status: PunchStatus| entries.iter().filter(|e| e.status == status).map(|e| e.timestamp).max();

    Projection {
        total_worked,
        remaining,
        sessions,
        open_since,
        last_in_time: last_of(PunchStatus::In),
        last_out_time: last_of(PunchStatus::Out),
        expected_completion,
    }
}
