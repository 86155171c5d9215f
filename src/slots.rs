//! Overlap search over the 24 UTC hour candidates of a reference day.

use std::fmt;

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("at least one timezone is required")]
    NoZones,
    #[error("invalid acceptance window {start}-{end} (need start <= end <= 23)")]
    InvalidWindow { start: u32, end: u32 },
}

/// Inclusive range of local hours considered acceptable for a meeting.
///
/// Both endpoints count: with the default 9-20 window a local time of
/// 09:00 or 20:00 is acceptable, 21:00 is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptanceWindow {
    start: u32,
    end: u32,
}

impl AcceptanceWindow {
    pub fn new(start: u32, end: u32) -> Result<Self, SlotError> {
        if start > end || end > 23 {
            return Err(SlotError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start && hour <= self.end
    }
}

impl Default for AcceptanceWindow {
    /// Working hours of 09:00 through 20:00 local time.
    fn default() -> Self {
        Self { start: 9, end: 20 }
    }
}

/// An accepted candidate: a UTC instant plus its rendering in every
/// requested zone, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingSlot {
    utc: DateTime<Utc>,
    zone_times: Vec<String>,
}

impl MeetingSlot {
    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    /// Display strings of the form `"hh:mm AM/PM (Zone)"`, one per zone,
    /// matching the order the zones were supplied in.
    pub fn zone_times(&self) -> &[String] {
        &self.zone_times
    }
}

impl fmt::Display for MeetingSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, time) in self.zone_times.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", time)?;
        }
        Ok(())
    }
}

/// Find the UTC hours of `day` whose local wall-clock hour falls inside
/// `window` in every zone at once.
///
/// Candidates are the 24 instants `day` 00:00, 01:00, .. 23:00 UTC,
/// evaluated in order, so results come back earliest UTC hour first.
/// DST rules of each zone apply through the chrono-tz conversion. The
/// search is pure: same inputs, same output.
///
/// Zones must already be resolved; an empty slice is rejected rather than
/// vacuously accepting every candidate.
pub fn find_overlapping_slots(
    zones: &[Tz],
    window: AcceptanceWindow,
    day: NaiveDate,
) -> Result<Vec<MeetingSlot>, SlotError> {
    if zones.is_empty() {
        return Err(SlotError::NoZones);
    }

    let mut slots = Vec::new();
    for hour in 0..24 {
        // hour < 24, so the candidate instant always exists
        let utc = day.and_hms_opt(hour, 0, 0).unwrap().and_utc();

        let all_available =
            zones.iter().all(|tz| window.contains(utc.with_timezone(tz).hour()));
        if !all_available {
            continue;
        }

        let zone_times = zones
            .iter()
            .map(|tz| format!("{} ({})", utc.with_timezone(tz).format("%I:%M %p"), tz))
            .collect();
        slots.push(MeetingSlot { utc, zone_times });
    }

    debug!(
        "Accepted {} of 24 candidates on {} across {} zone(s)",
        slots.len(),
        day,
        zones.len()
    );
    Ok(slots)
}
