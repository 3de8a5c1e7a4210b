//! Departure slots and the "current slot" policy used by the client.
//!
//! Departures run on a fixed cadence from the first to the last departure of
//! the day. The current slot is the latest one that has already started; the
//! window is inclusive at both ends and there is no slot outside it.

use serde::{Deserialize, Serialize};
use std::fmt;
use time::Time;

pub const FIRST_DEPARTURE_MINUTES: u16 = 5 * 60 + 30;
pub const LAST_DEPARTURE_MINUTES: u16 = 23 * 60 + 30;
pub const CADENCE_MINUTES: u16 = 40;
pub const SLOT_COUNT: u8 = 28;

/// One scheduled departure, by index into the day's slot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot(u8);

impl Slot {
    pub const FIRST: Slot = Slot(0);
    pub const LAST: Slot = Slot(SLOT_COUNT - 1);

    pub const fn minutes_since_midnight(self) -> u16 {
        FIRST_DEPARTURE_MINUTES + self.0 as u16 * CADENCE_MINUTES
    }

    /// The `HH:MM` form sent to the API.
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.minutes_since_midnight();
        write!(f, "{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

fn all_slots() -> impl DoubleEndedIterator<Item = Slot> {
    (0..SLOT_COUNT).map(Slot)
}

pub fn current_slot(now: Time) -> Option<Slot> {
    let minutes = u16::from(now.hour()) * 60 + u16::from(now.minute());
    if minutes > LAST_DEPARTURE_MINUTES {
        return None;
    }

    all_slots()
        .rev()
        .find(|slot| slot.minutes_since_midnight() <= minutes)
}
