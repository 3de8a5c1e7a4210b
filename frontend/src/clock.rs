use shared::schedule::{current_slot, Slot};
use time::Time;

/// Time of day on the rider's device.
pub fn local_time() -> Option<Time> {
    let now = js_sys::Date::new_0();
    Time::from_hms(now.get_hours() as u8, now.get_minutes() as u8, now.get_seconds() as u8).ok()
}

pub fn slot_now() -> Option<Slot> {
    local_time().and_then(current_slot)
}
