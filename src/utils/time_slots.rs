// Time slot labels
// Daytime periods are 30 minutes from 09:00; evening periods run 50 minutes, 55 apart

use chrono::{Duration, NaiveTime};

use crate::models::schedule::{MAX_TIME_SLOT, MIN_TIME_SLOT};

const DAYTIME_SLOTS: u8 = 18;
const DAYTIME_MINUTES: i64 = 30;
const EVENING_MINUTES: i64 = 50;
const EVENING_STRIDE_MINUTES: i64 = 55;

fn first_slot_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Start and end clock time of a slot, `None` outside `[1, 24]`.
pub fn slot_bounds(slot: u8) -> Option<(NaiveTime, NaiveTime)> {
    if !(MIN_TIME_SLOT..=MAX_TIME_SLOT).contains(&slot) {
        return None;
    }

    let index = i64::from(slot - 1);
    let (offset, length) = if slot <= DAYTIME_SLOTS {
        (index * DAYTIME_MINUTES, DAYTIME_MINUTES)
    } else {
        let evening_index = index - i64::from(DAYTIME_SLOTS);
        (
            i64::from(DAYTIME_SLOTS) * DAYTIME_MINUTES + evening_index * EVENING_STRIDE_MINUTES,
            EVENING_MINUTES,
        )
    };

    let start = first_slot_start() + Duration::minutes(offset);
    Some((start, start + Duration::minutes(length)))
}

/// Row label such as `"01 (09:00~09:30)"`.
pub fn slot_label(slot: u8) -> Option<String> {
    slot_bounds(slot).map(|(start, end)| {
        format!(
            "{:02} ({}~{})",
            slot,
            start.format("%H:%M"),
            end.format("%H:%M")
        )
    })
}

pub fn is_evening(slot: u8) -> bool {
    slot > DAYTIME_SLOTS && slot <= MAX_TIME_SLOT
}
