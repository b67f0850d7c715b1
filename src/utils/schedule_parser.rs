//! Raw schedule descriptor parsing.
//!
//! A descriptor holds one or more fragments separated by `<p>`, each shaped
//! `<day><start>[~<end>][(<room>)]`, for example `Mon1~2(101)<p>Wed3(Lab 2)`.

use crate::models::schedule::{is_valid_slot, ScheduleFragment, MAX_TIME_SLOT, MIN_TIME_SLOT};

const FRAGMENT_SEPARATOR: &str = "<p>";

/// Turns a lecture's raw schedule descriptor into ordered fragments.
#[cfg_attr(test, mockall::automock)]
pub trait ScheduleParser {
    /// An empty descriptor yields an empty list.
    fn parse(&self, raw: &str) -> Vec<ScheduleFragment>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorParser;

impl ScheduleParser for DescriptorParser {
    fn parse(&self, raw: &str) -> Vec<ScheduleFragment> {
        raw.split(FRAGMENT_SEPARATOR)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .filter_map(|fragment| match parse_fragment(fragment) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    log::warn!("Skipping schedule fragment {:?}: {}", fragment, err);
                    None
                }
            })
            .collect()
    }
}

fn parse_fragment(fragment: &str) -> Result<ScheduleFragment, String> {
    let digits_at = fragment
        .find(|c: char| c.is_ascii_digit())
        .ok_or("missing time range")?;

    let day = fragment[..digits_at].trim();
    if day.is_empty() {
        return Err("missing day label".to_string());
    }

    let rest = &fragment[digits_at..];
    let (times, room) = match rest.find('(') {
        Some(open) => {
            let inner = &rest[open + 1..];
            let room = inner.rfind(')').map_or(inner, |close| &inner[..close]);
            (&rest[..open], room.trim())
        }
        None => (rest, ""),
    };

    let (start, end) = match times.split_once('~') {
        Some((start, end)) => (parse_slot(start)?, parse_slot(end)?),
        None => {
            let slot = parse_slot(times)?;
            (slot, slot)
        }
    };

    if !is_valid_slot(i64::from(start)) || !is_valid_slot(i64::from(end)) {
        return Err(format!(
            "range {}~{} leaves slots {}..={}",
            start, end, MIN_TIME_SLOT, MAX_TIME_SLOT
        ));
    }

    if end < start {
        return Err(format!("range {}~{} is descending", start, end));
    }

    Ok(ScheduleFragment::new(day, (start..=end).collect(), room))
}

fn parse_slot(text: &str) -> Result<u8, String> {
    let text = text.trim();
    text.parse::<u8>()
        .map_err(|_| format!("invalid time slot {:?}", text))
}
