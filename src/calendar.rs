//! Weekday resolution and day-based schedule filtering.
//!
//! Shares its vocabulary with the extraction pipeline's day detection: a
//! record's free-text `day` field (Indonesian, English, or Arabic) resolves
//! to a canonical index that calendar-style consumers filter on.

use chrono::{Datelike, Local};

use crate::models::ScheduleRecord;

/// Substring markers per weekday, Monday first. The Latin markers are
/// abbreviation prefixes shared by the Indonesian and English names; the
/// Arabic day names are matched whole.
const DAY_MARKERS: [(&str, &str, &str); 7] = [
    ("sen", "mon", "الإثنين"),
    ("sel", "tue", "الثلاثاء"),
    ("rab", "wed", "الأربعاء"),
    ("kam", "thu", "الخميس"),
    ("jum", "fri", "الجمعة"),
    ("sab", "sat", "السبت"),
    ("min", "sun", "الأحد"),
];

/// Index of no recognizable weekday.
pub const UNKNOWN_DAY: i32 = -1;

/// Normalize a free-text day token to a canonical weekday index,
/// Monday = 0 through Sunday = 6.
///
/// The input is trimmed and case-folded, then tested against the marker
/// table in order; the first match wins. Returns [`UNKNOWN_DAY`] when no
/// marker matches. Pure function, no state between calls.
pub fn resolve_day_index(text: &str) -> i32 {
    let lower = text.trim().to_lowercase();
    for (i, (id, en, ar)) in DAY_MARKERS.iter().enumerate() {
        if lower.contains(id) || lower.contains(en) || lower.contains(ar) {
            return i as i32;
        }
    }
    UNKNOWN_DAY
}

/// Weekday index of the device clock, in the same canonical numbering as
/// [`resolve_day_index`].
pub fn today_index() -> i32 {
    Local::now().weekday().num_days_from_monday() as i32
}

/// Records whose day resolves to `day_index`, ordered by their time token.
pub fn entries_for_day(records: &[ScheduleRecord], day_index: i32) -> Vec<ScheduleRecord> {
    let mut daily: Vec<ScheduleRecord> = records
        .iter()
        .filter(|record| resolve_day_index(&record.day) == day_index)
        .cloned()
        .collect();
    daily.sort_by(|a, b| a.time.cmp(&b.time));
    daily
}
