use crate::models::ScheduleRecord;

use super::classify::ClassificationBuffers;

/// Sentinel for instructor/room cells the classifier never saw.
pub const UNKNOWN_FIELD: &str = "-";

/// Fallback day/time slot for records with no classified time token.
pub const DEFAULT_SLOT: &str = "Senin / 08.00";

/// Zip the classified buffers positionally into complete records.
///
/// One record per classified subject; instructor, room, and time are looked
/// up at the same index with fallbacks for the shorter buffers. Alignment is
/// by append order only: if any buffer gained or lost an entry relative to
/// the others (an OCR drop or merge), the remaining fields shift against
/// their subjects, and the assembler does not detect that.
pub fn assemble_records(buffers: &ClassificationBuffers) -> Vec<ScheduleRecord> {
    let mut records = Vec::with_capacity(buffers.subjects.len());

    for (i, subject) in buffers.subjects.iter().enumerate() {
        let instructor = buffers
            .instructors
            .get(i)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_FIELD);
        let room = buffers
            .rooms
            .get(i)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_FIELD);
        let slot = buffers
            .times
            .get(i)
            .map(String::as_str)
            .unwrap_or(DEFAULT_SLOT);

        let (day, time) = split_slot(slot);

        records.push(ScheduleRecord {
            subject: subject.clone(),
            instructor: instructor.to_string(),
            room: room.to_string(),
            day,
            time,
        });
    }

    records
}

/// Split a combined "day / time" token on the first slash. A token without
/// a slash lands in both fields unchanged.
fn split_slot(slot: &str) -> (String, String) {
    match slot.split_once('/') {
        Some((day, time)) => (day.trim().to_string(), time.trim().to_string()),
        None => (slot.to_string(), slot.to_string()),
    }
}
