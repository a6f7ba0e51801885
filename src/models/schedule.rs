use serde::{Deserialize, Serialize};

/// One reconstructed timetable entry, the externally visible result unit.
///
/// A record exists only because a subject was classified at its position;
/// every other field is filled by index-aligned lookup with a fallback, not
/// from the subject's own line. `instructor` and `room` carry the `"-"`
/// sentinel when unavailable, `day` may be empty, and `time` may hold the
/// default slot when no time token was recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub subject: String,
    pub instructor: String,
    pub room: String,
    pub day: String,
    pub time: String,
}
