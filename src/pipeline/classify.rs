use std::sync::LazyLock;

use regex::Regex;

use super::vocabulary;

/// Delimiter the recognizer emits between room and instructor cells it
/// merged into one line.
const FIELD_DELIMITER: char = '|';

/// Spaced slash marks a combined day/time cell, never an instructor name.
const DAY_TIME_SEPARATOR: &str = " / ";

/// Lines shorter than this carry no usable signal.
const MIN_LINE_CHARS: usize = 3;

/// Instructor names (with titles) are reliably longer than this.
const MIN_INSTRUCTOR_CHARS: usize = 10;

/// Minimum length for the instructor half of a split composite cell.
const MIN_COMPOSITE_NAME_CHARS: usize = 3;

/// "08.00"-style clock fragments disqualify a line from being a name.
static TIME_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{2}\.[0-9]{2}").expect("Invalid clock pattern"));

/// The four field sequences accumulated over one pass of the classifier.
///
/// Order within each sequence is the order of appearance in the source text
/// and is significant: assembly zips by position, not by semantic matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationBuffers {
    pub subjects: Vec<String>,
    pub instructors: Vec<String>,
    pub rooms: Vec<String>,
    pub times: Vec<String>,
}

/// Classify one trimmed, non-empty line into the buffers.
///
/// Pure step of the pipeline fold: takes the buffers accumulated so far,
/// returns them with at most two fields appended. First match wins; a line
/// that survives every rule without an uppercase first letter is dropped.
pub fn classify_line(mut buffers: ClassificationBuffers, line: &str) -> ClassificationBuffers {
    // Merged "room | instructor" cell: split on the first delimiter and keep
    // both halves. The instructor half only counts when it is long enough to
    // be a name.
    if let Some((head, tail)) = line.split_once(FIELD_DELIMITER) {
        if vocabulary::is_room_token(head) {
            buffers.rooms.push(head.trim().to_string());
            if tail.chars().count() > MIN_COMPOSITE_NAME_CHARS {
                buffers.instructors.push(tail.trim().to_string());
            }
            return buffers;
        }
    }

    // Noise suppression. Day/time lines are exempt even when they share
    // tokens with blacklisted headers; room codes buried in the noise list
    // still carry positional signal, so they are kept before the drop.
    if vocabulary::is_blacklisted(line) && !vocabulary::is_day_token(line) {
        if vocabulary::is_room_token(line) {
            buffers.rooms.push(line.to_string());
        }
        return buffers;
    }

    // Structural codes are table plumbing, not content.
    if vocabulary::is_subject_code(line) || vocabulary::is_section_code(line) {
        return buffers;
    }

    // Credit-hour digits and stray fragments.
    if line.chars().all(|c| c.is_ascii_digit()) || line.chars().count() < MIN_LINE_CHARS {
        return buffers;
    }

    if vocabulary::is_day_token(line) {
        buffers.times.push(line.to_string());
        return buffers;
    }

    if vocabulary::is_room_token(line) {
        buffers.rooms.push(line.to_string());
        return buffers;
    }

    if is_instructor_like(line) {
        buffers.instructors.push(line.to_string());
        return buffers;
    }

    // Subjects are the most visually prominent cells: capitalized, and the
    // only thing left after every exclusion above.
    if line.chars().next().is_some_and(char::is_uppercase) {
        buffers.subjects.push(line.to_string());
    } else {
        tracing::debug!(line, "unclassifiable line dropped");
    }

    buffers
}

/// Punctuated, long, and not a day/time composite or clock reading.
fn is_instructor_like(line: &str) -> bool {
    (line.contains(',') || line.contains('.'))
        && line.chars().count() > MIN_INSTRUCTOR_CHARS
        && !line.contains(DAY_TIME_SEPARATOR)
        && !TIME_LIKE.is_match(line)
}
