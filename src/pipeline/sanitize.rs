/// Normalize raw recognizer output into the line sequence the classifier
/// consumes: split on newlines, trim each line, drop the empty ones.
pub fn normalize_lines(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
