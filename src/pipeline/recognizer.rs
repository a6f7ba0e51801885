use super::RecognitionError;

/// Boundary to the external text-recognition engine.
///
/// The engine is a black box that turns a captured timetable photo into raw
/// multi-line text; the pipeline consumes only the flattened line sequence
/// and makes no assumptions about confidence or bounding boxes. A trait at
/// this seam keeps the host application's backend swappable and allows
/// mocking in tests.
pub trait TextRecognizer {
    fn recognize_text(&self) -> Result<String, RecognitionError>;
}
