use crate::models::ScheduleRecord;

use super::assemble::assemble_records;
use super::classify::{classify_line, ClassificationBuffers};
use super::recognizer::TextRecognizer;
use super::sanitize::normalize_lines;

/// Run the full pipeline over raw recognizer output.
///
/// Single top-to-bottom pass: normalize into lines, fold the classifier,
/// zip the buffers into records. Stateless: fresh buffers every call, no
/// backtracking across lines. Empty or unusable input yields an empty
/// vector; this function never fails.
pub fn extract_schedule(raw_text: &str) -> Vec<ScheduleRecord> {
    let lines = normalize_lines(raw_text);
    if lines.is_empty() {
        return Vec::new();
    }

    let buffers = lines
        .iter()
        .fold(ClassificationBuffers::default(), |acc, line| {
            classify_line(acc, line)
        });

    tracing::info!(
        lines = lines.len(),
        subjects = buffers.subjects.len(),
        instructors = buffers.instructors.len(),
        rooms = buffers.rooms.len(),
        times = buffers.times.len(),
        "schedule text classified"
    );

    assemble_records(&buffers)
}

/// Run the pipeline against an external recognizer.
///
/// A recognizer failure is not distinguishable from "recognition succeeded
/// but nothing was parseable": both surface as an empty result, which is
/// the sole failure signal consumers get.
pub fn extract_from<R: TextRecognizer>(source: &R) -> Vec<ScheduleRecord> {
    match source.recognize_text() {
        Ok(text) => extract_schedule(&text),
        Err(err) => {
            tracing::warn!(error = %err, "recognition failed, returning empty schedule");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::RecognitionError;

    #[test]
    fn full_row_reconstructs_one_record() {
        let text = "Kalkulus I\nDr. Budi, M.Kom.\nB301\nSenin / 08.00";
        let records = extract_schedule(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subject, "Kalkulus I");
        assert_eq!(records[0].instructor, "Dr. Budi, M.Kom.");
        assert_eq!(records[0].room, "B301");
        assert_eq!(records[0].day, "Senin");
        assert_eq!(records[0].time, "08.00");
    }

    #[test]
    fn missing_room_falls_back_to_sentinel() {
        // "Dr. Ani" is too short for the instructor rule, so it classifies
        // as a second subject; the first record still gets every fallback
        // the position-aligned lookup dictates.
        let records = extract_schedule("Fisika Dasar\nDr. Ani\nSelasa / 10.00");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].subject, "Fisika Dasar");
        assert_eq!(records[0].instructor, "-");
        assert_eq!(records[0].room, "-");
        assert_eq!(records[0].day, "Selasa");
        assert_eq!(records[0].time, "10.00");
    }

    #[test]
    fn result_length_equals_classified_subject_count() {
        let text = "Kalkulus I\nFisika Dasar\nBasis Data\nB301\nSenin / 08.00";
        assert_eq!(extract_schedule(text).len(), 3);
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "Kalkulus I\nB301\nSenin / 08.00\nFisika Dasar";
        assert_eq!(extract_schedule(text), extract_schedule(text));
    }

    #[test]
    fn subject_code_never_reaches_the_output() {
        let records = extract_schedule("ABC123\nKalkulus I\nSenin / 08.00");
        assert_eq!(records.len(), 1);
        for record in &records {
            assert_ne!(record.subject, "ABC123");
            assert_ne!(record.instructor, "ABC123");
            assert_ne!(record.room, "ABC123");
            assert_ne!(record.time, "ABC123");
        }
    }

    #[test]
    fn header_only_input_yields_empty_result() {
        let text = "No.\nKode\nMata Kuliah\nSKS\nKelas\nRuang\nDosen\nHari\nWaktu";
        assert!(extract_schedule(text).is_empty());
    }

    #[test]
    fn empty_and_blank_input_yield_empty_result() {
        assert!(extract_schedule("").is_empty());
        assert!(extract_schedule("\n  \n\t\n").is_empty());
    }

    #[test]
    fn composite_cell_contributes_room_and_instructor_only() {
        let records = extract_schedule("Kalkulus I\nB5 | Dr. Jane Smith\nSenin / 08.00");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].room, "B5");
        assert_eq!(records[0].instructor, "Dr. Jane Smith");
    }

    #[test]
    fn realistic_table_dump_reconstructs_all_rows() {
        // The kind of flattened column dump recognition produces: headers,
        // codes, and credit digits interleaved with the real cells.
        let text = "Jadwal Kuliah Semester Ganjil\n\
                    No.\nKode\nMatakuliah\nSKS\nRuang\nDosen\nHari / Waktu\n\
                    TIF107\nKalkulus I\n3\nB301\nDr. Budi Santoso, M.Kom.\nSenin / 08.00\n\
                    TIF215\nStruktur Data\n4\nB202\nIr. Siti Aminah, M.T.\nRabu / 10.00";
        let records = extract_schedule(text);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].subject, "Kalkulus I");
        assert_eq!(records[0].instructor, "Dr. Budi Santoso, M.Kom.");
        assert_eq!(records[0].room, "B301");
        assert_eq!(records[0].day, "Senin");
        assert_eq!(records[0].time, "08.00");

        assert_eq!(records[1].subject, "Struktur Data");
        assert_eq!(records[1].instructor, "Ir. Siti Aminah, M.T.");
        assert_eq!(records[1].room, "B202");
        assert_eq!(records[1].day, "Rabu");
        assert_eq!(records[1].time, "10.00");
    }

    // --- recognizer seam ---

    struct StubRecognizer(Result<&'static str, &'static str>);

    impl TextRecognizer for StubRecognizer {
        fn recognize_text(&self) -> Result<String, RecognitionError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(msg) => Err(RecognitionError::Backend(msg.to_string())),
            }
        }
    }

    #[test]
    fn recognizer_output_flows_through_the_pipeline() {
        let source = StubRecognizer(Ok("Kalkulus I\nB301\nSenin / 08.00"));
        let records = extract_from(&source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].room, "B301");
    }

    #[test]
    fn recognizer_failure_surfaces_as_empty_result() {
        let source = StubRecognizer(Err("camera produced no frame"));
        assert!(extract_from(&source).is_empty());
    }
}
