use std::sync::LazyLock;

use regex::Regex;

/// Noise vocabulary: table headers, units, administrative labels, and the
/// recurring OCR misreads for specific section/room codes. Entries are kept
/// as they appear in printed timetables; matching is case-insensitive.
const NOISE_TOKENS: &[&str] = &[
    "No.",
    "Kode",
    "Matakuliah",
    "Mata Kuliah",
    "SKS",
    "Kelas",
    "Ruang",
    "Dosen",
    "Hari",
    "Waktu",
    "Kampus",
    "Semester",
    "Kurikulum",
    "Cetak",
    "Hal",
    // Section codes that survive recognition as free-standing cells
    "TI.24.A.6",
    "TL.24.A.6",
    "TL.24",
    "TI.24",
    // Room codes the recognizer emits detached from their row
    "B_5",
    "B5",
    "B501",
    "B505",
    "B506",
    "FT-FH",
];

static NOISE_TOKENS_LOWER: LazyLock<Vec<String>> =
    LazyLock::new(|| NOISE_TOKENS.iter().map(|t| t.to_lowercase()).collect());

/// Course codes: three uppercase letters plus three digits, nothing else.
static SUBJECT_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}[0-9]{3}$").expect("Invalid subject code pattern"));

/// Class/section codes in their two-letter-dot-two-digit form ("TI.24").
static SECTION_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{2}\.[0-9]{2}").expect("Invalid section code pattern"));

/// Room cells: a letter immediately followed by a digit, with an optional
/// underscore the recognizer tends to insert ("B5", "B_5", "B301"), or the
/// lab building literal.
static ROOM_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]_?[0-9]|FT-FH").expect("Invalid room pattern"));

/// Day names in the two scripts timetables arrive in: Indonesian and Arabic.
static DAY_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Senin|Selasa|Rabu|Kamis|Jumat|Sabtu|Minggu|الإثنين|الثلاثاء|الأربعاء|الخميس|الجمعة|السبت|الأحد")
        .expect("Invalid day name pattern")
});

/// Case-insensitive containment test against the noise vocabulary.
pub fn is_blacklisted(line: &str) -> bool {
    let lower = line.to_lowercase();
    NOISE_TOKENS_LOWER.iter().any(|token| lower.contains(token))
}

/// Exact match against the course-code pattern.
pub fn is_subject_code(line: &str) -> bool {
    SUBJECT_CODE.is_match(line)
}

/// Containment match against the class/section-code pattern.
pub fn is_section_code(line: &str) -> bool {
    SECTION_CODE.is_match(line)
}

/// Containment match against the room pattern.
pub fn is_room_token(line: &str) -> bool {
    ROOM_TOKEN.is_match(line)
}

/// Containment match against the multi-script day-name pattern.
pub fn is_day_token(line: &str) -> bool {
    DAY_TOKEN.is_match(line)
}
