pub mod config;
pub mod models;
pub mod pipeline; // OCR text -> classified buffers -> schedule records
pub mod calendar; // weekday resolution + day-based filtering

use tracing_subscriber::EnvFilter;

pub use calendar::resolve_day_index;
pub use models::ScheduleRecord;
pub use pipeline::{extract_from, extract_schedule, RecognitionError, TextRecognizer};

/// Initialize tracing for binaries embedding the engine.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
