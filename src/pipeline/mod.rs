pub mod vocabulary;
pub mod sanitize;
pub mod classify;
pub mod assemble;
pub mod recognizer;
pub mod orchestrator;

pub use classify::*;
pub use assemble::*;
pub use recognizer::*;
pub use orchestrator::*;

use thiserror::Error;

/// Failures of the external recognition engine. The pipeline itself never
/// fails; the driver maps these to an empty result at the seam.
#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("recognizer backend failed: {0}")]
    Backend(String),
}
