//! Modal verb analysis of speaker-attributed transcripts.
//!
//! Lines of the form `NAME: utterance` are grouped by speaker, annotated
//! through an [`annotator::AnnotationProvider`], and summarized as word
//! counts, modal inventories, example sentences and modality categories.

pub mod config;
pub mod error;
pub mod logging;
pub mod types {
    pub mod annotation;
    pub mod transcript;
}
pub mod parsing;
pub mod annotator;
pub mod analysis;
pub mod report;
pub mod report_io;

pub use analysis::{analyze_transcript, AnalysisSettings, Modality, TranscriptAnalysis};
pub use annotator::{AnnotationProvider, PrecomputedAnnotations};
pub use config::Config;
pub use error::{AnnotationError, ConfigError, ModalizerError};
