pub mod classifier;
pub mod examples;
pub mod modals;
pub mod partition;
pub mod pipeline;
pub mod statistics;

pub use classifier::{Modality, ModalityClassifier, ModalityCounts, MODALITY_RULES};
pub use examples::{locate_example, locate_examples};
pub use modals::{extract_modals, modal_occurrences, ModalInventory, ModalOccurrence};
pub use partition::{partition_lines, resolve_speaker, speaker_names};
pub use pipeline::{analyze_file, analyze_transcript, AnalysisSettings, SpeakerAggregate, TranscriptAnalysis};
pub use statistics::count_words;
