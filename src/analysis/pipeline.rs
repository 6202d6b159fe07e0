//! Whole-transcript analysis: partition, annotate once, aggregate.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::analysis::classifier::{ModalityClassifier, ModalityCounts};
use crate::analysis::examples::locate_examples;
use crate::analysis::modals::extract_modals;
use crate::analysis::partition::{partition_lines, speaker_names};
use crate::analysis::statistics::count_words;
use crate::annotator::{AnnotationProvider, PrecomputedAnnotations};
use crate::config::{Config, QuestionScope, TagSet};
use crate::error::{AnnotationError, ModalizerError};
use crate::parsing::transcript::read_transcript;
use crate::types::annotation::AnnotatedDoc;
use crate::types::transcript::{Speaker, TranscriptLine};

/// The knobs the analysis reads from configuration.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSettings {
    pub tags: TagSet,
    pub question_scope: QuestionScope,
}

impl From<&Config> for AnalysisSettings {
    fn from(config: &Config) -> Self {
        AnalysisSettings {
            tags: config.tags.clone(),
            question_scope: config.classification.question_scope,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SpeakerAggregate {
    pub line_count: usize,
    pub word_count: usize,
    pub modal_surface_forms: BTreeSet<String>,
    pub modal_lemmas: BTreeSet<String>,
    pub modal_count: usize,
    /// Lemma to example sentence, for the lemmas that have one.
    pub examples: BTreeMap<String, String>,
    pub classification_counts: ModalityCounts,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptAnalysis {
    /// Every discovered speaker, in ascending name order.
    pub speakers: BTreeMap<Speaker, SpeakerAggregate>,
    /// Lines that carried no known speaker prefix.
    pub orphan_lines: usize,
}

impl TranscriptAnalysis {
    pub fn get(&self, name: &str) -> Option<&SpeakerAggregate> {
        self.speakers.get(&Speaker::from(name))
    }
}

/// Run the full analysis over `lines`.
///
/// Each line with a known speaker is annotated exactly once; the same
/// documents feed word counts, modal extraction, examples and classification.
/// Any provider failure aborts the run.
pub fn analyze_transcript<S, P>(
    lines: &[S],
    provider: &P,
    settings: &AnalysisSettings,
) -> Result<TranscriptAnalysis, AnnotationError>
where
    S: AsRef<str>,
    P: AnnotationProvider + ?Sized,
{
    let names = speaker_names(lines);
    let groups = partition_lines(lines, &names);
    let assigned: usize = groups.values().map(Vec::len).sum();
    let orphan_lines = lines.len() - assigned;

    let classifier = ModalityClassifier::new(settings.tags.clone(), settings.question_scope);
    let mut speakers = BTreeMap::new();
    for (speaker, speaker_lines) in groups {
        if speaker_lines.is_empty() {
            warn!(speaker = %speaker, "speaker has no attributable lines");
        }
        let aggregate = aggregate_speaker(&speaker, &speaker_lines, provider, settings, &classifier)?;
        debug!(
            speaker = %speaker,
            lines = aggregate.line_count,
            words = aggregate.word_count,
            modals = aggregate.modal_count,
            "speaker analyzed"
        );
        speakers.insert(speaker, aggregate);
    }

    info!(
        lines = lines.len(),
        speakers = speakers.len(),
        orphan_lines,
        "transcript analyzed"
    );
    Ok(TranscriptAnalysis { speakers, orphan_lines })
}

/// Analyze a transcript file against a JSONL annotation file.
pub fn analyze_file(
    transcript: &Path,
    annotations: &Path,
    settings: &AnalysisSettings,
) -> Result<TranscriptAnalysis, ModalizerError> {
    let lines = read_transcript(transcript)?;
    let provider = PrecomputedAnnotations::load(annotations)?;
    Ok(analyze_transcript(&lines, &provider, settings)?)
}

fn aggregate_speaker<P>(
    speaker: &Speaker,
    lines: &[TranscriptLine],
    provider: &P,
    settings: &AnalysisSettings,
    classifier: &ModalityClassifier,
) -> Result<SpeakerAggregate, AnnotationError>
where
    P: AnnotationProvider + ?Sized,
{
    let docs = lines
        .iter()
        .map(|line| provider.annotate(&line.text))
        .collect::<Result<Vec<AnnotatedDoc>, _>>()?;

    let inventory = extract_modals(&docs, &settings.tags);
    let examples = locate_examples(speaker, &inventory.lemmas, &docs, &settings.tags);
    let classification_counts = classifier.classify_docs(&docs);
    debug_assert_eq!(classification_counts.total(), inventory.count);

    Ok(SpeakerAggregate {
        line_count: lines.len(),
        word_count: count_words(speaker, &docs, &settings.tags),
        modal_surface_forms: inventory.surface_forms,
        modal_lemmas: inventory.lemmas,
        modal_count: inventory.count,
        examples,
        classification_counts,
    })
}
