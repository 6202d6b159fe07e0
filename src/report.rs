//! The user-facing report: which speakers to show and how to render them.

use clap::ValueEnum;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::analysis::classifier::Modality;
use crate::analysis::pipeline::{SpeakerAggregate, TranscriptAnalysis};
use crate::types::transcript::Speaker;

const RULE_WIDTH: usize = 80;

const BOLD_BLUE: &str = "\x1b[1;34m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const BOLD_YELLOW: &str = "\x1b[1;33m";
const BOLD_RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Optional report sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub examples: bool,
    pub categories: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TranscriptReport {
    pub speakers: Vec<SpeakerReport>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SpeakerReport {
    pub speaker: Speaker,
    pub word_count: usize,
    pub modal_count: usize,
    /// Modals per 1000 words; `None` when the speaker has no words.
    pub per_thousand_words: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Vec<CategoryShare>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Modality,
    pub count: usize,
    /// Share of the speaker's modal count, 0 to 100.
    pub percentage: f64,
}

pub fn normalized_rate(modal_count: usize, word_count: usize) -> Option<f64> {
    if word_count == 0 {
        return None;
    }
    Some(modal_count as f64 / word_count as f64 * 1000.0)
}

/// Keep speakers that used at least one modal, in name order.
pub fn build_report(analysis: &TranscriptAnalysis, options: ReportOptions) -> TranscriptReport {
    let speakers = analysis
        .speakers
        .iter()
        .filter(|(_, aggregate)| aggregate.modal_count > 0)
        .map(|(speaker, aggregate)| speaker_report(speaker, aggregate, options))
        .collect();
    TranscriptReport { speakers }
}

fn speaker_report(speaker: &Speaker, aggregate: &SpeakerAggregate, options: ReportOptions) -> SpeakerReport {
    let classification = options.categories.then(|| {
        aggregate
            .classification_counts
            .iter()
            .map(|(category, count)| CategoryShare {
                category,
                count,
                percentage: count as f64 / aggregate.modal_count as f64 * 100.0,
            })
            .collect::<Vec<_>>()
    });

    SpeakerReport {
        speaker: speaker.clone(),
        word_count: aggregate.word_count,
        modal_count: aggregate.modal_count,
        per_thousand_words: normalized_rate(aggregate.modal_count, aggregate.word_count),
        examples: options.examples.then(|| aggregate.examples.clone()),
        classification,
    }
}

/// Colors need both the configuration and a terminal on stdout.
pub fn color_enabled(configured: bool, stdout_is_terminal: bool) -> bool {
    configured && stdout_is_terminal
}

/// The closing line of a run, printed to stderr.
pub fn execution_summary(elapsed: Duration) -> String {
    format!("Execution time: {:.2} seconds", elapsed.as_secs_f64())
}

pub fn render_json(report: &TranscriptReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn render_text(report: &TranscriptReport, color: bool) -> String {
    TextReport { report, color }.to_string()
}

struct TextReport<'a> {
    report: &'a TranscriptReport,
    color: bool,
}

impl TextReport<'_> {
    fn paint(&self, text: &str, style: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn write_speaker(&self, f: &mut fmt::Formatter<'_>, speaker: &SpeakerReport) -> fmt::Result {
        let name = format!("{:<10}", speaker.speaker.name());
        writeln!(f, "\n{}\n{}", self.paint(&name, BOLD_BLUE), "-".repeat(RULE_WIDTH))?;
        writeln!(
            f,
            "Number of modals: {}",
            self.paint(&format!("{:3}", speaker.modal_count), BOLD_GREEN)
        )?;
        let rate = match speaker.per_thousand_words {
            Some(rate) => format!("{:.2}", rate),
            None => "n/a".to_string(),
        };
        writeln!(f, "Normalized (by 1000 words): {}", self.paint(&rate, BOLD_GREEN))?;

        if let Some(examples) = &speaker.examples {
            writeln!(f, "\n{}", self.paint("Examples:", BOLD_YELLOW))?;
            for (lemma, example) in examples {
                writeln!(f, "\t{:10} {}", lemma, self.highlight(example, lemma))?;
            }
        }

        if let Some(classification) = &speaker.classification {
            writeln!(f, "\n{}", self.paint("Modal classification:", BOLD_YELLOW))?;
            for share in classification {
                let percentage = format!("{:.2}%", share.percentage);
                let percentage = if share.count > 0 {
                    self.paint(&percentage, BOLD_RED)
                } else {
                    percentage
                };
                writeln!(
                    f,
                    "\t{:10}\t{:5}\tThis is {} of all modals.",
                    share.category.as_str(),
                    share.count,
                    percentage
                )?;
            }
        }
        Ok(())
    }

    /// Paint the first whole-word occurrence of `lemma`, so "can" is left
    /// alone inside "American".
    fn highlight(&self, example: &str, lemma: &str) -> String {
        if !self.color {
            return example.to_string();
        }
        let pattern = format!(r"\b{}\b", regex::escape(lemma));
        match Regex::new(&pattern) {
            Ok(re) => re
                .replacen(example, 1, regex::NoExpand(&self.paint(lemma, BOLD_RED)))
                .into_owned(),
            Err(_) => example.to_string(),
        }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "\n{}", rule)?;
        for speaker in &self.report.speakers {
            self.write_speaker(f, speaker)?;
        }
        writeln!(f, "\n{}", rule)
    }
}
