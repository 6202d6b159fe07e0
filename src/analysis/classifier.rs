//! Rule-based modality classification.
//!
//! Each modal occurrence is checked against [`MODALITY_RULES`] in order and
//! takes the category of the first rule that matches, or
//! [`Modality::Unclassified`] when none does. Only the Ability and
//! Prediction rules look at negation and the head verb; the later rules
//! match on lemma alone, so a negated "will" that fails Prediction still
//! lands in Volition.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::analysis::modals::{modal_occurrences, ModalOccurrence};
use crate::annotator::AnnotationProvider;
use crate::config::{QuestionScope, TagSet};
use crate::error::AnnotationError;
use crate::types::annotation::AnnotatedDoc;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modality {
    Ability,
    Prediction,
    Obligation,
    Advice,
    Permission,
    Volition,
    Unclassified,
}

impl Modality {
    pub const ALL: [Modality; 7] = [
        Modality::Ability,
        Modality::Prediction,
        Modality::Obligation,
        Modality::Advice,
        Modality::Permission,
        Modality::Volition,
        Modality::Unclassified,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Modality::Ability => "Ability",
            Modality::Prediction => "Prediction",
            Modality::Obligation => "Obligation",
            Modality::Advice => "Advice",
            Modality::Permission => "Permission",
            Modality::Volition => "Volition",
            Modality::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a rule requires beyond the lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleContext {
    /// Lemma alone decides.
    Any,
    /// Head is a verb and no child carries the negation lemma.
    VerbHeadUnnegated,
    /// The question unit ends in `?`.
    Question,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalityRule {
    pub category: Modality,
    pub lemmas: &'static [&'static str],
    pub context: RuleContext,
}

// "have to", "ought to" and "want to" never equal a single-token lemma;
// they are kept so the table reads as the category definitions do.
pub const MODALITY_RULES: [ModalityRule; 6] = [
    ModalityRule {
        category: Modality::Ability,
        lemmas: &["can", "could"],
        context: RuleContext::VerbHeadUnnegated,
    },
    ModalityRule {
        category: Modality::Prediction,
        lemmas: &["will", "shall", "would", "should"],
        context: RuleContext::VerbHeadUnnegated,
    },
    ModalityRule {
        category: Modality::Obligation,
        lemmas: &["must", "have to", "ought to"],
        context: RuleContext::Any,
    },
    ModalityRule {
        category: Modality::Advice,
        lemmas: &["should", "ought"],
        context: RuleContext::Any,
    },
    ModalityRule {
        category: Modality::Permission,
        lemmas: &["can", "may", "could"],
        context: RuleContext::Question,
    },
    ModalityRule {
        category: Modality::Volition,
        lemmas: &["will", "would", "want to"],
        context: RuleContext::Any,
    },
];

/// Occurrence counts for every category, zeros included.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ModalityCounts(BTreeMap<Modality, usize>);

impl Default for ModalityCounts {
    fn default() -> Self {
        ModalityCounts(Modality::ALL.iter().map(|&m| (m, 0)).collect())
    }
}

impl ModalityCounts {
    pub fn record(&mut self, modality: Modality) {
        *self.0.entry(modality).or_insert(0) += 1;
    }

    pub fn get(&self, modality: Modality) -> usize {
        self.0.get(&modality).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Modality, usize)> + '_ {
        self.0.iter().map(|(&m, &n)| (m, n))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModalityClassifier {
    tags: TagSet,
    question_scope: QuestionScope,
}

impl ModalityClassifier {
    pub fn new(tags: TagSet, question_scope: QuestionScope) -> Self {
        ModalityClassifier { tags, question_scope }
    }

    pub fn classify(&self, occurrence: &ModalOccurrence<'_>) -> Modality {
        MODALITY_RULES
            .iter()
            .find(|rule| self.matches(rule, occurrence))
            .map_or(Modality::Unclassified, |rule| rule.category)
    }

    fn matches(&self, rule: &ModalityRule, occurrence: &ModalOccurrence<'_>) -> bool {
        if !rule.lemmas.contains(&occurrence.token.lemma.as_str()) {
            return false;
        }
        match rule.context {
            RuleContext::Any => true,
            RuleContext::VerbHeadUnnegated => {
                occurrence.head().pos == self.tags.verb_pos
                    && !occurrence.is_negated(&self.tags.negation_lemma)
            }
            RuleContext::Question => occurrence.in_question(self.question_scope),
        }
    }

    /// Classify every modal in already-annotated documents.
    pub fn classify_docs(&self, docs: &[AnnotatedDoc]) -> ModalityCounts {
        let mut counts = ModalityCounts::default();
        for occurrence in modal_occurrences(docs, &self.tags) {
            counts.record(self.classify(&occurrence));
        }
        counts
    }

    /// Annotate and classify raw lines, whoever spoke them.
    pub fn classify_lines<S, P>(&self, lines: &[S], provider: &P) -> Result<ModalityCounts, AnnotationError>
    where
        S: AsRef<str>,
        P: AnnotationProvider + ?Sized,
    {
        let docs = lines
            .iter()
            .map(|line| provider.annotate(line.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.classify_docs(&docs))
    }
}
