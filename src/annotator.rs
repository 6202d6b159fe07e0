//! The annotation provider seam.
//!
//! Tokenization, tagging, lemmatization and dependency parsing happen outside
//! this crate. [`AnnotationProvider`] is the contract the analysis consumes;
//! [`PrecomputedAnnotations`] serves documents produced ahead of time by an
//! external tagger and doubles as a fixture-backed provider in tests.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::AnnotationError;
use crate::parsing::spacy_json::parse_spacy_jsonl;
use crate::types::annotation::AnnotatedDoc;

/// A stateless, re-entrant text annotation capability.
pub trait AnnotationProvider {
    /// Annotate `text` into tokens and sentences.
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc, AnnotationError>;
}

impl<T: AnnotationProvider + ?Sized> AnnotationProvider for &T {
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc, AnnotationError> {
        (**self).annotate(text)
    }
}

/// Annotations looked up by exact document text.
#[derive(Debug, Clone, Default)]
pub struct PrecomputedAnnotations {
    docs: HashMap<String, AnnotatedDoc>,
}

impl PrecomputedAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later documents with the same text replace earlier ones.
    pub fn from_docs(docs: impl IntoIterator<Item = AnnotatedDoc>) -> Self {
        let mut annotations = Self::new();
        for doc in docs {
            annotations.insert(doc);
        }
        annotations
    }

    pub fn from_jsonl_str(content: &str) -> Result<Self, AnnotationError> {
        Ok(Self::from_docs(parse_spacy_jsonl(content)?))
    }

    /// Load a JSONL file of spaCy documents.
    pub fn load(path: &Path) -> Result<Self, AnnotationError> {
        let content = fs::read_to_string(path).map_err(|source| AnnotationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let annotations = Self::from_jsonl_str(&content)?;
        debug!(path = %path.display(), docs = annotations.len(), "loaded annotations");
        Ok(annotations)
    }

    pub fn insert(&mut self, doc: AnnotatedDoc) {
        self.docs.insert(doc.text().to_string(), doc);
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl AnnotationProvider for PrecomputedAnnotations {
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc, AnnotationError> {
        self.docs
            .get(text)
            .cloned()
            .ok_or_else(|| AnnotationError::Missing {
                text: text.to_string(),
            })
    }
}
