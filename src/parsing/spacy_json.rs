//! Reader for spaCy `Doc.to_json()` documents, one per JSONL line.
//!
//! spaCy reports offsets in Unicode scalar values; they are converted to
//! byte offsets here so the rest of the crate can slice `str` directly.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::AnnotationError;
use crate::types::annotation::{AnnotatedDoc, TokenSpec};

#[derive(Deserialize, Debug)]
struct SpacyDoc {
    text: String,
    #[serde(default)]
    sents: Vec<SpacySpan>,
    #[serde(default)]
    tokens: Vec<SpacyToken>,
}

#[derive(Deserialize, Debug)]
struct SpacySpan {
    start: usize,
}

#[derive(Deserialize, Debug)]
struct SpacyToken {
    id: usize,
    start: usize,
    end: usize,
    #[serde(default)]
    pos: String,
    #[serde(default)]
    tag: String,
    #[serde(default)]
    lemma: String,
    head: usize,
}

/// Parse a single spaCy JSON document.
pub fn parse_spacy_doc(json: &str) -> Result<AnnotatedDoc, AnnotationError> {
    let raw: SpacyDoc =
        serde_json::from_str(json).map_err(|source| AnnotationError::Malformed { line: 1, source })?;
    to_annotated_doc(raw)
}

/// Parse a JSONL stream of spaCy documents. Blank lines are skipped.
pub fn parse_spacy_jsonl(content: &str) -> Result<Vec<AnnotatedDoc>, AnnotationError> {
    let mut docs = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let raw: SpacyDoc = serde_json::from_str(trimmed)
            .map_err(|source| AnnotationError::Malformed { line: line_no, source })?;
        docs.push(to_annotated_doc(raw).map_err(|e| e.at_line(line_no))?);
    }
    Ok(docs)
}

fn to_annotated_doc(raw: SpacyDoc) -> Result<AnnotatedDoc, AnnotationError> {
    // byte_at[c] is the byte offset of char c; the final entry is text.len().
    let byte_at: Vec<usize> = raw
        .text
        .char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(raw.text.len()))
        .collect();
    let to_byte = |char_offset: usize| -> Result<usize, AnnotationError> {
        byte_at.get(char_offset).copied().ok_or_else(|| {
            AnnotationError::invalid(&raw.text, format!("offset {} past end of text", char_offset))
        })
    };

    let mut specs = Vec::with_capacity(raw.tokens.len());
    let mut token_at_char: HashMap<usize, usize> = HashMap::new();
    for (position, token) in raw.tokens.iter().enumerate() {
        if token.id != position {
            return Err(AnnotationError::invalid(
                &raw.text,
                format!("token id {} found at position {}", token.id, position),
            ));
        }
        let start = to_byte(token.start)?;
        let end = to_byte(token.end)?;
        if start > end {
            return Err(AnnotationError::invalid(
                &raw.text,
                format!("token {} ends before it starts", token.id),
            ));
        }
        token_at_char.insert(token.start, position);
        specs.push(TokenSpec {
            text: raw.text[start..end].to_string(),
            start,
            end,
            pos: token.pos.clone(),
            tag: token.tag.clone(),
            lemma: token.lemma.clone(),
            head: token.head,
        });
    }

    let mut sentence_starts = Vec::with_capacity(raw.sents.len());
    for sent in &raw.sents {
        match token_at_char.get(&sent.start) {
            Some(&token_index) => sentence_starts.push(token_index),
            None => {
                return Err(AnnotationError::invalid(
                    &raw.text,
                    format!("sentence start {} is not a token boundary", sent.start),
                ))
            }
        }
    }

    AnnotatedDoc::from_parts(raw.text, specs, &sentence_starts)
}
