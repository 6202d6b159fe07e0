use std::ops::Range;

use crate::error::AnnotationError;

/// One token as returned by the annotation provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedToken {
    /// Position of the token in its document.
    pub i: usize,
    pub text: String,
    /// Byte offsets into the document text.
    pub start: usize,
    pub end: usize,
    /// Coarse part of speech, e.g. `VERB`, `PUNCT`.
    pub pos: String,
    /// Fine-grained tag, e.g. `MD` for modal auxiliaries.
    pub tag: String,
    pub lemma: String,
    /// Index of the syntactic head. The root points at itself.
    pub head: usize,
    pub children: Vec<usize>,
    pub is_alpha: bool,
}

/// Whether every character is alphabetic (and there is at least one).
pub fn is_alpha(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

/// Token fields before the document wires up indices and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpec {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub pos: String,
    pub tag: String,
    pub lemma: String,
    pub head: usize,
}

/// An annotated span of text: tokens plus a sentence partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedDoc {
    text: String,
    tokens: Vec<AnnotatedToken>,
    sentences: Vec<Range<usize>>,
}

impl AnnotatedDoc {
    /// Assemble a document, validating offsets, heads and sentence starts.
    ///
    /// `sentence_starts` are token indices; index 0 is implied. An empty
    /// list means the whole document is one sentence.
    pub fn from_parts(
        text: impl Into<String>,
        specs: Vec<TokenSpec>,
        sentence_starts: &[usize],
    ) -> Result<Self, AnnotationError> {
        let text = text.into();
        let n = specs.len();

        let mut tokens = Vec::with_capacity(n);
        for (i, spec) in specs.into_iter().enumerate() {
            if spec.start > spec.end
                || spec.end > text.len()
                || !text.is_char_boundary(spec.start)
                || !text.is_char_boundary(spec.end)
            {
                return Err(AnnotationError::invalid(
                    &text,
                    format!("token {} has invalid offsets {}..{}", i, spec.start, spec.end),
                ));
            }
            if spec.head >= n {
                return Err(AnnotationError::invalid(
                    &text,
                    format!("token {} has head {} out of range", i, spec.head),
                ));
            }
            tokens.push(AnnotatedToken {
                i,
                is_alpha: is_alpha(&spec.text),
                text: spec.text,
                start: spec.start,
                end: spec.end,
                pos: spec.pos,
                tag: spec.tag,
                lemma: spec.lemma,
                head: spec.head,
                children: Vec::new(),
            });
        }

        for i in 0..n {
            let head = tokens[i].head;
            if head != i {
                tokens[head].children.push(i);
            }
        }

        let mut starts: Vec<usize> = sentence_starts.iter().copied().filter(|&s| s != 0).collect();
        starts.sort_unstable();
        starts.dedup();
        if let Some(&bad) = starts.iter().find(|&&s| s >= n) {
            return Err(AnnotationError::invalid(
                &text,
                format!("sentence start {} out of range", bad),
            ));
        }

        let mut sentences = Vec::with_capacity(starts.len() + 1);
        if n > 0 {
            let mut begin = 0;
            for &s in &starts {
                sentences.push(begin..s);
                begin = s;
            }
            sentences.push(begin..n);
        }

        Ok(AnnotatedDoc { text, tokens, sentences })
    }

    pub fn builder(text: impl Into<String>) -> DocBuilder {
        DocBuilder::new(text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn head_of(&self, token: &AnnotatedToken) -> &AnnotatedToken {
        &self.tokens[token.head]
    }

    pub fn children_of<'a>(
        &'a self,
        token: &'a AnnotatedToken,
    ) -> impl Iterator<Item = &'a AnnotatedToken> + 'a {
        token.children.iter().map(move |&c| &self.tokens[c])
    }

    pub fn last_token(&self) -> Option<&AnnotatedToken> {
        self.tokens.last()
    }

    pub fn sentences(&self) -> impl Iterator<Item = Sentence<'_>> + '_ {
        self.sentences.iter().map(move |range| Sentence {
            doc: self,
            range: range.clone(),
        })
    }

    /// The sentence that contains token `i`.
    pub fn sentence_of(&self, i: usize) -> Option<Sentence<'_>> {
        self.sentences
            .iter()
            .find(|range| range.contains(&i))
            .map(|range| Sentence {
                doc: self,
                range: range.clone(),
            })
    }
}

/// A contiguous run of tokens forming one sentence of a document.
#[derive(Debug, Clone)]
pub struct Sentence<'a> {
    doc: &'a AnnotatedDoc,
    range: Range<usize>,
}

impl<'a> Sentence<'a> {
    pub fn tokens(&self) -> &'a [AnnotatedToken] {
        &self.doc.tokens[self.range.clone()]
    }

    pub fn last_token(&self) -> Option<&'a AnnotatedToken> {
        self.tokens().last()
    }

    /// From the first token's start to the last token's end, so trailing
    /// whitespace is never included.
    pub fn text(&self) -> &'a str {
        let tokens = self.tokens();
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => &self.doc.text[first.start..last.end],
            _ => "",
        }
    }
}

/// Builds an [`AnnotatedDoc`] by locating each token text in order.
///
/// Serves test doubles and fixtures where character offsets would be
/// tedious to write by hand.
#[derive(Debug)]
pub struct DocBuilder {
    text: String,
    cursor: usize,
    specs: Vec<TokenSpec>,
    sentence_starts: Vec<usize>,
    error: Option<String>,
}

impl DocBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        DocBuilder {
            text: text.into(),
            cursor: 0,
            specs: Vec::new(),
            sentence_starts: Vec::new(),
            error: None,
        }
    }

    /// Append a token; `head` is the index of its syntactic head.
    pub fn token(mut self, text: &str, pos: &str, tag: &str, lemma: &str, head: usize) -> Self {
        if self.error.is_some() {
            return self;
        }
        match self.text[self.cursor..].find(text) {
            Some(offset) => {
                let start = self.cursor + offset;
                let end = start + text.len();
                self.cursor = end;
                self.specs.push(TokenSpec {
                    text: text.to_string(),
                    start,
                    end,
                    pos: pos.to_string(),
                    tag: tag.to_string(),
                    lemma: lemma.to_string(),
                    head,
                });
            }
            None => {
                self.error = Some(format!(
                    "token {:?} not found after byte {}",
                    text, self.cursor
                ));
            }
        }
        self
    }

    /// The next token starts a new sentence.
    pub fn sentence_break(mut self) -> Self {
        self.sentence_starts.push(self.specs.len());
        self
    }

    pub fn build(self) -> Result<AnnotatedDoc, AnnotationError> {
        if let Some(reason) = self.error {
            return Err(AnnotationError::invalid(&self.text, reason));
        }
        AnnotatedDoc::from_parts(self.text, self.specs, &self.sentence_starts)
    }
}
