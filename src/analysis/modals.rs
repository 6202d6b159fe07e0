use serde::Serialize;
use std::collections::BTreeSet;

use crate::config::{QuestionScope, TagSet};
use crate::types::annotation::{AnnotatedDoc, AnnotatedToken, Sentence};

/// A modal-tagged token together with the document it came from.
#[derive(Debug, Clone, Copy)]
pub struct ModalOccurrence<'a> {
    pub doc: &'a AnnotatedDoc,
    pub token: &'a AnnotatedToken,
}

impl<'a> ModalOccurrence<'a> {
    pub fn head(&self) -> &'a AnnotatedToken {
        self.doc.head_of(self.token)
    }

    /// Whether any syntactic child carries the negation lemma.
    pub fn is_negated(&self, negation_lemma: &str) -> bool {
        self.doc
            .children_of(self.token)
            .any(|child| child.lemma == negation_lemma)
    }

    pub fn sentence(&self) -> Option<Sentence<'a>> {
        self.doc.sentence_of(self.token.i)
    }

    /// Whether the span selected by `scope` ends with a `?` token.
    pub fn in_question(&self, scope: QuestionScope) -> bool {
        let last = match scope {
            QuestionScope::Line => self.doc.last_token(),
            QuestionScope::Sentence => self.sentence().and_then(|s| s.last_token()),
        };
        last.is_some_and(|token| token.text == "?")
    }
}

/// Every modal-tagged token across `docs`, in document then token order.
pub fn modal_occurrences<'a>(
    docs: &'a [AnnotatedDoc],
    tags: &'a TagSet,
) -> impl Iterator<Item = ModalOccurrence<'a>> + 'a {
    docs.iter().flat_map(move |doc| {
        doc.tokens()
            .iter()
            .filter(move |token| token.tag == tags.modal_tag)
            .map(move |token| ModalOccurrence { doc, token })
    })
}

/// The modal forms, lemmas and occurrence count of one speaker.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalInventory {
    pub surface_forms: BTreeSet<String>,
    pub lemmas: BTreeSet<String>,
    /// Every occurrence, not the number of distinct forms.
    pub count: usize,
}

pub fn extract_modals(docs: &[AnnotatedDoc], tags: &TagSet) -> ModalInventory {
    let mut inventory = ModalInventory::default();
    for occurrence in modal_occurrences(docs, tags) {
        inventory.surface_forms.insert(occurrence.token.text.clone());
        inventory.lemmas.insert(occurrence.token.lemma.clone());
        inventory.count += 1;
    }
    inventory
}
