use std::collections::{BTreeMap, BTreeSet};

use crate::config::TagSet;
use crate::types::annotation::{AnnotatedDoc, AnnotatedToken};
use crate::types::transcript::Speaker;

/// One example sentence per lemma. Lemmas with no usable sentence are left
/// out of the map.
pub fn locate_examples(
    speaker: &Speaker,
    lemmas: &BTreeSet<String>,
    docs: &[AnnotatedDoc],
    tags: &TagSet,
) -> BTreeMap<String, String> {
    lemmas
        .iter()
        .filter_map(|lemma| {
            locate_example(speaker, lemma, docs, tags).map(|example| (lemma.clone(), example))
        })
        .collect()
}

/// The first sentence, in line then sentence order, holding a modal that
/// stands for `lemma`. The speaker prefix is removed from the result.
pub fn locate_example(
    speaker: &Speaker,
    lemma: &str,
    docs: &[AnnotatedDoc],
    tags: &TagSet,
) -> Option<String> {
    let prefix = speaker.prefix();
    docs.iter()
        .flat_map(|doc| doc.sentences())
        .find(|sentence| {
            sentence
                .tokens()
                .iter()
                .any(|token| stands_for(token, lemma, tags))
        })
        .map(|sentence| {
            let text = sentence.text();
            text.strip_prefix(prefix.as_str())
                .unwrap_or(text)
                .trim()
                .to_string()
        })
}

/// A modal matches by its literal text, or by lemma when it is not purely
/// alphabetic. The second path admits contractions ("'ll" for "will")
/// without letting alphabetic lemma collisions through.
fn stands_for(token: &AnnotatedToken, lemma: &str, tags: &TagSet) -> bool {
    token.tag == tags.modal_tag
        && (token.text == lemma || (token.lemma == lemma && !token.is_alpha))
}
