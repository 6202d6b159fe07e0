use crate::config::TagSet;
use crate::types::annotation::AnnotatedDoc;
use crate::types::transcript::Speaker;

/// Count the words a speaker uttered.
///
/// Punctuation tokens are skipped, as is any token spelling the speaker's
/// own name (the line prefix).
pub fn count_words(speaker: &Speaker, docs: &[AnnotatedDoc], tags: &TagSet) -> usize {
    docs.iter()
        .flat_map(|doc| doc.tokens())
        .filter(|token| token.pos != tags.punct_pos && token.text != speaker.name())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raddatz() -> AnnotatedDoc {
        AnnotatedDoc::builder("RADDATZ: I'll be careful.")
            .token("RADDATZ", "PROPN", "NNP", "RADDATZ", 0)
            .token(":", "PUNCT", ":", ":", 0)
            .token("I", "PRON", "PRP", "I", 4)
            .token("'ll", "AUX", "MD", "will", 4)
            .token("be", "AUX", "VB", "be", 4)
            .token("careful", "ADJ", "JJ", "careful", 4)
            .token(".", "PUNCT", ".", ".", 4)
            .build()
            .unwrap()
    }

    #[test]
    fn skips_punctuation_and_own_name() {
        let n = count_words(&Speaker::from("RADDATZ"), &[raddatz()], &TagSet::default());
        assert_eq!(n, 4);
    }

    #[test]
    fn other_names_still_count() {
        let n = count_words(&Speaker::from("COOPER"), &[raddatz()], &TagSet::default());
        assert_eq!(n, 5);
    }

    #[test]
    fn sums_across_lines() {
        let docs = vec![raddatz(), raddatz()];
        let n = count_words(&Speaker::from("RADDATZ"), &docs, &TagSet::default());
        assert_eq!(n, 8);
    }

    #[test]
    fn no_lines_no_words() {
        assert_eq!(count_words(&Speaker::from("X"), &[], &TagSet::default()), 0);
    }
}
