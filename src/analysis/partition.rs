use std::collections::{BTreeMap, BTreeSet};

use crate::types::transcript::{Speaker, TranscriptLine};

/// Speaker names found in the transcript.
///
/// The name is the text before the first space, with trailing colons
/// stripped. Blank lines contribute nothing; a line such as `": hi"` names
/// the empty speaker.
pub fn speaker_names<S: AsRef<str>>(lines: &[S]) -> BTreeSet<Speaker> {
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| line.split(' ').next())
        .map(|token| Speaker::from(token.trim_end_matches(':')))
        .collect()
}

/// The known speaker whose `NAME:` prefix starts `line`. When several
/// prefixes match, the longest name wins.
pub fn resolve_speaker<'a>(line: &str, names: &'a BTreeSet<Speaker>) -> Option<&'a Speaker> {
    names
        .iter()
        .filter(|speaker| {
            line.strip_prefix(speaker.name())
                .is_some_and(|rest| rest.starts_with(':'))
        })
        .max_by_key(|speaker| speaker.name().len())
}

/// Group lines by speaker, in ascending name order.
///
/// Every known name gets an entry, even with no lines. Lines without a
/// known prefix are dropped.
pub fn partition_lines<S: AsRef<str>>(
    lines: &[S],
    names: &BTreeSet<Speaker>,
) -> BTreeMap<Speaker, Vec<TranscriptLine>> {
    let mut groups: BTreeMap<Speaker, Vec<TranscriptLine>> =
        names.iter().map(|name| (name.clone(), Vec::new())).collect();

    for line in lines {
        let text = line.as_ref();
        if let Some(speaker) = resolve_speaker(text, names) {
            if let Some(group) = groups.get_mut(speaker) {
                group.push(TranscriptLine {
                    speaker: speaker.clone(),
                    text: text.to_string(),
                });
            }
        }
    }
    groups
}
