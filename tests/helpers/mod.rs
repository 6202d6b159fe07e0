#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// (text, pos, tag, lemma, head)
pub type Tok<'a> = (&'a str, &'a str, &'a str, &'a str, usize);

/// Render one line as a spaCy `Doc.to_json()` record, locating each token
/// in order and reporting character offsets the way spaCy does.
pub fn spacy_doc(text: &str, tokens: &[Tok<'_>]) -> String {
    let mut cursor = 0;
    let mut rendered = Vec::new();
    for (id, (word, pos, tag, lemma, head)) in tokens.iter().enumerate() {
        let offset = text[cursor..]
            .find(word)
            .unwrap_or_else(|| panic!("{word:?} not found in {text:?}"));
        let start_byte = cursor + offset;
        let end_byte = start_byte + word.len();
        cursor = end_byte;
        rendered.push(json!({
            "id": id,
            "start": text[..start_byte].chars().count(),
            "end": text[..end_byte].chars().count(),
            "pos": pos,
            "tag": tag,
            "lemma": lemma,
            "head": head,
        }));
    }
    let doc: Value = json!({
        "text": text,
        "sents": [{ "start": 0, "end": text.chars().count() }],
        "tokens": rendered,
    });
    doc.to_string()
}

pub fn debate_lines() -> Vec<&'static str> {
    vec![
        "CLINTON: You can look at it.",
        "COOPER: Thank you.",
        "TRUMP: We must win. American jobs.",
        "RADDATZ: I'll be careful.",
        "(applause)",
    ]
}

pub fn debate_annotations() -> Vec<String> {
    vec![
        spacy_doc(
            "CLINTON: You can look at it.",
            &[
                ("CLINTON", "PROPN", "NNP", "CLINTON", 4),
                (":", "PUNCT", ":", ":", 4),
                ("You", "PRON", "PRP", "you", 4),
                ("can", "AUX", "MD", "can", 4),
                ("look", "VERB", "VB", "look", 4),
                ("at", "ADP", "IN", "at", 4),
                ("it", "PRON", "PRP", "it", 5),
                (".", "PUNCT", ".", ".", 4),
            ],
        ),
        spacy_doc(
            "COOPER: Thank you.",
            &[
                ("COOPER", "PROPN", "NNP", "COOPER", 2),
                (":", "PUNCT", ":", ":", 2),
                ("Thank", "VERB", "VBP", "thank", 2),
                ("you", "PRON", "PRP", "you", 2),
                (".", "PUNCT", ".", ".", 2),
            ],
        ),
        spacy_doc(
            "TRUMP: We must win. American jobs.",
            &[
                ("TRUMP", "PROPN", "NNP", "TRUMP", 4),
                (":", "PUNCT", ":", ":", 4),
                ("We", "PRON", "PRP", "we", 4),
                ("must", "AUX", "MD", "must", 4),
                ("win", "VERB", "VB", "win", 4),
                (".", "PUNCT", ".", ".", 4),
                ("American", "ADJ", "JJ", "american", 7),
                ("jobs", "NOUN", "NNS", "job", 7),
                (".", "PUNCT", ".", ".", 7),
            ],
        ),
        spacy_doc(
            "RADDATZ: I'll be careful.",
            &[
                ("RADDATZ", "PROPN", "NNP", "RADDATZ", 4),
                (":", "PUNCT", ":", ":", 4),
                ("I", "PRON", "PRP", "I", 4),
                ("'ll", "AUX", "MD", "will", 4),
                ("be", "AUX", "VB", "be", 4),
                ("careful", "ADJ", "JJ", "careful", 4),
                (".", "PUNCT", ".", ".", 4),
            ],
        ),
    ]
}

/// A temp dir holding `transcript.txt` and, when given, its default
/// annotation file.
pub fn setup_transcript(lines: &[&str], annotations: Option<&[String]>) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let transcript = tmp.path().join("transcript.txt");
    std::fs::write(&transcript, lines.join("\n")).unwrap();
    if let Some(docs) = annotations {
        let path = tmp.path().join("transcript.txt.spacy.jsonl");
        std::fs::write(path, docs.join("\n")).unwrap();
    }
    (tmp, transcript)
}

/// The binary, run from inside `tmp` so no stray config file is picked up.
#[allow(deprecated)]
pub fn modalizer(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("modalizer").unwrap();
    cmd.current_dir(tmp.path());
    cmd.env_remove("RUST_LOG");
    cmd
}
