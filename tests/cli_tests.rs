mod helpers;

use helpers::{debate_annotations, debate_lines, modalizer, setup_transcript, spacy_doc};
use predicates::prelude::*;

#[test]
fn text_report_lists_only_speakers_with_modals() {
    let (tmp, transcript) = setup_transcript(&debate_lines(), Some(&debate_annotations()));
    modalizer(&tmp)
        .arg(&transcript)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CLINTON")
                .and(predicate::str::contains("TRUMP"))
                .and(predicate::str::contains("RADDATZ"))
                .and(predicate::str::contains("COOPER").not())
                .and(predicate::str::contains("(applause)").not())
                .and(predicate::str::contains("Number of modals:   1")),
        );
}

#[test]
fn examples_and_categories_sections() {
    let (tmp, transcript) = setup_transcript(&debate_lines(), Some(&debate_annotations()));
    modalizer(&tmp)
        .arg(&transcript)
        .args(["-e", "-c", "--no-color"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Examples:")
                .and(predicate::str::contains("We must win."))
                .and(predicate::str::contains("I'll be careful."))
                .and(predicate::str::contains("Modal classification:"))
                .and(predicate::str::contains("Obligation\t    1\tThis is 100.00% of all modals.")),
        );
}

#[test]
fn json_output_parses() {
    let (tmp, transcript) = setup_transcript(&debate_lines(), Some(&debate_annotations()));
    let output = modalizer(&tmp)
        .arg(&transcript)
        .args(["--format", "json", "-c"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let speakers = value["speakers"].as_array().unwrap();
    let names: Vec<&str> = speakers.iter().map(|s| s["speaker"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["CLINTON", "RADDATZ", "TRUMP"]);
    assert_eq!(speakers[0]["word_count"], 5);
    assert_eq!(speakers[0]["classification"][0]["category"], "Ability");
    assert_eq!(speakers[0]["classification"][0]["count"], 1);
    assert_eq!(speakers[1]["classification"][1]["category"], "Prediction");
    assert_eq!(speakers[1]["classification"][1]["count"], 0);
}

#[test]
fn report_is_saved_to_output_file() {
    let (tmp, transcript) = setup_transcript(&debate_lines(), Some(&debate_annotations()));
    let saved = tmp.path().join("report.json");
    modalizer(&tmp)
        .arg(&transcript)
        .arg("--no-color")
        .arg("-o")
        .arg(&saved)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&saved).unwrap()).unwrap();
    assert_eq!(value["speakers"].as_array().unwrap().len(), 3);
}

#[test]
fn explicit_annotation_path() {
    let (tmp, transcript) = setup_transcript(&["COOPER: Thank you."], None);
    let annotations = tmp.path().join("custom.jsonl");
    std::fs::write(
        &annotations,
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
    )
    .unwrap();
    modalizer(&tmp)
        .arg(&transcript)
        .arg("-a")
        .arg(&annotations)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("COOPER").not());
}

#[test]
fn missing_annotation_fails() {
    let mut lines = debate_lines();
    lines.push("COOPER: Next question.");
    let (tmp, transcript) = setup_transcript(&lines, Some(&debate_annotations()));
    modalizer(&tmp)
        .arg(&transcript)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no annotation available"));
}

#[test]
fn missing_annotation_file_fails() {
    let (tmp, transcript) = setup_transcript(&debate_lines(), None);
    modalizer(&tmp)
        .arg(&transcript)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read annotations"));
}

#[test]
fn missing_transcript_fails() {
    let (tmp, _) = setup_transcript(&[], None);
    modalizer(&tmp)
        .arg("nope.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read transcript"));
}

#[test]
fn invalid_config_fails() {
    let (tmp, transcript) = setup_transcript(&debate_lines(), Some(&debate_annotations()));
    std::fs::write(tmp.path().join("modalizer.toml"), "[report]\ncolour = false\n").unwrap();
    modalizer(&tmp)
        .arg(&transcript)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn config_file_disables_color() {
    let (tmp, transcript) = setup_transcript(&debate_lines(), Some(&debate_annotations()));
    std::fs::write(tmp.path().join("modalizer.toml"), "[report]\ncolor = false\n").unwrap();
    modalizer(&tmp)
        .arg(&transcript)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn piped_output_is_never_colored() {
    let (tmp, transcript) = setup_transcript(&debate_lines(), Some(&debate_annotations()));
    modalizer(&tmp)
        .arg(&transcript)
        .args(["-e", "-c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn execution_time_goes_to_stderr() {
    let (tmp, transcript) = setup_transcript(&debate_lines(), Some(&debate_annotations()));
    modalizer(&tmp)
        .arg(&transcript)
        .args(["--format", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Execution time:"))
        .stdout(predicate::str::contains("Execution time:").not());
}
