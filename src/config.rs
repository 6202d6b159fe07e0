use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "modalizer.toml";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub tags: TagSet,
    pub classification: ClassificationConfig,
    pub annotations: AnnotationConfig,
    pub report: ReportConfig,
}

/// Tag values the annotation provider uses for the categories we care about.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TagSet {
    /// Fine-grained tag marking modal auxiliaries.
    pub modal_tag: String,
    pub punct_pos: String,
    pub verb_pos: String,
    pub negation_lemma: String,
}

impl Default for TagSet {
    fn default() -> Self {
        TagSet {
            modal_tag: "MD".to_string(),
            punct_pos: "PUNCT".to_string(),
            verb_pos: "VERB".to_string(),
            negation_lemma: "not".to_string(),
        }
    }
}

/// Which span must end in `?` for the Permission rule.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QuestionScope {
    /// The whole annotated line.
    #[default]
    Line,
    /// The sentence the modal appears in.
    Sentence,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ClassificationConfig {
    pub question_scope: QuestionScope,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AnnotationConfig {
    /// Appended to the transcript path to find its annotations.
    pub suffix: String,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        AnnotationConfig {
            suffix: ".spacy.jsonl".to_string(),
        }
    }
}

impl AnnotationConfig {
    pub fn path_for(&self, transcript: &Path) -> PathBuf {
        let mut name = transcript.as_os_str().to_os_string();
        name.push(&self.suffix);
        PathBuf::from(name)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig { color: true }
    }
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(file_path).map_err(|source| ConfigError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;
    toml::from_str::<Config>(&contents).map_err(|source| ConfigError::Parse {
        path: file_path.to_path_buf(),
        source,
    })
}

/// An explicit path must exist; otherwise fall back to `./modalizer.toml`
/// when present, then to the defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_config_from_file(path);
    }
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.is_file() {
        return load_config_from_file(default_path);
    }
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_penn_and_universal_tags() {
        let config = Config::default();
        assert_eq!(config.tags.modal_tag, "MD");
        assert_eq!(config.tags.punct_pos, "PUNCT");
        assert_eq!(config.tags.verb_pos, "VERB");
        assert_eq!(config.tags.negation_lemma, "not");
        assert_eq!(config.classification.question_scope, QuestionScope::Line);
        assert!(config.report.color);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config("[classification]\nquestion_scope = \"sentence\"\n");
        let config = load_config_from_file(file.path()).unwrap();
        assert_eq!(config.classification.question_scope, QuestionScope::Sentence);
        assert_eq!(config.tags, TagSet::default());
        assert_eq!(config.annotations.suffix, ".spacy.jsonl");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_config("[tags]\nmodal = \"MD\"\n");
        let err = load_config_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = resolve_config(Some(Path::new("/nonexistent/modalizer.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn annotation_path_appends_suffix() {
        let config = AnnotationConfig::default();
        assert_eq!(
            config.path_for(Path::new("debates/town_hall.txt")),
            PathBuf::from("debates/town_hall.txt.spacy.jsonl")
        );
    }
}
