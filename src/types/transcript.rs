use serde::Serialize;
use std::fmt;

/// A speaker as named by the literal `NAME:` prefix of their lines.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Speaker(String);

impl Speaker {
    pub fn new(name: impl Into<String>) -> Self {
        Speaker(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// The literal line prefix, e.g. `"CLINTON:"`.
    pub fn prefix(&self) -> String {
        format!("{}:", self.0)
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Speaker {
    fn from(name: &str) -> Self {
        Speaker::new(name)
    }
}

/// A transcript line resolved to the speaker whose prefix it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub speaker: Speaker,
    /// The full line, prefix included. Annotations are keyed by this text.
    pub text: String,
}
