pub mod spacy_json;
pub mod transcript;

pub use spacy_json::{parse_spacy_doc, parse_spacy_jsonl};
pub use transcript::{read_transcript, split_lines};
