//! Cheap text heuristics attached to every log record.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```|class |function |=>|\{.*\}").expect("static code pattern must compile")
});

static CITATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\d+\]|\u{3010}|\u{3011}").expect("static citation pattern must compile")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observations {
    pub contains_code: bool,
    pub has_citations: bool,
    pub ui_broke: bool,
}

impl Observations {
    pub fn detect(text: &str) -> Self {
        Self {
            contains_code: CODE_RE.is_match(text),
            has_citations: CITATION_RE.is_match(text),
            ui_broke: false,
        }
    }
}
