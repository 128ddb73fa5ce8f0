//! Question type tags
//!
//! The model realizes exactly two question shapes: free text and select.
//! The historical `single-select` / `multiple-select` tags are accepted as
//! spellings of `select`: whether a select takes one answer or many is the
//! `multiple` flag on [`SelectQuestion`](crate::SelectQuestion), not a
//! separate kind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("Unrecognized question kind: '{0}'")]
pub struct KindParseError(pub String);

/// The kind of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free-text answer
    #[default]
    Text,
    /// Answer picked from a fixed option list
    Select,
}

impl QuestionKind {
    /// Returns all realized kinds
    pub fn all() -> &'static [QuestionKind] {
        &[QuestionKind::Text, QuestionKind::Select]
    }

    /// Returns the canonical tag for this kind
    pub fn tag(&self) -> &'static str {
        match self {
            QuestionKind::Text => "text",
            QuestionKind::Select => "select",
        }
    }

    /// Returns true if this is the select kind
    pub fn is_select(&self) -> bool {
        matches!(self, QuestionKind::Select)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for QuestionKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(QuestionKind::Text),
            "select" | "single-select" | "multiple-select" | "single select"
            | "multiple select" => Ok(QuestionKind::Select),
            _ => Err(KindParseError(s.to_string())),
        }
    }
}
