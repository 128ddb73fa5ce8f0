//! Input validation predicates shared across the form model
//!
//! Every string field in the model is guarded by [`is_valid_text`]; question
//! type tags go through [`is_valid_kind_tag`]. Both are pure predicates with
//! no side effects; callers decide what to do with a `false`, which in this
//! crate is always a silent no-op.

use crate::kind::QuestionKind;

/// Returns true iff `text` is a non-empty string.
pub fn is_valid_text(text: &str) -> bool {
    !text.is_empty()
}

/// Returns true iff `tag` is one of the recognized question type tags.
///
/// Recognized tags: `text`, `select`, `single-select`, `multiple-select`
/// (plus the space-separated spellings of the last two).
pub fn is_valid_kind_tag(tag: &str) -> bool {
    tag.parse::<QuestionKind>().is_ok()
}
