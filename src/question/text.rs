//! Free-text question variant

use tracing::trace;

use super::QuestionBase;
use crate::kind::QuestionKind;
use crate::validate::is_valid_text;

/// A question answered with free text
///
/// The answer defaults to the empty string. [`set_value`](Self::set_value)
/// only accepts non-empty text; [`clear_value`](Self::clear_value) is the
/// one way to legitimately empty the answer again. An initial value passed
/// to [`with_value`](Self::with_value) is stored as given, without the
/// non-empty check: construction is lenient, explicit sets are strict.
#[derive(Debug, Clone, PartialEq)]
pub struct TextQuestion {
    base: QuestionBase,
    value: String,
}

impl TextQuestion {
    /// Creates a text question with an empty answer
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            base: QuestionBase::new(question, QuestionKind::Text),
            value: String::new(),
        }
    }

    /// Creates a text question with an initial answer, stored unvalidated
    pub fn with_value(question: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            base: QuestionBase::new(question, QuestionKind::Text),
            value: value.into(),
        }
    }

    /// Returns the common fields
    pub fn base(&self) -> &QuestionBase {
        &self.base
    }

    /// Mutably returns the common fields
    pub fn base_mut(&mut self) -> &mut QuestionBase {
        &mut self.base
    }

    /// Returns the prompt text
    pub fn question(&self) -> &str {
        self.base.question()
    }

    /// Returns the required flag
    pub fn required(&self) -> bool {
        self.base.required()
    }

    /// Returns the current answer
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the answer if the new one is non-empty
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if is_valid_text(&value) {
            self.value = value;
        } else {
            trace!("dropping empty text answer");
        }
    }

    /// Empties the answer unconditionally
    pub fn clear_value(&mut self) {
        self.value.clear();
    }
}
