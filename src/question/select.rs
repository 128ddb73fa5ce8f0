//! Select question variant (single- or multiple-choice)

use tracing::trace;

use super::QuestionBase;
use crate::kind::QuestionKind;
use crate::options::SharedOptions;

/// A question answered by picking from a fixed option list
///
/// `multiple` decides whether the selection may hold more than one label.
/// Every label entering the selection must be a member of `options` at that
/// moment; labels that are not are dropped silently. Membership is not
/// re-checked when the option list changes later, so removing an option
/// leaves an already-made selection intact.
///
/// The option list is held through a [`SharedOptions`] handle: pass the same
/// handle to several questions and they offer one shared list, each seeing
/// the others' edits.
#[derive(Debug, Clone)]
pub struct SelectQuestion {
    base: QuestionBase,
    options: SharedOptions,
    multiple: bool,
    value: Vec<String>,
}

impl SelectQuestion {
    /// Creates a single-choice question with its own option list
    pub fn new<I, S>(question: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_options(question, SharedOptions::from_labels(labels), false)
    }

    /// Creates a multiple-choice question with its own option list
    pub fn multiple<I, S>(question: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_options(question, SharedOptions::from_labels(labels), true)
    }

    /// Creates a question over an existing option handle
    ///
    /// The handle is aliased, not copied: edits through any holder are
    /// visible here.
    pub fn with_options(
        question: impl Into<String>,
        options: SharedOptions,
        multiple: bool,
    ) -> Self {
        Self {
            base: QuestionBase::new(question, QuestionKind::Select),
            options,
            multiple,
            value: Vec::new(),
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

    /// Returns true if more than one label may be selected
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Returns the option handle
    pub fn options(&self) -> &SharedOptions {
        &self.options
    }

    /// Adds a label to the option list
    pub fn add_option(&mut self, label: impl Into<String>) -> bool {
        self.options.borrow_mut().add_option(label)
    }

    /// Removes a label from the option list
    ///
    /// An already-selected occurrence of the label stays selected.
    pub fn remove_option(&mut self, label: &str) -> bool {
        self.options.borrow_mut().remove_option(label)
    }

    /// Returns the selected labels in selection order
    pub fn selected(&self) -> &[String] {
        &self.value
    }

    /// Selects a label that is currently an option
    ///
    /// With `multiple`, the label is appended to the selection; otherwise it
    /// replaces the selection outright (radio semantics). Labels not in the
    /// option list are dropped silently.
    pub fn set_value(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.options.borrow().has_option(&label) {
            trace!(%label, "dropping selection not in the option list");
            return;
        }
        if self.multiple {
            self.value.push(label);
        } else {
            self.value = vec![label];
        }
    }

    /// Selects each candidate label in order, applying the
    /// [`set_value`](Self::set_value) rules per label
    ///
    /// Duplicates are not collapsed; a single-choice question ends up with
    /// the last accepted label only.
    pub fn set_values<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            self.set_value(label);
        }
    }

    /// Removes every occurrence of the label from the selection
    pub fn remove_value(&mut self, label: &str) {
        self.value.retain(|l| l != label);
    }

    /// Removes every occurrence of each given label from the selection
    pub fn remove_values<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            self.remove_value(label.as_ref());
        }
    }

    /// Empties the selection
    pub fn clear_values(&mut self) {
        self.value.clear();
    }
}

impl PartialEq for SelectQuestion {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.multiple == other.multiple
            && self.value == other.value
            && self.options == other.options
    }
}
