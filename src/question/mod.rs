//! Question variants and the fields every variant carries
//!
//! [`QuestionBase`] holds the prompt, kind tag and required flag common to
//! all questions. [`FormQuestion`] is the closed set of realized variants;
//! a [`Form`](crate::Form) only ever holds values of this type, so "is this
//! a question?" is settled at compile time. [`QuestionHandle`] is the
//! clonable, identity-bearing handle forms and callers share.

mod select;
mod text;

pub use select::SelectQuestion;
pub use text::TextQuestion;

use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use tracing::trace;

use crate::kind::QuestionKind;
use crate::options::{OptionSet, SharedOptions};
use crate::validate::is_valid_text;

/// Prompt used when a question is constructed without a usable one
pub const DEFAULT_QUESTION: &str = "Untitled";

/// Fields common to every question variant
///
/// Mutators validate their input and leave the field unchanged when it does
/// not hold up, with no error and no panic. The model is meant for UI
/// callers that pre-validate, so malformed input is dropped rather than
/// surfaced.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBase {
    question: String,
    kind: Option<QuestionKind>,
    required: bool,
}

impl Default for QuestionBase {
    fn default() -> Self {
        Self {
            question: DEFAULT_QUESTION.to_string(),
            kind: None,
            required: false,
        }
    }
}

impl QuestionBase {
    pub(crate) fn new(question: impl Into<String>, kind: QuestionKind) -> Self {
        let question = question.into();
        Self {
            question: if is_valid_text(&question) {
                question
            } else {
                DEFAULT_QUESTION.to_string()
            },
            kind: Some(kind),
            required: false,
        }
    }

    /// Returns the prompt text
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Returns the kind tag, `None` if it was reset or never recognized
    pub fn kind(&self) -> Option<QuestionKind> {
        self.kind
    }

    /// Returns the required flag
    pub fn required(&self) -> bool {
        self.required
    }

    /// Replaces the prompt if the new one is non-empty and different
    pub fn set_question(&mut self, question: impl Into<String>) {
        let question = question.into();
        if is_valid_text(&question) && question != self.question {
            self.question = question;
        } else {
            trace!("dropping invalid or unchanged question prompt");
        }
    }

    /// Sets the kind
    pub fn set_kind(&mut self, kind: QuestionKind) {
        self.kind = Some(kind);
    }

    /// Sets the kind from a tag, dropping unrecognized tags
    pub fn set_kind_tag(&mut self, tag: &str) {
        match tag.parse::<QuestionKind>() {
            Ok(kind) => self.kind = Some(kind),
            Err(_) => trace!(%tag, "dropping unrecognized kind tag"),
        }
    }

    /// Sets the required flag
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Flips the required flag
    pub fn toggle_required(&mut self) {
        self.required = !self.required;
    }

    /// Restores the defaults: "Untitled", no kind, not required
    ///
    /// Variant-owned values are untouched.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn force_kind(&mut self, kind: Option<QuestionKind>) {
        self.kind = kind;
    }
}

/// Borrowed view of a question's current answer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer<'a> {
    /// Free-text answer (empty string when unanswered)
    Text(&'a str),
    /// Selected option labels, in selection order
    Selected(&'a [String]),
}

/// A single form question: one prompt with a kind, required flag and answer
#[derive(Debug, Clone, PartialEq)]
pub enum FormQuestion {
    Text(TextQuestion),
    Select(SelectQuestion),
}

impl FormQuestion {
    /// Returns the common fields
    pub fn base(&self) -> &QuestionBase {
        match self {
            FormQuestion::Text(q) => q.base(),
            FormQuestion::Select(q) => q.base(),
        }
    }

    /// Mutably returns the common fields
    pub fn base_mut(&mut self) -> &mut QuestionBase {
        match self {
            FormQuestion::Text(q) => q.base_mut(),
            FormQuestion::Select(q) => q.base_mut(),
        }
    }

    /// Returns the prompt text
    pub fn question(&self) -> &str {
        self.base().question()
    }

    /// Returns the kind tag
    pub fn kind(&self) -> Option<QuestionKind> {
        self.base().kind()
    }

    /// Returns the required flag
    pub fn required(&self) -> bool {
        self.base().required()
    }

    /// Returns the current answer
    pub fn answer(&self) -> Answer<'_> {
        match self {
            FormQuestion::Text(q) => Answer::Text(q.value()),
            FormQuestion::Select(q) => Answer::Selected(q.selected()),
        }
    }

    /// Replaces the prompt if the new one is non-empty and different
    pub fn set_question(&mut self, question: impl Into<String>) {
        self.base_mut().set_question(question);
    }

    /// Sets the kind from a tag, dropping unrecognized tags
    pub fn set_kind_tag(&mut self, tag: &str) {
        self.base_mut().set_kind_tag(tag);
    }

    /// Sets the required flag
    pub fn set_required(&mut self, required: bool) {
        self.base_mut().set_required(required);
    }

    /// Flips the required flag
    pub fn toggle_required(&mut self) {
        self.base_mut().toggle_required();
    }

    /// Restores the common fields to their defaults, keeping the answer
    pub fn reset(&mut self) {
        self.base_mut().reset();
    }

    /// Returns the text variant, if this is one
    pub fn as_text(&self) -> Option<&TextQuestion> {
        match self {
            FormQuestion::Text(q) => Some(q),
            FormQuestion::Select(_) => None,
        }
    }

    /// Mutably returns the text variant, if this is one
    pub fn as_text_mut(&mut self) -> Option<&mut TextQuestion> {
        match self {
            FormQuestion::Text(q) => Some(q),
            FormQuestion::Select(_) => None,
        }
    }

    /// Returns the select variant, if this is one
    pub fn as_select(&self) -> Option<&SelectQuestion> {
        match self {
            FormQuestion::Select(q) => Some(q),
            FormQuestion::Text(_) => None,
        }
    }

    /// Mutably returns the select variant, if this is one
    pub fn as_select_mut(&mut self) -> Option<&mut SelectQuestion> {
        match self {
            FormQuestion::Select(q) => Some(q),
            FormQuestion::Text(_) => None,
        }
    }
}

impl From<TextQuestion> for FormQuestion {
    fn from(question: TextQuestion) -> Self {
        FormQuestion::Text(question)
    }
}

impl From<SelectQuestion> for FormQuestion {
    fn from(question: SelectQuestion) -> Self {
        FormQuestion::Select(question)
    }
}

/// Clonable handle to a question
///
/// Cloning the handle aliases the same question: mutations made through any
/// clone are visible through the form holding it. Equality is identity
/// (two handles are equal iff they alias the same question), which is what
/// [`Form::remove_question`](crate::Form::remove_question) and
/// [`Form::index_of`](crate::Form::index_of) match on: a structurally
/// identical copy is a different question. Compare borrowed contents for
/// structural equality.
#[derive(Debug, Clone)]
pub struct QuestionHandle(Rc<RefCell<FormQuestion>>);

impl QuestionHandle {
    /// Wraps a question in a fresh handle
    pub fn new(question: impl Into<FormQuestion>) -> Self {
        Self(Rc::new(RefCell::new(question.into())))
    }

    /// Borrows the question
    pub fn borrow(&self) -> Ref<'_, FormQuestion> {
        self.0.borrow()
    }

    /// Mutably borrows the question
    pub fn borrow_mut(&self) -> RefMut<'_, FormQuestion> {
        self.0.borrow_mut()
    }

    /// Returns true if both handles alias the same question
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for QuestionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for QuestionHandle {}

impl From<FormQuestion> for QuestionHandle {
    fn from(question: FormQuestion) -> Self {
        Self::new(question)
    }
}

impl From<TextQuestion> for QuestionHandle {
    fn from(question: TextQuestion) -> Self {
        Self::new(FormQuestion::Text(question))
    }
}

impl From<SelectQuestion> for QuestionHandle {
    fn from(question: SelectQuestion) -> Self {
        Self::new(FormQuestion::Select(question))
    }
}

/// Wire shape of a question: the variant's own fields plus a `type` tag
///
/// `options` and `multiple` are only present for selects; `value` is a
/// string for text questions and a label list for selects.
#[derive(Serialize, Deserialize)]
struct QuestionRepr {
    #[serde(default)]
    question: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    multiple: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<OptionSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<AnswerRepr>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AnswerRepr {
    One(String),
    Many(Vec<String>),
}

impl From<&FormQuestion> for QuestionRepr {
    fn from(question: &FormQuestion) -> Self {
        let base = question.base();
        let kind = base.kind().map(|k| k.tag().to_string());
        match question {
            FormQuestion::Text(q) => Self {
                question: base.question().to_string(),
                kind,
                required: base.required(),
                multiple: None,
                options: None,
                value: Some(AnswerRepr::One(q.value().to_string())),
            },
            FormQuestion::Select(q) => Self {
                question: base.question().to_string(),
                kind,
                required: base.required(),
                multiple: Some(q.is_multiple()),
                options: Some(q.options().borrow().clone()),
                value: Some(AnswerRepr::Many(q.selected().to_vec())),
            },
        }
    }
}

impl From<QuestionRepr> for FormQuestion {
    fn from(repr: QuestionRepr) -> Self {
        // Invalid input degrades to defaults; reconstruction never errors.
        let kind = repr.kind.as_deref().and_then(|tag| tag.parse().ok());
        let is_select = repr.options.is_some()
            || repr.multiple.is_some()
            || kind == Some(QuestionKind::Select);

        if is_select {
            let options = SharedOptions::new(repr.options.unwrap_or_default());
            let mut question = SelectQuestion::with_options(
                repr.question,
                options,
                repr.multiple.unwrap_or(false),
            );
            question.base_mut().set_required(repr.required);
            question.base_mut().force_kind(kind);
            match repr.value {
                Some(AnswerRepr::Many(labels)) => question.set_values(labels),
                Some(AnswerRepr::One(label)) => question.set_value(label),
                None => {}
            }
            FormQuestion::Select(question)
        } else {
            let mut question = match repr.value {
                Some(AnswerRepr::One(value)) => TextQuestion::with_value(repr.question, value),
                _ => TextQuestion::new(repr.question),
            };
            question.base_mut().set_required(repr.required);
            question.base_mut().force_kind(kind);
            FormQuestion::Text(question)
        }
    }
}

impl Serialize for FormQuestion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        QuestionRepr::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FormQuestion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        QuestionRepr::deserialize(deserializer).map(FormQuestion::from)
    }
}
