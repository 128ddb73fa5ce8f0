//! Form: a named, ordered collection of questions

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::question::{FormQuestion, QuestionHandle};
use crate::validate::is_valid_text;

/// Name used when a form is constructed without a usable one
pub const DEFAULT_FORM_NAME: &str = "New Form";

/// A named, ordered collection of questions
///
/// Insertion order is display order. The collection holds
/// [`QuestionHandle`]s, so a caller that keeps the handle returned by
/// [`add_question`](Self::add_question) can keep mutating the question and
/// the form sees every change. Find and remove match on handle identity:
/// structurally identical questions are distinct entries, and removing one
/// detaches exactly the question the caller holds.
#[derive(Debug, Clone)]
pub struct Form {
    name: String,
    questions: Vec<QuestionHandle>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new(DEFAULT_FORM_NAME)
    }
}

impl Form {
    /// Creates an empty form, falling back to "New Form" on an empty name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: if is_valid_text(&name) {
                name
            } else {
                trace!("falling back to the default form name");
                DEFAULT_FORM_NAME.to_string()
            },
            questions: Vec::new(),
        }
    }

    /// Creates a form holding the given questions, in order
    pub fn with_questions<I>(name: impl Into<String>, questions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<QuestionHandle>,
    {
        let mut form = Self::new(name);
        form.add_questions(questions);
        form
    }

    /// Returns the form name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a question and returns the stored handle
    ///
    /// Keep the handle to mutate the question later or to remove it by
    /// identity.
    pub fn add_question(&mut self, question: impl Into<QuestionHandle>) -> QuestionHandle {
        let handle = question.into();
        self.questions.push(handle.clone());
        handle
    }

    /// Appends each question, in order
    pub fn add_questions<I>(&mut self, questions: I)
    where
        I: IntoIterator,
        I::Item: Into<QuestionHandle>,
    {
        for question in questions {
            self.add_question(question);
        }
    }

    /// Removes the question aliased by the handle
    ///
    /// Returns true if it was present. The question itself is not mutated;
    /// it merely stops being referenced by this form.
    pub fn remove_question(&mut self, question: &QuestionHandle) -> bool {
        match self.index_of(question) {
            Some(index) => {
                self.questions.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes each given question, by identity
    pub fn remove_questions<'a, I>(&mut self, questions: I)
    where
        I: IntoIterator<Item = &'a QuestionHandle>,
    {
        for question in questions {
            self.remove_question(question);
        }
    }

    /// Returns the question at `index`; negative indices count from the end
    pub fn question_at(&self, index: isize) -> Option<&QuestionHandle> {
        let len = self.questions.len() as isize;
        let index = if index < 0 { index + len } else { index };
        if (0..len).contains(&index) {
            self.questions.get(index as usize)
        } else {
            None
        }
    }

    /// Returns the position of the question aliased by the handle
    pub fn index_of(&self, question: &QuestionHandle) -> Option<usize> {
        self.questions.iter().position(|q| q.ptr_eq(question))
    }

    /// Returns true if the handle's question is in the form
    pub fn contains(&self, question: &QuestionHandle) -> bool {
        self.index_of(question).is_some()
    }

    /// Returns the number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the form has no questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterates over the question handles in display order
    pub fn iter(&self) -> impl Iterator<Item = &QuestionHandle> {
        self.questions.iter()
    }

    /// Returns the question handles as a slice
    pub fn questions(&self) -> &[QuestionHandle] {
        &self.questions
    }
}

impl<'a> IntoIterator for &'a Form {
    type Item = &'a QuestionHandle;
    type IntoIter = std::slice::Iter<'a, QuestionHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// Structural equality: same name and pairwise structurally equal questions
///
/// Distinct from handle equality, which is identity. Two forms rebuilt from
/// the same snapshot compare equal even though their handles differ.
impl PartialEq for Form {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.questions.len() == other.questions.len()
            && self
                .questions
                .iter()
                .zip(&other.questions)
                .all(|(a, b)| *a.borrow() == *b.borrow())
    }
}

/// Wire shape of a form: `{name, questions: [...]}`
#[derive(Serialize, Deserialize)]
struct FormRepr {
    #[serde(default)]
    name: String,
    #[serde(default)]
    questions: Vec<FormQuestion>,
}

impl From<&Form> for FormRepr {
    fn from(form: &Form) -> Self {
        Self {
            name: form.name.clone(),
            questions: form.questions.iter().map(|q| q.borrow().clone()).collect(),
        }
    }
}

impl From<FormRepr> for Form {
    fn from(repr: FormRepr) -> Self {
        Self::with_questions(repr.name, repr.questions)
    }
}

impl Serialize for Form {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        FormRepr::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Form {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        FormRepr::deserialize(deserializer).map(Form::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{SelectQuestion, TextQuestion};
    use serde_json::json;

    #[test]
    fn empty_name_falls_back_to_default() {
        let form = Form::new("");
        assert_eq!(form.name(), "New Form");

        let form = Form::new("Signup");
        assert_eq!(form.name(), "Signup");
    }

    #[test]
    fn add_question_returns_the_stored_handle() {
        let mut form = Form::new("Signup");
        let handle = form.add_question(TextQuestion::new("Name?"));

        assert_eq!(form.len(), 1);
        assert!(form.contains(&handle));
        assert_eq!(form.index_of(&handle), Some(0));
    }

    #[test]
    fn add_questions_preserves_order() {
        let mut form = Form::new("Signup");
        form.add_questions([
            FormQuestion::from(TextQuestion::new("Name?")),
            FormQuestion::from(SelectQuestion::new("Color?", ["red", "blue"])),
        ]);

        assert_eq!(form.len(), 2);
        assert_eq!(form.question_at(0).unwrap().borrow().question(), "Name?");
        assert_eq!(form.question_at(1).unwrap().borrow().question(), "Color?");
    }

    #[test]
    fn remove_matches_identity_not_structure() {
        let mut form = Form::new("Signup");
        let first = form.add_question(TextQuestion::new("Name?"));
        let twin = form.add_question(TextQuestion::new("Name?"));

        assert!(form.remove_question(&twin));

        assert_eq!(form.len(), 1);
        assert!(form.contains(&first));
        assert!(!form.contains(&twin));
    }

    #[test]
    fn remove_questions_takes_many() {
        let mut form = Form::new("Signup");
        let first = form.add_question(TextQuestion::new("Name?"));
        let second = form.add_question(TextQuestion::new("Email?"));
        let third = form.add_question(TextQuestion::new("Age?"));

        form.remove_questions([&first, &third]);

        assert_eq!(form.len(), 1);
        assert!(form.contains(&second));
    }

    #[test]
    fn remove_absent_question_is_a_noop() {
        let mut form = Form::new("Signup");
        form.add_question(TextQuestion::new("Name?"));
        let never_added = QuestionHandle::from(TextQuestion::new("Name?"));

        assert!(!form.remove_question(&never_added));
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn index_of_never_added_is_none() {
        let form = Form::new("Signup");
        let handle = QuestionHandle::from(TextQuestion::new("Name?"));

        assert_eq!(form.index_of(&handle), None);
        assert!(!form.contains(&handle));
    }

    #[test]
    fn question_at_supports_negative_indices() {
        let mut form = Form::new("Signup");
        let first = form.add_question(TextQuestion::new("Name?"));
        let last = form.add_question(TextQuestion::new("Email?"));

        assert_eq!(form.question_at(0), Some(&first));
        assert_eq!(form.question_at(-1), Some(&last));
        assert_eq!(form.question_at(-2), Some(&first));
        assert_eq!(form.question_at(2), None);
        assert_eq!(form.question_at(-3), None);
    }

    #[test]
    fn mutation_through_a_retained_handle_is_visible() {
        let mut form = Form::new("Signup");
        let handle = form.add_question(TextQuestion::new("Name?"));

        handle.borrow_mut().set_required(true);

        assert!(form.question_at(0).unwrap().borrow().required());
    }

    #[test]
    fn serializes_as_name_and_questions() {
        let mut form = Form::new("Signup");
        form.add_question(TextQuestion::with_value("Name?", "Ada"));

        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Signup",
                "questions": [{
                    "question": "Name?",
                    "type": "text",
                    "required": false,
                    "value": "Ada",
                }],
            })
        );
    }

    #[test]
    fn serde_roundtrip_is_structurally_equal() {
        let mut form = Form::new("Signup");
        form.add_question(TextQuestion::with_value("Name?", "Ada"));
        let mut select = SelectQuestion::new("Color?", ["red", "blue"]);
        select.set_value("blue");
        form.add_question(select);

        let json = serde_json::to_string(&form).unwrap();
        let parsed: Form = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, form);
    }

    #[test]
    fn deserialized_empty_name_degrades_to_default() {
        let parsed: Form = serde_json::from_value(json!({
            "name": "",
            "questions": [],
        }))
        .unwrap();

        assert_eq!(parsed.name(), "New Form");
    }
}
