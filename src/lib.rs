//! Formkit - an in-memory form-builder domain model
//!
//! A [`Form`] is a named, ordered collection of question variants: free
//! text ([`TextQuestion`]) and single/multiple choice
//! ([`SelectQuestion`]), each carrying validation rules and a current
//! answer. The model is synchronous and mutation-based, built for UI
//! layers that assemble forms dynamically: invalid mutator input is
//! dropped silently instead of erroring, and questions and option lists
//! are held through clonable handles so edits stay visible wherever a
//! handle is retained.

pub mod form;
pub mod kind;
pub mod options;
pub mod question;
pub mod validate;

pub use form::{Form, DEFAULT_FORM_NAME};
pub use kind::{KindParseError, QuestionKind};
pub use options::{OptionSet, SharedOptions};
pub use question::{
    Answer, FormQuestion, QuestionBase, QuestionHandle, SelectQuestion, TextQuestion,
    DEFAULT_QUESTION,
};
