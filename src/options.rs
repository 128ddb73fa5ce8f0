//! Selectable option labels for select questions
//!
//! [`OptionSet`] owns the labels; [`SharedOptions`] is the handle select
//! questions hold. The handle aliases on clone, so several questions can
//! offer one option list and see each other's edits.

use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use tracing::trace;

use crate::validate::is_valid_text;

/// Ordered set of unique, non-empty option labels
///
/// Insertion order is preserved. Empty labels and duplicates are dropped
/// silently on add.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OptionSet(Vec<String>);

impl<'de> Deserialize<'de> for OptionSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Snapshots written by this crate are already clean, but foreign
        // input goes through the add rules like any other label source.
        Vec::<String>::deserialize(deserializer).map(Self::from_labels)
    }
}

impl OptionSet {
    /// Creates an empty option set
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an option set from labels, applying the add rules
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        set.add_options(labels);
        set
    }

    /// Adds a label unless it is empty or already present
    ///
    /// Returns true if the label was appended.
    pub fn add_option(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if !is_valid_text(&label) {
            trace!("dropping empty option label");
            return false;
        }
        if self.0.contains(&label) {
            trace!(%label, "dropping duplicate option label");
            return false;
        }
        self.0.push(label);
        true
    }

    /// Adds each label in order, applying the [`add_option`](Self::add_option) rules per label
    pub fn add_options<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            self.add_option(label);
        }
    }

    /// Removes every occurrence of the label
    ///
    /// Returns true if anything was removed.
    pub fn remove_option(&mut self, label: &str) -> bool {
        let len_before = self.0.len();
        self.0.retain(|l| l != label);
        self.0.len() != len_before
    }

    /// Removes every occurrence of each given label
    pub fn remove_options<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            self.remove_option(label.as_ref());
        }
    }

    /// Returns the stored label equal to `label`, or `None`
    pub fn get_option(&self, label: &str) -> Option<&str> {
        self.0.iter().find(|l| *l == label).map(String::as_str)
    }

    /// Returns true if the label is present
    pub fn has_option(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    /// Empties the set
    pub fn clear_options(&mut self) {
        self.0.clear();
    }

    /// Returns true if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of labels
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the labels in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the labels as a slice
    pub fn labels(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Shared handle to an [`OptionSet`]
///
/// Cloning the handle aliases the same underlying set rather than copying
/// it: an edit made through any clone is visible to every holder. Equality
/// is structural (two handles with the same labels compare equal); use
/// [`ptr_eq`](Self::ptr_eq) to ask whether two handles alias the same set.
#[derive(Debug, Clone, Default)]
pub struct SharedOptions(Rc<RefCell<OptionSet>>);

impl SharedOptions {
    /// Wraps an option set in a fresh handle
    pub fn new(options: OptionSet) -> Self {
        Self(Rc::new(RefCell::new(options)))
    }

    /// Creates a fresh handle from labels, applying the add rules
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(OptionSet::from_labels(labels))
    }

    /// Borrows the underlying set
    pub fn borrow(&self) -> Ref<'_, OptionSet> {
        self.0.borrow()
    }

    /// Mutably borrows the underlying set
    pub fn borrow_mut(&self) -> RefMut<'_, OptionSet> {
        self.0.borrow_mut()
    }

    /// Returns true if both handles alias the same underlying set
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<OptionSet> for SharedOptions {
    fn from(options: OptionSet) -> Self {
        Self::new(options)
    }
}

impl PartialEq for SharedOptions {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        *self.0.borrow() == *other.0.borrow()
    }
}

impl Serialize for SharedOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.borrow().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SharedOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Deserialization always produces an exclusively-owned handle;
        // sharing is not representable in the snapshot.
        OptionSet::deserialize(deserializer).map(Self::new)
    }
}
