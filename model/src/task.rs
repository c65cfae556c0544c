use derive_more::{Display, From};

/// A single to-do item. Only its text is stored; two tasks with the same
/// text are told apart by their position in a [`TaskSequence`].
///
/// [`TaskSequence`]: crate::TaskSequence
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub struct Task(String);

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Task(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Task {
    fn from(text: &str) -> Self {
        Task(text.to_owned())
    }
}

impl AsRef<str> for Task {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
