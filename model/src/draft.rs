/// Uncommitted text typed into the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    value: String,
}

impl Draft {
    pub fn new() -> Self {
        Draft::default()
    }

    /// Replaces the draft verbatim; nothing is checked while typing.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Takes the draft for submission.
    ///
    /// Returns the trimmed text and clears the draft, or returns `None` and
    /// leaves the draft untouched when there is nothing but whitespace.
    pub fn submit(&mut self) -> Option<String> {
        let trimmed = self.value.trim();

        if trimmed.is_empty() {
            return None;
        }

        let text = trimmed.to_owned();
        self.value.clear();
        Some(text)
    }
}
