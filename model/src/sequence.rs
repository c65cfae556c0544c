use std::rc::Rc;
use std::slice;

use crate::Task;

/// Tasks every fresh page starts with, in display order.
pub const SEED: [&str; 3] = [
    "Call doctor",
    "Meet with lawyer",
    "Buy groceries",
];

/// Immutable view of a [`TaskSequence`] handed to renderers.
pub type Snapshot = Rc<[Task]>;

/// Ordered, append-only list of tasks. Insertion order is display order and
/// duplicates are allowed. Nothing ever removes or edits an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSequence {
    tasks: Vec<Task>,
}

impl TaskSequence {
    pub fn new() -> Self {
        TaskSequence::default()
    }

    pub fn seeded() -> Self {
        TaskSequence {
            tasks: SEED.iter().copied().map(Task::from).collect(),
        }
    }

    /// Appends `candidate` to the end of the sequence. An empty candidate is
    /// ignored; anything else, whitespace included, is taken as given.
    ///
    /// Returns whether the sequence grew.
    pub fn append(&mut self, candidate: impl Into<String>) -> bool {
        let candidate = candidate.into();

        if candidate.is_empty() {
            return false;
        }

        self.tasks.push(Task::new(candidate));
        true
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn snapshot(&self) -> Snapshot {
        Rc::from(self.as_slice())
    }
}

impl<'a> IntoIterator for &'a TaskSequence {
    type Item = &'a Task;
    type IntoIter = slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn texts(sequence: &TaskSequence) -> Vec<&str> {
        sequence.iter().map(Task::text).collect()
    }

    #[rstest]
    fn seeded_holds_the_three_examples_in_order() {
        let sequence = TaskSequence::seeded();
        assert_eq!(texts(&sequence), ["Call doctor", "Meet with lawyer", "Buy groceries"]);
    }

    #[rstest]
    #[case("Buy milk")]
    #[case("Call doctor")]
    #[case("   padded   ")]
    #[case(" ")]
    fn append_adds_to_the_end(#[case] candidate: &str) {
        let mut sequence = TaskSequence::seeded();
        let before = sequence.clone();

        assert!(sequence.append(candidate));

        assert_eq!(sequence.len(), before.len() + 1);
        assert_eq!(&sequence.as_slice()[..before.len()], before.as_slice());
        assert_eq!(sequence.as_slice().last(), Some(&Task::from(candidate)));
    }

    #[rstest]
    fn append_ignores_empty_candidate() {
        let mut sequence = TaskSequence::seeded();

        assert!(!sequence.append(""));
        assert_eq!(sequence, TaskSequence::seeded());
    }

    #[rstest]
    fn length_never_decreases() {
        let mut sequence = TaskSequence::new();
        let mut last = sequence.len();

        for candidate in ["a", "", "b", "", "", "a"] {
            sequence.append(candidate);
            assert!(sequence.len() >= last);
            last = sequence.len();
        }

        assert_eq!(texts(&sequence), ["a", "b", "a"]);
    }

    #[rstest]
    fn snapshot_is_detached_from_later_appends() {
        let mut sequence = TaskSequence::seeded();
        let snapshot = sequence.snapshot();

        sequence.append("Buy milk");

        assert_eq!(snapshot.len(), 3);
        assert_eq!(&*sequence.snapshot(), sequence.as_slice());
    }
}
