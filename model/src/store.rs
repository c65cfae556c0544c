use std::cell::RefCell;

use crate::{Snapshot, SubscribeHandle, Subscriber, TaskSequence};

/// Owner of the page's task sequence.
///
/// Views never touch the sequence directly: they read [`snapshot`]s and
/// subscribe to be handed a fresh one after every successful append.
///
/// [`snapshot`]: TaskStore::snapshot
pub struct TaskStore {
    tasks: RefCell<TaskSequence>,
    updates: Subscriber<Snapshot>,
}

impl TaskStore {
    pub fn new(tasks: TaskSequence) -> Self {
        TaskStore {
            tasks: RefCell::new(tasks),
            updates: Subscriber::default(),
        }
    }

    pub fn seeded() -> Self {
        TaskStore::new(TaskSequence::seeded())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.tasks.borrow().snapshot()
    }

    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Appends `candidate` and notifies subscribers. Empty candidates are
    /// dropped without notifying anyone. Returns whether the sequence grew.
    pub fn append(&self, candidate: impl Into<String>) -> bool {
        let snapshot = {
            let mut tasks = self.tasks.borrow_mut();

            if !tasks.append(candidate) {
                return false;
            }

            tasks.snapshot()
        };

        self.updates.broadcast(snapshot);
        true
    }

    pub fn subscribe(&self, listener: impl Fn(Snapshot) + 'static) -> SubscribeHandle {
        self.updates.subscribe(listener)
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::seeded()
    }
}
