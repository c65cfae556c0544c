//! Host-independent state for the task list: the tasks themselves, the
//! append-only sequence the page owns, the draft held by the add form and
//! the store that tells views when the sequence grows.

mod draft;
mod sequence;
mod store;
mod subscribe;
mod task;

pub use draft::Draft;
pub use sequence::{Snapshot, TaskSequence, SEED};
pub use store::TaskStore;
pub use subscribe::{SubscribeHandle, Subscriber};
pub use task::Task;
