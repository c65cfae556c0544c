use std::{cell::RefCell, rc::Rc};

type Listener<T> = Rc<dyn Fn(T)>;

/// Fan-out of values to any number of listeners. Listeners stay registered
/// for as long as the [`SubscribeHandle`] returned by [`subscribe`] lives.
///
/// [`subscribe`]: Subscriber::subscribe
pub struct Subscriber<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Clone + 'static> Subscriber<T> {
    pub fn broadcast(&self, val: T) {
        // listeners may subscribe or unsubscribe while being called
        let subscribers = {
            let inner = self.inner.borrow();
            inner.subscribers.clone()
        };

        for (_, listener) in subscribers {
            listener(val.clone());
        }
    }

    pub fn subscribe(&self, listener: impl Fn(T) + 'static) -> SubscribeHandle {
        let mut inner = self.inner.borrow_mut();

        // generate next subscriber id
        let id = inner.seq;
        inner.seq += 1;

        inner.subscribers.push((id, Rc::new(listener)));

        drop(inner);

        SubscribeHandle {
            inner: self.inner.clone() as Rc<dyn InnerT>,
            id,
        }
    }
}

impl<T> Subscriber<T> {
    pub fn len(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Subscriber<T> {
    fn default() -> Self {
        Subscriber { inner: Default::default() }
    }
}

trait InnerT {
    fn remove_id(&self, id: u64);
}

struct Inner<T> {
    seq: u64,
    subscribers: Vec<(u64, Listener<T>)>,
}

impl<T> Default for Inner<T> {
    fn default() -> Self {
        Inner {
            seq: 0,
            subscribers: Vec::new(),
        }
    }
}

impl<T> InnerT for RefCell<Inner<T>> {
    fn remove_id(&self, id: u64) {
        let removed = {
            let mut inner = self.borrow_mut();

            let idx = inner.subscribers.iter()
                .position(|(sub_id, _)| *sub_id == id);

            idx.map(|idx| inner.subscribers.swap_remove(idx))
        };

        // the listener may own handles into this same subscriber
        drop(removed);
    }
}

/// Keeps a listener registered. Dropping it unsubscribes.
#[must_use = "dropping the handle unsubscribes immediately"]
pub struct SubscribeHandle {
    inner: Rc<dyn InnerT>,
    id: u64,
}

impl Drop for SubscribeHandle {
    fn drop(&mut self) {
        self.inner.remove_id(self.id);
    }
}
