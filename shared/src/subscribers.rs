//! Subscriber list used by the controllers to republish state.

use std::fmt;

type Callback<S> = Box<dyn FnMut(&S)>;

/// Ordered list of callbacks notified with each new state.
///
/// Callbacks run synchronously, in subscription order, on the thread that
/// delivered the event.
pub struct Subscribers<S> {
    entries: Vec<Callback<S>>,
}

impl<S> Default for Subscribers<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S> fmt::Debug for Subscribers<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .finish()
    }
}

impl<S> Subscribers<S> {
    pub fn subscribe(&mut self, callback: impl FnMut(&S) + 'static) {
        self.entries.push(Box::new(callback));
    }

    pub fn publish(&mut self, state: &S) {
        for callback in self.entries.iter_mut() {
            callback(state);
        }
    }

    /// Drop every callback; later publishes reach nobody.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
