//! Change notification for observable state.
//!
//! Listeners are called synchronously, in subscription order, on the thread
//! that mutated the state. They receive the event only; to see the new
//! state they re-read it from the owner.

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<E> = Box<dyn Fn(&E)>;

pub struct Notifier<E> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<E>)>,
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn notify(&self, event: &E) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}
