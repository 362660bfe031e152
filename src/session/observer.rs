//! Synchronous change listeners

use super::state::SessionState;
use std::fmt;

/// Handle returned by [`subscribe`](super::GameSession::subscribe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&SessionState)>;

/// Listeners called, in subscription order, after every state change
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Observers {
    pub(crate) fn subscribe(&mut self, listener: impl FnMut(&SessionState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub(crate) fn notify(&mut self, state: &SessionState) {
        for (_, listener) in &mut self.listeners {
            listener(state);
        }
    }
}
