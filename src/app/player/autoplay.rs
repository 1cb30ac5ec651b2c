use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<K> {
    key: K,
    due: Instant,
}

/// One-shot delayed task keyed by source identity. Scheduling again replaces
/// the pending task, and a task only fires for the key it was scheduled with.
#[derive(Debug, Clone)]
pub(crate) struct AutoplayTimer<K> {
    pending: Option<Pending<K>>,
}

impl<K> Default for AutoplayTimer<K> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<K: PartialEq> AutoplayTimer<K> {
    pub(crate) fn schedule(&mut self, key: K, now: Instant, delay: Duration) {
        self.pending = Some(Pending {
            key,
            due: now + delay,
        });
    }

    pub(crate) fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.due)
    }

    /// Consumes the task once it is due. A task scheduled for another key is
    /// dropped without firing.
    pub(crate) fn take_due(&mut self, current: &K, now: Instant) -> bool {
        let Some(pending) = self.pending.as_ref() else {
            return false;
        };
        if pending.key != *current {
            self.pending = None;
            return false;
        }
        if now < pending.due {
            return false;
        }
        self.pending = None;
        true
    }
}
