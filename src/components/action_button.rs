use std::sync::atomic::{AtomicBool, Ordering};

/// A button that disables itself while the action it triggered is in flight.
#[derive(Debug, Default)]
pub struct ActionButton {
    in_flight: AtomicBool,
}

impl ActionButton {
    pub fn is_disabled(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Marks the action as in flight, or returns `None` if it already is.
    pub fn try_disable(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| InFlightGuard { button: self })
    }
}

/// Re-enables the button when dropped.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    button: &'a ActionButton,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.button.in_flight.store(false, Ordering::SeqCst);
    }
}
