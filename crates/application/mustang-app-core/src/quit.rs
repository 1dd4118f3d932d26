use std::sync::atomic::{AtomicBool, Ordering};

use crate::ports::ExitControl;

/// Forwards the first exit request to the event loop and swallows the rest.
pub struct QuitLatch<E> {
    requested: AtomicBool,
    control: E,
}

impl<E: ExitControl> QuitLatch<E> {
    pub fn new(control: E) -> Self {
        Self {
            requested: AtomicBool::new(false),
            control,
        }
    }

    /// Returns `true` only for the call that actually signalled the loop.
    pub fn request(&self) -> bool {
        if self.requested.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.control.request_exit();
        true
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}
