//! Terminal restoration that survives early returns and panics.
//!
//! The guard holds a cleanup closure that runs at most once: on
//! [`TerminalGuard::restore`], on drop, or from the panic hook.

use std::sync::{Arc, Mutex};

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Runs its cleanup exactly once, however the frontend exits.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Cleanup>>>,
}

impl TerminalGuard {
    /// Creates a guard that will run `cleanup`.
    pub fn with_cleanup<F: FnOnce() + Send + 'static>(cleanup: F) -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(Some(Box::new(cleanup)))),
        }
    }

    /// Runs the cleanup before the default panic message is printed.
    pub fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_once(&cleanup);
            default_hook(info);
        }));
    }

    /// Runs the cleanup now if it has not run yet.
    pub fn restore(&self) {
        run_once(&self.cleanup);
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

impl std::fmt::Debug for TerminalGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pending = self.cleanup.lock().map(|slot| slot.is_some()).unwrap_or(false);
        f.debug_struct("TerminalGuard").field("pending", &pending).finish()
    }
}

fn run_once(slot: &Mutex<Option<Cleanup>>) {
    // Take under the lock, run outside it
    let cleanup = match slot.lock() {
        Ok(mut slot) => slot.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    };
    if let Some(cleanup) = cleanup {
        cleanup();
    }
}
