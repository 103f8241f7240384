//! Composition-based teardown tracking.
//!
//! Widgets hold a `Disposables` and delegate to it from their `dispose`,
//! rather than inheriting disposal behavior from a base class.

use log::warn;

type Task = Box<dyn FnOnce() + Send>;

/// Collects teardown thunks and runs them once.
#[derive(Default)]
pub struct Disposables {
    tasks: Vec<Task>,
    disposed: bool,
}

impl Disposables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a teardown task to run on disposal.
    pub fn add(&mut self, task: impl FnOnce() + Send + 'static) {
        if self.disposed {
            warn!("teardown task registered after disposal; running immediately");
            task();
            return;
        }
        self.tasks.push(Box::new(task));
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Run all registered tasks. Later calls are no-ops.
    pub fn dispose(&mut self) {
        if self.disposed {
            warn!("dispose called twice");
            return;
        }
        self.disposed = true;
        for task in self.tasks.drain(..) {
            task();
        }
    }
}

impl std::fmt::Debug for Disposables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposables")
            .field("tasks", &self.tasks.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::Disposables;

    #[test]
    fn runs_tasks_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut disposables = Disposables::new();
        for _ in 0..3 {
            let counter = Arc::clone(&counter);
            disposables.add(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        disposables.dispose();
        disposables.dispose();
        assert_eq!(counter.load(Ordering::SeqCst), 3);
        assert!(disposables.is_disposed());
    }
}
