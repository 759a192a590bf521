// Singleton Pattern: one lazily created instance shared process-wide.
// Prefer passing a `ProcessManager::new()` explicitly; reach for `global()`
// only when a single shared instance is genuinely required.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use tracing::debug;

/// Lazy, at-most-once value that can live in a `static`.
pub struct Singleton<T> {
    cell: OnceLock<T>,
    init: fn() -> T,
}

impl<T> Singleton<T> {
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    pub fn get(&self) -> &T {
        self.cell.get_or_init(self.init)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

// ============================================================================
// Example: Process manager
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessState {
    Ready,
    Running,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: usize,
    pub state: ProcessState,
}

#[derive(Debug, Default)]
pub struct ProcessManager {
    num_process: AtomicUsize,
}

static PROCESS_MANAGER: Singleton<ProcessManager> = Singleton::new(ProcessManager::new);

impl ProcessManager {
    pub fn new() -> Self {
        Self {
            num_process: AtomicUsize::new(0),
        }
    }

    pub fn global() -> &'static ProcessManager {
        PROCESS_MANAGER.get()
    }

    pub fn spawn(&self, state: ProcessState) -> Process {
        let id = self.num_process.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(id, ?state, "spawned process");
        Process { id, state }
    }

    pub fn num_process(&self) -> usize {
        self.num_process.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Example: Plain instance
// ============================================================================

static INSTANCE: Singleton<String> = Singleton::new(create_instance);

fn create_instance() -> String {
    "I am the instance".to_string()
}

pub fn instance() -> &'static str {
    INSTANCE.get()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_global_is_same_instance() {
        let first = ProcessManager::global();
        let second = ProcessManager::global();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_instance_identity() {
        assert_eq!(instance(), "I am the instance");
        assert!(std::ptr::eq(instance(), instance()));
    }

    #[test]
    fn test_injected_managers_are_independent() {
        let a = ProcessManager::new();
        let b = ProcessManager::new();
        a.spawn(ProcessState::Ready);
        a.spawn(ProcessState::Running);

        assert_eq!(a.num_process(), 2);
        assert_eq!(b.num_process(), 0);
    }

    #[test]
    fn test_spawn_assigns_increasing_ids() {
        let manager = ProcessManager::new();
        let first = manager.spawn(ProcessState::Ready);
        let second = manager.spawn(ProcessState::Stopped);

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.state, ProcessState::Stopped);
    }

    #[test]
    fn test_init_runs_once_across_threads() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        static LAZY: Singleton<usize> = Singleton::new(|| CALLS.fetch_add(1, Ordering::SeqCst) + 100);

        assert!(!LAZY.is_initialized());
        let handles: Vec<_> = (0..8).map(|_| thread::spawn(|| *LAZY.get())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 100);
        }

        assert!(LAZY.is_initialized());
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_global_counts_spawns() {
        let before = ProcessManager::global().num_process();
        ProcessManager::global().spawn(ProcessState::Running);
        assert!(ProcessManager::global().num_process() > before);
    }
}
