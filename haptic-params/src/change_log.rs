use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use heapless::HistoryBuffer;

pub const DEFAULT_LOG_CAPACITY: usize = 30;

/// Receives one human readable line per model mutation, in mutation order.
pub type ChangeLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Bounded log of the most recent change messages.
///
/// Once `N` lines are stored, each new line drops the oldest one.
pub struct ChangeLog<const N: usize = DEFAULT_LOG_CAPACITY> {
    lines: Arc<Mutex<HistoryBuffer<String, N>>>,
}

impl<const N: usize> ChangeLog<N> {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(HistoryBuffer::new())),
        }
    }

    pub fn push(&self, line: impl Into<String>) {
        self.buffer().write(line.into());
    }

    /// Stored lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.buffer().oldest_ordered().cloned().collect()
    }

    pub fn last(&self) -> Option<String> {
        self.buffer().recent().cloned()
    }

    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }

    /// A sink that appends to this log, for [`crate::ParameterModel::set_change_logger`]
    pub fn logger(&self) -> ChangeLogger {
        let lines = self.lines.clone();

        Arc::new(move |line: &str| {
            lines.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .write(line.to_string());
        })
    }

    fn buffer(&self) -> MutexGuard<'_, HistoryBuffer<String, N>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<const N: usize> Clone for ChangeLog<N> {
    fn clone(&self) -> Self {
        Self {
            lines: self.lines.clone(),
        }
    }
}

impl<const N: usize> Default for ChangeLog<N> {
    fn default() -> Self {
        Self::new()
    }
}
