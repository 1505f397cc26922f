use std::sync::atomic::{AtomicBool, Ordering};

use tracing_appender::non_blocking::WorkerGuard;

/// Handle для управления lifecycle логирования.
#[derive(Debug)]
pub struct LoggingHandle {
    /// File guard (есть, только если включён файловый вывод)
    file_guard: Option<WorkerGuard>,
    shut_down: AtomicBool,
}

/// Состояние логирования.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingStats {
    pub file_enabled: bool,
    pub shut_down: bool,
}

impl LoggingHandle {
    pub fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self {
            file_guard,
            shut_down: AtomicBool::new(false),
        }
    }

    /// Сбрасывает файловый буфер: drop `WorkerGuard` дожидается записи
    /// всех событий из очереди.
    pub fn shutdown(mut self) {
        tracing::info!(
            file_enabled = self.file_guard.is_some(),
            "Logging shutdown"
        );
        self.shut_down.store(true, Ordering::Release);
        drop(self.file_guard.take());
    }

    pub fn stats(&self) -> LoggingStats {
        LoggingStats {
            file_enabled: self.file_guard.is_some(),
            shut_down: self.shut_down.load(Ordering::Acquire),
        }
    }
}

impl Drop for LoggingHandle {
    fn drop(&mut self) {
        if !self.shut_down.load(Ordering::Acquire) && self.file_guard.is_some() {
            eprintln!(
                "WARNING: LoggingHandle dropped without explicit shutdown(). \
                 Some logs may be lost."
            )
        }
    }
}
