//! Terminal actions for fatal and panic records
//!
//! The backend hands fatal and panic records to the appender first and then
//! asks a [`TerminalHandler`] to act. Production code uses
//! [`ProcessTerminal`]; tests swap in [`RecordingTerminal`] so a fatal record
//! does not end the test process.

use parking_lot::Mutex;

/// What happens after a fatal or panic record has been written
pub trait TerminalHandler: Send + Sync {
    /// Called after a fatal record. Expected not to return.
    fn on_fatal(&self, message: &str);

    /// Called after a panic record. Expected to unwind.
    fn on_panic(&self, message: &str);
}

/// Exit code used by [`ProcessTerminal`] after a fatal record
pub const FATAL_EXIT_CODE: i32 = 1;

/// Exits the process on fatal, panics on panic
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessTerminal;

impl TerminalHandler for ProcessTerminal {
    fn on_fatal(&self, _message: &str) {
        std::process::exit(FATAL_EXIT_CODE);
    }

    fn on_panic(&self, message: &str) {
        panic!("{}", message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    Fatal(String),
    Panic(String),
}

/// Remembers terminal requests instead of acting on them
#[derive(Debug, Default)]
pub struct RecordingTerminal {
    events: Mutex<Vec<TerminalEvent>>,
}

impl RecordingTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TerminalEvent> {
        self.events.lock().clone()
    }

    pub fn fatal_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| matches!(e, TerminalEvent::Fatal(_)))
            .count()
    }

    pub fn panic_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| matches!(e, TerminalEvent::Panic(_)))
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl TerminalHandler for RecordingTerminal {
    fn on_fatal(&self, message: &str) {
        self.events
            .lock()
            .push(TerminalEvent::Fatal(message.to_string()));
    }

    fn on_panic(&self, message: &str) {
        self.events
            .lock()
            .push(TerminalEvent::Panic(message.to_string()));
    }
}
