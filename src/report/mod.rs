use crossterm::style::Stylize;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Success => "SUCCESS",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

/// Sink for diagnostic messages emitted during resolution.
///
/// The resolver reports through this trait instead of printing, so tests can
/// assert on the diagnostics without capturing stdout.
pub trait Reporter: Send + Sync {
    fn report(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.report(Severity::Info, message);
    }

    fn success(&self, message: &str) {
        self.report(Severity::Success, message);
    }

    fn warning(&self, message: &str) {
        self.report(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(Severity::Error, message);
    }
}

/// Writes `[LEVEL] message` to stdout, colored per severity.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, severity: Severity, message: &str) {
        let line = format!("[{}] {}", severity.label(), message);
        let styled = match severity {
            Severity::Info => line.blue(),
            Severity::Success => line.green(),
            Severity::Warning => line.yellow(),
            Severity::Error => line.red(),
        };
        println!("{styled}");
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use std::sync::Mutex;

    use super::{Reporter, Severity};

    /// Captures reports for test assertions.
    #[derive(Default)]
    pub struct RecordingReporter {
        events: Mutex<Vec<(Severity, String)>>,
    }

    impl RecordingReporter {
        pub fn contains(&self, severity: Severity, needle: &str) -> bool {
            self.events
                .lock()
                .unwrap()
                .iter()
                .any(|(s, m)| *s == severity && m.contains(needle))
        }
    }

    impl Reporter for RecordingReporter {
        fn report(&self, severity: Severity, message: &str) {
            self.events
                .lock()
                .unwrap()
                .push((severity, message.to_string()));
        }
    }
}
