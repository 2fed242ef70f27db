//! Notification collaborator.
//!
//! The original UI surfaces mutating-operation outcomes as toast
//! notifications; this crate delegates them through `Notifier` so the state
//! layer never knows how (or whether) they are rendered.

/// Sink for user-facing success/failure notices.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default notifier: structured log lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!(%message, "notice");
    }

    fn error(&self, message: &str) {
        tracing::error!(%message, "notice");
    }
}

/// Test notifier capturing every notice in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: std::sync::Mutex<Vec<(bool, String)>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.notices
            .lock()
            .expect("notifier lock")
            .iter()
            .filter(|(ok, _)| !ok)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.notices
            .lock()
            .expect("notifier lock")
            .iter()
            .filter(|(ok, _)| *ok)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices.lock().expect("notifier lock").push((true, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices.lock().expect("notifier lock").push((false, message.to_string()));
    }
}
