use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Receiver for user-facing status messages
pub trait StatusSink {
    fn error(&mut self, message: &str);
    fn warning(&mut self, message: &str);
    fn info(&mut self, message: &str);
}

/// Sink that keeps every message in arrival order
#[derive(Debug, Default, Clone, Serialize)]
pub struct RecordingSink {
    pub messages: Vec<StatusMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub severity: Severity,
    pub message: String,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn severities(&self) -> Vec<Severity> {
        self.messages.iter().map(|m| m.severity).collect()
    }

    fn push(&mut self, severity: Severity, message: &str) {
        self.messages.push(StatusMessage {
            severity,
            message: message.to_string(),
        });
    }
}

impl StatusSink for RecordingSink {
    fn error(&mut self, message: &str) {
        self.push(Severity::Error, message);
    }

    fn warning(&mut self, message: &str) {
        self.push(Severity::Warning, message);
    }

    fn info(&mut self, message: &str) {
        self.push(Severity::Info, message);
    }
}
