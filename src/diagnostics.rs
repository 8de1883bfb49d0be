// src/diagnostics.rs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// One developer-facing event. Never shown in the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub source: &'static str,
    pub message: String,
}

// Where panels report what happened to their requests
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: Diagnostic);

    fn info(&self, source: &'static str, message: String) {
        self.record(Diagnostic { level: Level::Info, source, message });
    }

    fn error(&self, source: &'static str, message: String) {
        self.record(Diagnostic { level: Level::Error, source, message });
    }
}

/// Forwards to the global `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: Diagnostic) {
        match diagnostic.level {
            Level::Info => tracing::info!(source = diagnostic.source, "{}", diagnostic.message),
            Level::Error => tracing::error!(source = diagnostic.source, "{}", diagnostic.message),
        }
    }
}

/// Keeps every event in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    events: std::sync::Mutex<Vec<Diagnostic>>,
}

#[cfg(test)]
impl MemorySink {
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    pub fn errors(&self) -> Vec<Diagnostic> {
        self.events().into_iter().filter(|d| d.level == Level::Error).collect()
    }
}

#[cfg(test)]
impl DiagnosticSink for MemorySink {
    fn record(&self, diagnostic: Diagnostic) {
        if let Ok(mut events) = self.events.lock() {
            events.push(diagnostic);
        }
    }
}
