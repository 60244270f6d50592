/// Severity of a diagnostic record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

/// One diagnostic record.
///
/// For now this is structured text; the browser app drains these into the
/// console, and tests assert on them directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: &'static str,
    pub message: String,
}

/// In-memory, drainable diagnostics log.
///
/// No failure is ever surfaced to the user as a broken page, so components
/// record what went wrong here instead of propagating errors upward.
#[derive(Debug, Default)]
pub struct DiagnosticsLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticsLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn emit(&mut self, severity: Severity, kind: &'static str, message: impl Into<String>) {
        self.entries.push(Diagnostic {
            severity,
            kind,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn drain(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }
}
