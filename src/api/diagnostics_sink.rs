use std::sync::{Mutex, PoisonError};

use tracing::warn;

use crate::core::{Diagnostic, DiagnosticCategory};

/// Destination for diagnostics published by the engine.
///
/// Sinks are shared across charts and may be called from several threads
/// when charts are computed in parallel.
pub trait DiagnosticsSink: Send + Sync {
    fn publish(&self, element_id: Option<&str>, diagnostic: &Diagnostic);
}

/// Emits every diagnostic as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn publish(&self, element_id: Option<&str>, diagnostic: &Diagnostic) {
        warn!(
            element = element_id.unwrap_or("-"),
            category = diagnostic.category.as_str(),
            data = ?diagnostic.data,
            "{diagnostic}"
        );
    }
}

/// Keeps published diagnostics in memory, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<CollectedDiagnostic>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedDiagnostic {
    pub element_id: Option<String>,
    pub diagnostic: Diagnostic,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<CollectedDiagnostic> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drains everything collected so far.
    pub fn take(&self) -> Vec<CollectedDiagnostic> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }

    #[must_use]
    pub fn count(&self, category: DiagnosticCategory) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|entry| entry.diagnostic.category == category)
            .count()
    }
}

impl DiagnosticsSink for CollectingSink {
    fn publish(&self, element_id: Option<&str>, diagnostic: &Diagnostic) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CollectedDiagnostic {
                element_id: element_id.map(str::to_owned),
                diagnostic: diagnostic.clone(),
            });
    }
}
