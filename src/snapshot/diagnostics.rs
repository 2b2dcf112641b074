//! Per-unit diagnostics carried through the snapshot: fatal parse failures
//! that skip a unit's symbols, and non-fatal warnings that ride along.

use std::sync::Arc;

use crate::base::UnitId;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic reported against one source unit.
///
/// These come from the front-end collaborator (parse or model failures);
/// the snapshot carries them through so the caller sees why a unit's
/// symbols are missing from the graph.
#[derive(Clone, Debug)]
pub struct UnitDiagnostic {
    /// The unit this diagnostic belongs to.
    pub unit: UnitId,
    /// Severity level.
    pub severity: Severity,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl UnitDiagnostic {
    /// Create a new error diagnostic.
    pub fn error(unit: UnitId, message: impl Into<Arc<str>>) -> Self {
        Self {
            unit,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(unit: UnitId, message: impl Into<Arc<str>>) -> Self {
        Self {
            unit,
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}
