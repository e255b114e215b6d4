use std::fmt::{Display, Formatter};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DiagnosticSeverity {
    Warning,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum DiagnosticKind {
    InvalidTaskType { type_name: String },
    MissingImplementation,
    UnknownOperation { operation_ref: String },
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTaskType { .. } => "invalid_task_type",
            Self::MissingImplementation => "missing_implementation",
            Self::UnknownOperation { .. } => "unknown_operation",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub task_id: String,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn warning(task_id: impl Into<String>, kind: DiagnosticKind) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            task_id: task_id.into(),
            kind,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DiagnosticKind::InvalidTaskType { type_name } => write!(
                f,
                "Invalid service task type: '{type_name}' for service task {}",
                self.task_id
            ),
            DiagnosticKind::MissingImplementation => write!(
                f,
                "One of the attributes 'class', 'delegateExpression', 'type', 'operation', or \
                 'expression' is mandatory on serviceTask {}",
                self.task_id
            ),
            DiagnosticKind::UnknownOperation { operation_ref } => write!(
                f,
                "{operation_ref} does not exist for service task {}",
                self.task_id
            ),
        }
    }
}

/// Receives parse-time diagnostics. Emission is fire-and-forget.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            DiagnosticSeverity::Warning => tracing::warn!(
                task_id = %diagnostic.task_id,
                kind = diagnostic.kind.as_str(),
                "{diagnostic}"
            ),
        }
    }
}

#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Diagnostic> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn emit(&self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

impl<A: DiagnosticSink, B: DiagnosticSink> DiagnosticSink for (A, B) {
    fn emit(&self, diagnostic: Diagnostic) {
        self.0.emit(diagnostic.clone());
        self.1.emit(diagnostic);
    }
}
