use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CoreErrorKind {
    InvalidInput,
    ParseFailure,
    UnknownReference,
    DuplicateKey,
    StorageFailure,
    Internal,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind:?}: {message}")]
pub struct CoreError {
    pub task: Option<String>,
    pub element: Option<String>,
    pub kind: CoreErrorKind,
    pub message: String,
}

impl CoreError {
    pub fn new(kind: CoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            task: None,
            element: None,
            kind,
            message: message.into(),
        }
    }

    pub fn parse_failure(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::ParseFailure, message)
    }

    pub fn for_task(mut self, task_id: impl Into<String>) -> Self {
        self.task = Some(task_id.into());
        self
    }

    pub fn for_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
