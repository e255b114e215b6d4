use std::collections::HashMap;

use crate::models::{CoreError, CoreErrorKind, CoreResult};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Operation {
    pub id: String,
    pub name: Option<String>,
    pub implementation_ref: Option<String>,
    pub interface_id: Option<String>,
    pub in_message_ref: Option<String>,
    pub out_message_ref: Option<String>,
}

impl Operation {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Operations declared by the document, keyed by operation reference.
/// Built once before service tasks are resolved and only read afterwards.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OperationTable {
    operations: HashMap<String, Operation>,
}

impl OperationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, operation: Operation) -> CoreResult<()> {
        if self.operations.contains_key(&operation.id) {
            return Err(CoreError::new(
                CoreErrorKind::DuplicateKey,
                format!("operation '{}' is declared more than once", operation.id),
            )
            .for_element(operation.id));
        }
        self.operations.insert(operation.id.clone(), operation);
        Ok(())
    }

    pub fn get(&self, operation_ref: &str) -> Option<&Operation> {
        self.operations.get(operation_ref)
    }

    pub fn contains(&self, operation_ref: &str) -> bool {
        self.operations.contains_key(operation_ref)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl TryFrom<Vec<Operation>> for OperationTable {
    type Error = CoreError;

    fn try_from(operations: Vec<Operation>) -> CoreResult<Self> {
        let mut table = Self::new();
        for operation in operations {
            table.insert(operation)?;
        }
        Ok(table)
    }
}
