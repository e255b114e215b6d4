pub mod json;

pub use json::JsonDefinitionSource;

use crate::models::{CoreResult, ItemDefinitionTable, OperationTable, ServiceTaskDefinition};

/// Everything service task resolution needs from one parsed process document.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProcessDocument {
    pub process_id: Option<String>,
    pub target_namespace: String,
    pub item_definitions: ItemDefinitionTable,
    pub operations: OperationTable,
    pub service_tasks: Vec<ServiceTaskDefinition>,
}

pub trait DefinitionSource {
    fn load(&self) -> CoreResult<ProcessDocument>;
}
