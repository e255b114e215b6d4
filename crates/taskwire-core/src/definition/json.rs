use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::definition::{DefinitionSource, ProcessDocument};
use crate::models::{
    AssignmentDefinition, CoreError, CoreErrorKind, CoreResult, DataAssociationDefinition,
    DataSpec, FieldExtension, FieldValue, Implementation, IoSpecificationDefinition,
    ItemDefinition, ItemDefinitionTable, Operation, OperationTable, ServiceTaskDefinition,
};

/// Reads a process document from its JSON form.
pub struct JsonDefinitionSource {
    contents: String,
    origin: Option<PathBuf>,
}

impl JsonDefinitionSource {
    pub fn from_json(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            origin: None,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|error| {
            CoreError::new(
                CoreErrorKind::StorageFailure,
                format!("failed to read process document '{}': {error}", path.display()),
            )
        })?;

        Ok(Self {
            contents,
            origin: Some(path.to_path_buf()),
        })
    }

    fn describe_origin(&self) -> String {
        self.origin
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<inline>".to_string())
    }
}

impl DefinitionSource for JsonDefinitionSource {
    fn load(&self) -> CoreResult<ProcessDocument> {
        let raw: RawDocument = serde_json::from_str(&self.contents).map_err(|error| {
            CoreError::parse_failure(format!(
                "invalid process document JSON in {}: {error}",
                self.describe_origin()
            ))
        })?;

        raw.into_document()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    #[serde(default)]
    process_id: Option<String>,
    #[serde(default)]
    target_namespace: Option<String>,
    #[serde(default)]
    item_definitions: Vec<RawItemDefinition>,
    #[serde(default)]
    interfaces: Vec<RawInterface>,
    #[serde(default)]
    service_tasks: Vec<RawServiceTask>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItemDefinition {
    id: String,
    #[serde(default)]
    structure_ref: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInterface {
    id: String,
    #[serde(default)]
    operations: Vec<RawOperation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOperation {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    implementation_ref: Option<String>,
    #[serde(default)]
    in_message_ref: Option<String>,
    #[serde(default)]
    out_message_ref: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawServiceTask {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    task_type: Option<String>,
    #[serde(default)]
    implementation_type: Option<String>,
    #[serde(default)]
    implementation: Option<String>,
    #[serde(default)]
    operation_ref: Option<String>,
    #[serde(default)]
    result_variable: Option<String>,
    #[serde(default)]
    field_extensions: Vec<RawFieldExtension>,
    #[serde(default, rename = "async")]
    asynchronous: bool,
    #[serde(default)]
    not_exclusive: bool,
    #[serde(default)]
    failed_job_retry_time_cycle: Option<String>,
    #[serde(default)]
    io_specification: Option<RawIoSpecification>,
    #[serde(default)]
    data_input_associations: Vec<RawDataAssociation>,
    #[serde(default)]
    data_output_associations: Vec<RawDataAssociation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFieldExtension {
    name: String,
    #[serde(default)]
    string_value: Option<String>,
    #[serde(default)]
    expression: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIoSpecification {
    #[serde(default)]
    data_inputs: Vec<RawDataSpec>,
    #[serde(default)]
    data_outputs: Vec<RawDataSpec>,
    #[serde(default)]
    data_input_refs: Vec<String>,
    #[serde(default)]
    data_output_refs: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataSpec {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    item_subject_ref: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataAssociation {
    #[serde(default)]
    source_ref: Option<String>,
    #[serde(default)]
    target_ref: Option<String>,
    #[serde(default)]
    transformation: Option<String>,
    #[serde(default)]
    assignments: Vec<RawAssignment>,
}

#[derive(Debug, Deserialize)]
struct RawAssignment {
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
}

impl RawDocument {
    fn into_document(self) -> CoreResult<ProcessDocument> {
        let item_definitions: ItemDefinitionTable = self
            .item_definitions
            .into_iter()
            .map(|item| {
                (
                    item.id.clone(),
                    ItemDefinition {
                        id: item.id,
                        structure_ref: item.structure_ref,
                    },
                )
            })
            .collect();

        let mut operations = OperationTable::new();
        for interface in self.interfaces {
            for operation in interface.operations {
                operations
                    .insert(Operation {
                        id: operation.id,
                        name: operation.name,
                        implementation_ref: operation.implementation_ref,
                        interface_id: Some(interface.id.clone()),
                        in_message_ref: operation.in_message_ref,
                        out_message_ref: operation.out_message_ref,
                    })
                    .map_err(|error| CoreError {
                        kind: CoreErrorKind::ParseFailure,
                        ..error
                    })?;
            }
        }

        let service_tasks = self
            .service_tasks
            .into_iter()
            .enumerate()
            .map(|(position, task)| task.into_definition(position))
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(ProcessDocument {
            process_id: self.process_id,
            target_namespace: self.target_namespace.unwrap_or_default(),
            item_definitions,
            operations,
            service_tasks,
        })
    }
}

impl RawServiceTask {
    fn into_definition(self, position: usize) -> CoreResult<ServiceTaskDefinition> {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                CoreError::parse_failure(format!("service task #{position} has no id"))
            })?;

        let implementation = Implementation::from_attributes(
            self.implementation_type.as_deref(),
            self.implementation.as_deref(),
            self.operation_ref.as_deref(),
        );

        Ok(ServiceTaskDefinition {
            id,
            name: self.name,
            task_type: self.task_type,
            implementation,
            result_variable: self.result_variable,
            field_extensions: self
                .field_extensions
                .into_iter()
                .map(RawFieldExtension::into_field)
                .collect(),
            io_specification: self.io_specification.map(RawIoSpecification::into_definition),
            data_input_associations: self
                .data_input_associations
                .into_iter()
                .map(RawDataAssociation::into_definition)
                .collect(),
            data_output_associations: self
                .data_output_associations
                .into_iter()
                .map(RawDataAssociation::into_definition)
                .collect(),
            asynchronous: self.asynchronous,
            not_exclusive: self.not_exclusive,
            failed_job_retry_time_cycle: self.failed_job_retry_time_cycle,
        })
    }
}

impl RawFieldExtension {
    fn into_field(self) -> FieldExtension {
        let value = match (self.string_value, self.expression) {
            (Some(value), _) if !value.is_empty() => FieldValue::String(value),
            (_, Some(expression)) => FieldValue::Expression(expression),
            (value, None) => FieldValue::String(value.unwrap_or_default()),
        };
        FieldExtension {
            name: self.name,
            value,
        }
    }
}

impl RawIoSpecification {
    fn into_definition(self) -> IoSpecificationDefinition {
        IoSpecificationDefinition {
            data_inputs: self.data_inputs.into_iter().map(RawDataSpec::into_spec).collect(),
            data_outputs: self.data_outputs.into_iter().map(RawDataSpec::into_spec).collect(),
            data_input_refs: self.data_input_refs,
            data_output_refs: self.data_output_refs,
        }
    }
}

impl RawDataSpec {
    fn into_spec(self) -> DataSpec {
        DataSpec {
            id: self.id,
            name: self.name,
            item_subject_ref: self.item_subject_ref,
        }
    }
}

impl RawDataAssociation {
    fn into_definition(self) -> DataAssociationDefinition {
        DataAssociationDefinition {
            source_ref: self.source_ref,
            target_ref: self.target_ref,
            transformation: self.transformation,
            assignments: self
                .assignments
                .into_iter()
                .map(|assignment| AssignmentDefinition {
                    from: assignment.from,
                    to: assignment.to,
                })
                .collect(),
        }
    }
}
