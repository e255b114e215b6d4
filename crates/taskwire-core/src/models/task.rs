use std::str::FromStr;

use crate::models::{CoreError, CoreErrorKind, DataAssociationDefinition, IoSpecificationDefinition};

pub const ELEMENT_TASK_SERVICE: &str = "serviceTask";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ImplementationKind {
    Class,
    DelegateExpression,
    Expression,
    WebService,
}

impl ImplementationKind {
    pub const ALL: [ImplementationKind; 4] = [
        ImplementationKind::Class,
        ImplementationKind::DelegateExpression,
        ImplementationKind::Expression,
        ImplementationKind::WebService,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::DelegateExpression => "delegateExpression",
            Self::Expression => "expression",
            Self::WebService => "##WebService",
        }
    }
}

impl FromStr for ImplementationKind {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("class") {
            Ok(Self::Class)
        } else if value.eq_ignore_ascii_case("delegateExpression") {
            Ok(Self::DelegateExpression)
        } else if value.eq_ignore_ascii_case("expression") {
            Ok(Self::Expression)
        } else if value.eq_ignore_ascii_case("##WebService") {
            Ok(Self::WebService)
        } else {
            Err(CoreError::new(
                CoreErrorKind::InvalidInput,
                format!("unknown implementation type '{value}'"),
            ))
        }
    }
}

/// The implementation axis of a service task, folded into one variant at
/// ingestion time so that impossible combinations cannot be observed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Implementation {
    #[default]
    None,
    Class(String),
    DelegateExpression(String),
    Expression(String),
    WebService {
        operation_ref: Option<String>,
    },
}

impl Implementation {
    /// Builds the union from the raw attribute triple found on a task element.
    /// Unknown or unspecified kinds collapse to `None`.
    pub fn from_attributes(
        kind: Option<&str>,
        value: Option<&str>,
        operation_ref: Option<&str>,
    ) -> Self {
        let Some(kind) = kind.and_then(|raw| raw.parse::<ImplementationKind>().ok()) else {
            return Self::None;
        };
        let value = value.unwrap_or_default().to_string();

        match kind {
            ImplementationKind::Class => Self::Class(value),
            ImplementationKind::DelegateExpression => Self::DelegateExpression(value),
            ImplementationKind::Expression => Self::Expression(value),
            ImplementationKind::WebService => Self::WebService {
                operation_ref: operation_ref.map(str::to_string),
            },
        }
    }

    pub fn kind(&self) -> Option<ImplementationKind> {
        match self {
            Self::None => None,
            Self::Class(_) => Some(ImplementationKind::Class),
            Self::DelegateExpression(_) => Some(ImplementationKind::DelegateExpression),
            Self::Expression(_) => Some(ImplementationKind::Expression),
            Self::WebService { .. } => Some(ImplementationKind::WebService),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldValue {
    String(String),
    Expression(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldExtension {
    pub name: String,
    pub value: FieldValue,
}

impl FieldExtension {
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::String(value.into()),
        }
    }

    pub fn expression(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Expression(expression.into()),
        }
    }

    pub fn raw_value(&self) -> &str {
        match &self.value {
            FieldValue::String(value) | FieldValue::Expression(value) => value,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ServiceTaskDefinition {
    pub id: String,
    pub name: Option<String>,
    pub task_type: Option<String>,
    pub implementation: Implementation,
    pub result_variable: Option<String>,
    pub field_extensions: Vec<FieldExtension>,
    pub io_specification: Option<IoSpecificationDefinition>,
    pub data_input_associations: Vec<DataAssociationDefinition>,
    pub data_output_associations: Vec<DataAssociationDefinition>,
    pub asynchronous: bool,
    pub not_exclusive: bool,
    pub failed_job_retry_time_cycle: Option<String>,
}

impl ServiceTaskDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    pub fn implementation(mut self, implementation: Implementation) -> Self {
        self.implementation = implementation;
        self
    }

    pub fn result_variable(mut self, result_variable: impl Into<String>) -> Self {
        self.result_variable = Some(result_variable.into());
        self
    }

    pub fn field(mut self, field: FieldExtension) -> Self {
        self.field_extensions.push(field);
        self
    }

    pub fn io_specification(mut self, io_specification: IoSpecificationDefinition) -> Self {
        self.io_specification = Some(io_specification);
        self
    }

    pub fn data_input(mut self, association: DataAssociationDefinition) -> Self {
        self.data_input_associations.push(association);
        self
    }

    pub fn data_output(mut self, association: DataAssociationDefinition) -> Self {
        self.data_output_associations.push(association);
        self
    }

    /// The type tag when it carries any text at all; blank tags count as absent.
    pub fn declared_type(&self) -> Option<&str> {
        self.task_type.as_deref().filter(|value| !value.is_empty())
    }

    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.field_extensions
            .iter()
            .find(|field| field.name == name)
            .map(FieldExtension::raw_value)
    }
}
