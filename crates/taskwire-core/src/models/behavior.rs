use crate::models::{Expression, FieldExtension, ItemDefinition, Operation};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BehaviorKind {
    Mail,
    Mule,
    Camel,
    Shell,
    CustomTypeUnresolved,
    ClassDelegate,
    DelegateExpression,
    Expression,
    WebService,
    Unconfigured,
}

impl BehaviorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mail => "mail",
            Self::Mule => "mule",
            Self::Camel => "camel",
            Self::Shell => "shell",
            Self::CustomTypeUnresolved => "custom_type_unresolved",
            Self::ClassDelegate => "class_delegate",
            Self::DelegateExpression => "delegate_expression",
            Self::Expression => "expression",
            Self::WebService => "web_service",
            Self::Unconfigured => "unconfigured",
        }
    }
}

/// What a service task runs when execution reaches it. Exactly one is
/// produced per task definition, including the inert variants.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Behavior {
    Mail(MailBehavior),
    Mule(MuleBehavior),
    Camel(CamelBehavior),
    Shell(ShellBehavior),
    CustomTypeUnresolved { type_name: String },
    ClassDelegate(ClassDelegateBehavior),
    DelegateExpression(DelegateExpressionBehavior),
    Expression(ExpressionBehavior),
    WebService(WebServiceBehavior),
    Unconfigured,
}

impl Behavior {
    pub fn kind(&self) -> BehaviorKind {
        match self {
            Self::Mail(_) => BehaviorKind::Mail,
            Self::Mule(_) => BehaviorKind::Mule,
            Self::Camel(_) => BehaviorKind::Camel,
            Self::Shell(_) => BehaviorKind::Shell,
            Self::CustomTypeUnresolved { .. } => BehaviorKind::CustomTypeUnresolved,
            Self::ClassDelegate(_) => BehaviorKind::ClassDelegate,
            Self::DelegateExpression(_) => BehaviorKind::DelegateExpression,
            Self::Expression(_) => BehaviorKind::Expression,
            Self::WebService(_) => BehaviorKind::WebService,
            Self::Unconfigured => BehaviorKind::Unconfigured,
        }
    }

    /// Inert behaviors register like any other but do nothing useful when run.
    pub fn is_inert(&self) -> bool {
        matches!(self, Self::CustomTypeUnresolved { .. } | Self::Unconfigured)
    }

    pub fn as_web_service(&self) -> Option<&WebServiceBehavior> {
        match self {
            Self::WebService(behavior) => Some(behavior),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MailBehavior {
    pub fields: Vec<FieldExtension>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MuleBehavior {
    pub endpoint_url: Option<String>,
    pub language: Option<String>,
    pub payload_expression: Option<String>,
    pub result_variable: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CamelBehavior {
    pub camel_context: Option<String>,
    pub fields: Vec<FieldExtension>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ShellBehavior {
    pub command: Option<String>,
    pub args: Vec<String>,
    pub wait: bool,
    pub output_variable: Option<String>,
    pub error_code_variable: Option<String>,
    pub redirect_error: bool,
    pub clean_env: bool,
    pub directory: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClassDelegateBehavior {
    pub class_name: String,
    pub fields: Vec<FieldExtension>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DelegateExpressionBehavior {
    pub expression: String,
    pub fields: Vec<FieldExtension>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExpressionBehavior {
    pub expression: String,
    pub result_variable: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Data {
    pub id: String,
    pub name: String,
    pub definition: Option<ItemDefinition>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IoSpecification {
    pub inputs: Vec<Data>,
    pub outputs: Vec<Data>,
    pub input_refs: Vec<String>,
    pub output_refs: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Assignment {
    pub from: Expression,
    pub to: Expression,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataAssociation {
    MessageImplicitInput {
        source: Option<String>,
        target: Option<String>,
    },
    SimpleInput {
        source: Option<String>,
        target: Option<String>,
        assignments: Vec<Assignment>,
    },
    MessageImplicitOutput {
        source: Option<String>,
        target: Option<String>,
    },
    TransformationOutput {
        target: Option<String>,
        transformation: Expression,
    },
}

impl DataAssociation {
    pub fn source(&self) -> Option<&str> {
        match self {
            Self::MessageImplicitInput { source, .. }
            | Self::SimpleInput { source, .. }
            | Self::MessageImplicitOutput { source, .. } => source.as_deref(),
            Self::TransformationOutput { .. } => None,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::MessageImplicitInput { target, .. }
            | Self::SimpleInput { target, .. }
            | Self::MessageImplicitOutput { target, .. }
            | Self::TransformationOutput { target, .. } => target.as_deref(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WebServiceBehavior {
    pub task_id: String,
    pub operation: Option<Operation>,
    pub io_specification: Option<IoSpecification>,
    pub data_input_associations: Vec<DataAssociation>,
    pub data_output_associations: Vec<DataAssociation>,
}

impl WebServiceBehavior {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            ..Self::default()
        }
    }

    pub fn set_operation(&mut self, operation: Operation) {
        self.operation = Some(operation);
    }

    pub fn set_io_specification(&mut self, io_specification: IoSpecification) {
        self.io_specification = Some(io_specification);
    }

    pub fn add_data_input_association(&mut self, association: DataAssociation) {
        self.data_input_associations.push(association);
    }

    pub fn add_data_output_association(&mut self, association: DataAssociation) {
        self.data_output_associations.push(association);
    }
}
