pub mod behavior;
pub mod data;
pub mod error;
pub mod expression;
pub mod operation;
pub mod task;

pub use behavior::{
    Assignment, Behavior, BehaviorKind, CamelBehavior, ClassDelegateBehavior, Data,
    DataAssociation, DelegateExpressionBehavior, ExpressionBehavior, IoSpecification,
    MailBehavior, MuleBehavior, ShellBehavior, WebServiceBehavior,
};
pub use data::{
    AssignmentDefinition, DataAssociationDefinition, DataSpec, IoSpecificationDefinition,
    ItemDefinition, ItemDefinitionTable,
};
pub use error::{CoreError, CoreErrorKind, CoreResult};
pub use expression::Expression;
pub use operation::{Operation, OperationTable};
pub use task::{
    ELEMENT_TASK_SERVICE, FieldExtension, FieldValue, Implementation, ImplementationKind,
    ServiceTaskDefinition,
};
