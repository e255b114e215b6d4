use crate::diagnostics::DiagnosticKind;
use crate::models::{Behavior, CoreResult, ServiceTaskDefinition};
use crate::resolver::BehaviorResolver;

/// Binds a web-service task to its operation and wires its data.
///
/// A dangling operation reference degrades to `Unconfigured` without building
/// anything. Failures from the IO specification or association transforms
/// are returned as-is; they mean the document itself is malformed.
pub(super) fn bind(
    resolver: &BehaviorResolver<'_>,
    task: &ServiceTaskDefinition,
    operation_ref: &str,
) -> CoreResult<Behavior> {
    let Some(operation) = resolver.operations.get(operation_ref) else {
        resolver.warn(
            task,
            DiagnosticKind::UnknownOperation {
                operation_ref: operation_ref.to_string(),
            },
        );
        return Ok(Behavior::Unconfigured);
    };

    let mut behavior = resolver.factory.create_web_service_behavior(task);
    behavior.set_operation(operation.clone());

    if let Some(io_specification) = &task.io_specification {
        behavior.set_io_specification(
            resolver
                .wiring
                .create_io_specification(io_specification)
                .map_err(|error| error.for_task(&task.id))?,
        );
    }

    for association in &task.data_input_associations {
        behavior.add_data_input_association(
            resolver
                .wiring
                .create_data_input_association(association)
                .map_err(|error| error.for_task(&task.id))?,
        );
    }

    for association in &task.data_output_associations {
        behavior.add_data_output_association(
            resolver
                .wiring
                .create_data_output_association(association)
                .map_err(|error| error.for_task(&task.id))?,
        );
    }

    tracing::debug!(
        task_id = %task.id,
        operation = %operation.id,
        inputs = behavior.data_input_associations.len(),
        outputs = behavior.data_output_associations.len(),
        "bound web service task"
    );

    Ok(Behavior::WebService(behavior))
}
