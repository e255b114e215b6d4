mod web_service;

use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::factory::BehaviorFactory;
use crate::models::{Behavior, CoreResult, Implementation, OperationTable, ServiceTaskDefinition};
use crate::wiring::DataWiring;

/// Picks the one behavior a service task definition resolves to.
///
/// Precedence, first match wins:
/// 1. a non-empty type tag (`mail`, `mule`, `camel`, `shell`, anything else is unresolved)
/// 2. class reference
/// 3. delegate expression
/// 4. expression
/// 5. web service with a non-empty operation reference
/// 6. nothing usable: `Unconfigured`
///
/// Configuration gaps never fail: they produce an inert behavior and one
/// diagnostic. Only the web-service wiring step can return an error.
pub struct BehaviorResolver<'a> {
    operations: &'a OperationTable,
    factory: &'a dyn BehaviorFactory,
    wiring: &'a dyn DataWiring,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> BehaviorResolver<'a> {
    pub fn new(
        operations: &'a OperationTable,
        factory: &'a dyn BehaviorFactory,
        wiring: &'a dyn DataWiring,
        diagnostics: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            operations,
            factory,
            wiring,
            diagnostics,
        }
    }

    pub fn resolve(&self, task: &ServiceTaskDefinition) -> CoreResult<Behavior> {
        if let Some(task_type) = task.declared_type() {
            return Ok(self.resolve_task_type(task, task_type));
        }

        let behavior = match &task.implementation {
            Implementation::Class(class_name) => Behavior::ClassDelegate(
                self.factory.create_class_delegate_behavior(task, class_name),
            ),
            Implementation::DelegateExpression(expression) => Behavior::DelegateExpression(
                self.factory
                    .create_delegate_expression_behavior(task, expression),
            ),
            Implementation::Expression(expression) => Behavior::Expression(
                self.factory.create_expression_behavior(task, expression),
            ),
            Implementation::WebService {
                operation_ref: Some(operation_ref),
            } if !operation_ref.is_empty() => {
                return web_service::bind(self, task, operation_ref);
            }
            Implementation::WebService { .. } | Implementation::None => {
                self.warn(task, DiagnosticKind::MissingImplementation);
                Behavior::Unconfigured
            }
        };

        tracing::debug!(
            task_id = %task.id,
            behavior = behavior.kind().as_str(),
            "resolved service task"
        );
        Ok(behavior)
    }

    fn resolve_task_type(&self, task: &ServiceTaskDefinition, task_type: &str) -> Behavior {
        let behavior = if task_type.eq_ignore_ascii_case("mail") {
            Behavior::Mail(self.factory.create_mail_behavior(task))
        } else if task_type.eq_ignore_ascii_case("mule") {
            Behavior::Mule(self.factory.create_mule_behavior(task))
        } else if task_type.eq_ignore_ascii_case("camel") {
            Behavior::Camel(self.factory.create_camel_behavior(task))
        } else if task_type.eq_ignore_ascii_case("shell") {
            Behavior::Shell(self.factory.create_shell_behavior(task))
        } else {
            // an unknown tag still shadows every other configuration axis
            self.warn(
                task,
                DiagnosticKind::InvalidTaskType {
                    type_name: task_type.to_string(),
                },
            );
            Behavior::CustomTypeUnresolved {
                type_name: task_type.to_string(),
            }
        };

        tracing::debug!(
            task_id = %task.id,
            behavior = behavior.kind().as_str(),
            "resolved typed service task"
        );
        behavior
    }

    fn warn(&self, task: &ServiceTaskDefinition, kind: DiagnosticKind) {
        self.diagnostics.emit(Diagnostic::warning(&task.id, kind));
    }
}
