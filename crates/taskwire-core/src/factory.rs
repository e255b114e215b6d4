use crate::models::{
    CamelBehavior, ClassDelegateBehavior, DelegateExpressionBehavior, ExpressionBehavior,
    MailBehavior, MuleBehavior, ServiceTaskDefinition, ShellBehavior, WebServiceBehavior,
};

const SHELL_MAX_ARGS: usize = 64;

/// Construction hooks for every behavior variant the resolver can select.
/// Construction is infallible here; a factory that needs to fail should
/// surface it when the behavior runs.
pub trait BehaviorFactory: Send + Sync {
    fn create_mail_behavior(&self, task: &ServiceTaskDefinition) -> MailBehavior;

    fn create_mule_behavior(&self, task: &ServiceTaskDefinition) -> MuleBehavior;

    fn create_camel_behavior(&self, task: &ServiceTaskDefinition) -> CamelBehavior;

    fn create_shell_behavior(&self, task: &ServiceTaskDefinition) -> ShellBehavior;

    fn create_class_delegate_behavior(
        &self,
        task: &ServiceTaskDefinition,
        class_name: &str,
    ) -> ClassDelegateBehavior;

    fn create_delegate_expression_behavior(
        &self,
        task: &ServiceTaskDefinition,
        expression: &str,
    ) -> DelegateExpressionBehavior;

    fn create_expression_behavior(
        &self,
        task: &ServiceTaskDefinition,
        expression: &str,
    ) -> ExpressionBehavior;

    fn create_web_service_behavior(&self, task: &ServiceTaskDefinition) -> WebServiceBehavior;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultBehaviorFactory;

impl BehaviorFactory for DefaultBehaviorFactory {
    fn create_mail_behavior(&self, task: &ServiceTaskDefinition) -> MailBehavior {
        MailBehavior {
            fields: task.field_extensions.clone(),
        }
    }

    fn create_mule_behavior(&self, task: &ServiceTaskDefinition) -> MuleBehavior {
        MuleBehavior {
            endpoint_url: owned_field(task, "endpointUrl"),
            language: owned_field(task, "language"),
            payload_expression: owned_field(task, "payloadExpression"),
            result_variable: owned_field(task, "resultVariable"),
        }
    }

    fn create_camel_behavior(&self, task: &ServiceTaskDefinition) -> CamelBehavior {
        CamelBehavior {
            camel_context: owned_field(task, "camelContext"),
            fields: task.field_extensions.clone(),
        }
    }

    fn create_shell_behavior(&self, task: &ServiceTaskDefinition) -> ShellBehavior {
        // arg1..argN stop at the first gap
        let args = (1..=SHELL_MAX_ARGS)
            .map(|position| task.field_value(&format!("arg{position}")))
            .take_while(Option::is_some)
            .flatten()
            .map(str::to_string)
            .collect();

        ShellBehavior {
            command: owned_field(task, "command"),
            args,
            wait: flag_field(task, "wait", true),
            output_variable: owned_field(task, "outputVariable"),
            error_code_variable: owned_field(task, "errorCodeVariable"),
            redirect_error: flag_field(task, "redirectError", false),
            clean_env: flag_field(task, "cleanEnv", false),
            directory: owned_field(task, "directory"),
        }
    }

    fn create_class_delegate_behavior(
        &self,
        task: &ServiceTaskDefinition,
        class_name: &str,
    ) -> ClassDelegateBehavior {
        ClassDelegateBehavior {
            class_name: class_name.to_string(),
            fields: task.field_extensions.clone(),
        }
    }

    fn create_delegate_expression_behavior(
        &self,
        task: &ServiceTaskDefinition,
        expression: &str,
    ) -> DelegateExpressionBehavior {
        DelegateExpressionBehavior {
            expression: expression.to_string(),
            fields: task.field_extensions.clone(),
        }
    }

    fn create_expression_behavior(
        &self,
        task: &ServiceTaskDefinition,
        expression: &str,
    ) -> ExpressionBehavior {
        ExpressionBehavior {
            expression: expression.to_string(),
            result_variable: task.result_variable.clone(),
        }
    }

    fn create_web_service_behavior(&self, task: &ServiceTaskDefinition) -> WebServiceBehavior {
        WebServiceBehavior::new(&task.id)
    }
}

fn owned_field(task: &ServiceTaskDefinition, name: &str) -> Option<String> {
    task.field_value(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn flag_field(task: &ServiceTaskDefinition, name: &str, default: bool) -> bool {
    match task.field_value(name).map(str::trim) {
        Some(value) if value.eq_ignore_ascii_case("true") => true,
        Some(value) if value.eq_ignore_ascii_case("false") => false,
        _ => default,
    }
}
