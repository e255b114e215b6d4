use crate::definition::ProcessDocument;
use crate::diagnostics::DiagnosticSink;
use crate::factory::BehaviorFactory;
use crate::models::{CoreResult, ServiceTaskDefinition};
use crate::registry::{ActivityNode, ActivityRegistry};
use crate::resolver::BehaviorResolver;
use crate::wiring::ItemDefinitionWiring;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseSummary {
    pub process_id: Option<String>,
    pub activities: usize,
    pub inert_activities: Vec<String>,
}

pub struct ServiceTaskParser<'a> {
    resolver: BehaviorResolver<'a>,
    registry: &'a dyn ActivityRegistry,
}

impl<'a> ServiceTaskParser<'a> {
    pub fn new(resolver: BehaviorResolver<'a>, registry: &'a dyn ActivityRegistry) -> Self {
        Self { resolver, registry }
    }

    /// Registers the activity for `task`, then resolves and attaches its
    /// behavior. Returns whether the attached behavior is inert.
    pub fn parse_service_task(&self, task: &ServiceTaskDefinition) -> CoreResult<bool> {
        self.registry
            .create_activity(ActivityNode::for_service_task(task))?;

        let behavior = self.resolver.resolve(task)?;
        let inert = behavior.is_inert();
        self.registry.set_behavior(&task.id, behavior)?;

        Ok(inert)
    }
}

/// Parses every service task of `document` in document order. A malformed
/// task aborts the whole parse; configuration gaps only produce diagnostics.
pub fn parse_process_document(
    document: &ProcessDocument,
    factory: &dyn BehaviorFactory,
    registry: &dyn ActivityRegistry,
    diagnostics: &dyn DiagnosticSink,
) -> CoreResult<ParseSummary> {
    let wiring = ItemDefinitionWiring::new(&document.target_namespace, &document.item_definitions);
    let resolver = BehaviorResolver::new(&document.operations, factory, &wiring, diagnostics);
    let parser = ServiceTaskParser::new(resolver, registry);

    let mut summary = ParseSummary {
        process_id: document.process_id.clone(),
        ..ParseSummary::default()
    };

    for task in &document.service_tasks {
        if parser.parse_service_task(task)? {
            summary.inert_activities.push(task.id.clone());
        }
        summary.activities += 1;
    }

    tracing::info!(
        process_id = document.process_id.as_deref().unwrap_or("<anonymous>"),
        activities = summary.activities,
        inert = summary.inert_activities.len(),
        "parsed service tasks"
    );

    Ok(summary)
}
