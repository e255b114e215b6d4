use std::sync::atomic::{AtomicUsize, Ordering};

use taskwire_core::BehaviorResolver;
use taskwire_core::diagnostics::{CollectingDiagnostics, DiagnosticKind};
use taskwire_core::factory::DefaultBehaviorFactory;
use taskwire_core::models::{
    Behavior, CoreError, CoreErrorKind, CoreResult, DataAssociation, DataAssociationDefinition,
    DataSpec, Implementation, IoSpecification, IoSpecificationDefinition, ItemDefinition,
    ItemDefinitionTable, Operation, OperationTable, ServiceTaskDefinition,
};
use taskwire_core::wiring::{DataWiring, ItemDefinitionWiring};

fn operations() -> OperationTable {
    let mut charge = Operation::new("charge");
    charge.name = Some("Charge card".to_string());
    charge.interface_id = Some("billing".to_string());
    OperationTable::try_from(vec![charge, Operation::new("refund")]).unwrap()
}

fn web_service_task(id: &str, operation_ref: &str) -> ServiceTaskDefinition {
    ServiceTaskDefinition::new(id).implementation(Implementation::WebService {
        operation_ref: Some(operation_ref.to_string()),
    })
}

/// Counts transform calls so tests can prove nothing was wired.
#[derive(Default)]
struct CountingWiring {
    calls: AtomicUsize,
    fail_outputs: bool,
}

impl DataWiring for CountingWiring {
    fn create_io_specification(
        &self,
        _definition: &IoSpecificationDefinition,
    ) -> CoreResult<IoSpecification> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(IoSpecification::default())
    }

    fn create_data_input_association(
        &self,
        definition: &DataAssociationDefinition,
    ) -> CoreResult<DataAssociation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(DataAssociation::MessageImplicitInput {
            source: definition.source_ref.clone(),
            target: definition.target_ref.clone(),
        })
    }

    fn create_data_output_association(
        &self,
        definition: &DataAssociationDefinition,
    ) -> CoreResult<DataAssociation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_outputs {
            return Err(CoreError::parse_failure("broken output association"));
        }
        Ok(DataAssociation::MessageImplicitOutput {
            source: definition.source_ref.clone(),
            target: definition.target_ref.clone(),
        })
    }
}

#[test]
fn dangling_operation_reference_degrades_without_wiring() {
    let operations = operations();
    let wiring = CountingWiring::default();
    let diagnostics = CollectingDiagnostics::new();
    let resolver =
        BehaviorResolver::new(&operations, &DefaultBehaviorFactory, &wiring, &diagnostics);

    let task = web_service_task("pay", "tns:missing")
        .io_specification(IoSpecificationDefinition::default())
        .data_input(DataAssociationDefinition::new(Some("a"), Some("b")));

    let behavior = resolver.resolve(&task).unwrap();

    assert_eq!(behavior, Behavior::Unconfigured);
    assert_eq!(wiring.calls.load(Ordering::SeqCst), 0);

    let diagnostics = diagnostics.snapshot();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].kind,
        DiagnosticKind::UnknownOperation {
            operation_ref: "tns:missing".to_string()
        }
    );
    assert!(diagnostics[0].to_string().contains("tns:missing"));
    assert!(diagnostics[0].to_string().contains("pay"));
}

#[test]
fn bound_operation_equals_table_entry() {
    let operations = operations();
    let wiring = CountingWiring::default();
    let diagnostics = CollectingDiagnostics::new();
    let resolver =
        BehaviorResolver::new(&operations, &DefaultBehaviorFactory, &wiring, &diagnostics);

    let behavior = resolver.resolve(&web_service_task("pay", "charge")).unwrap();
    let web_service = behavior.as_web_service().unwrap();

    assert_eq!(web_service.task_id, "pay");
    assert_eq!(web_service.operation.as_ref(), operations.get("charge"));
    assert!(web_service.io_specification.is_none());
    assert!(web_service.data_input_associations.is_empty());
    assert!(web_service.data_output_associations.is_empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn associations_keep_document_order_and_counts() {
    let operations = operations();
    let wiring = CountingWiring::default();
    let diagnostics = CollectingDiagnostics::new();
    let resolver =
        BehaviorResolver::new(&operations, &DefaultBehaviorFactory, &wiring, &diagnostics);

    let task = web_service_task("pay", "charge")
        .data_input(DataAssociationDefinition::new(Some("card"), Some("cardIn")))
        .data_input(DataAssociationDefinition::new(Some("amount"), Some("amountIn")))
        .data_input(DataAssociationDefinition::new(Some("amount"), Some("amountIn")))
        .data_output(DataAssociationDefinition::new(Some("receiptOut"), Some("receipt")));

    let behavior = resolver.resolve(&task).unwrap();
    let web_service = behavior.as_web_service().unwrap();

    let inputs: Vec<_> = web_service
        .data_input_associations
        .iter()
        .map(|association| (association.source(), association.target()))
        .collect();
    assert_eq!(
        inputs,
        vec![
            (Some("card"), Some("cardIn")),
            (Some("amount"), Some("amountIn")),
            (Some("amount"), Some("amountIn")),
        ]
    );

    assert_eq!(web_service.data_output_associations.len(), 1);
    assert_eq!(web_service.data_output_associations[0].target(), Some("receipt"));
    assert_eq!(wiring.calls.load(Ordering::SeqCst), 4);
}

#[test]
fn io_specification_is_attached_when_declared() {
    let operations = operations();
    let items: ItemDefinitionTable = [(
        "cardItem".to_string(),
        ItemDefinition {
            id: "cardItem".to_string(),
            structure_ref: Some("xsd:string".to_string()),
        },
    )]
    .into_iter()
    .collect();
    let wiring = ItemDefinitionWiring::new("urn:billing", &items);
    let diagnostics = CollectingDiagnostics::new();
    let resolver =
        BehaviorResolver::new(&operations, &DefaultBehaviorFactory, &wiring, &diagnostics);

    let task = web_service_task("pay", "charge").io_specification(IoSpecificationDefinition {
        data_inputs: vec![DataSpec::new("cardIn").item_subject_ref("cardItem")],
        data_outputs: vec![DataSpec::new("receiptOut")],
        data_input_refs: vec!["cardIn".to_string()],
        data_output_refs: vec!["receiptOut".to_string()],
    });

    let behavior = resolver.resolve(&task).unwrap();
    let io = behavior
        .as_web_service()
        .and_then(|web_service| web_service.io_specification.as_ref())
        .unwrap();

    assert_eq!(io.inputs[0].id, "urn:billing:cardIn");
    assert_eq!(io.inputs[0].definition, items.get("cardItem").cloned());
    assert_eq!(io.outputs[0].name, "receiptOut");
}

#[test]
fn transform_failures_propagate_with_task_context() {
    let operations = operations();
    let wiring = CountingWiring {
        fail_outputs: true,
        ..CountingWiring::default()
    };
    let diagnostics = CollectingDiagnostics::new();
    let resolver =
        BehaviorResolver::new(&operations, &DefaultBehaviorFactory, &wiring, &diagnostics);

    let task = web_service_task("pay", "refund")
        .data_output(DataAssociationDefinition::new(None, Some("receipt")));

    let error = resolver.resolve(&task).unwrap_err();
    assert_eq!(error.kind, CoreErrorKind::ParseFailure);
    assert_eq!(error.task.as_deref(), Some("pay"));
    assert!(diagnostics.is_empty());
}
