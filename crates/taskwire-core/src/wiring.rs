use crate::models::{
    Assignment, CoreError, CoreResult, Data, DataAssociation, DataAssociationDefinition, DataSpec,
    Expression, IoSpecification, IoSpecificationDefinition, ItemDefinitionTable,
};

/// Turns declared IO specifications and data associations into their bound
/// runtime form. Errors here mean the document is malformed and abort the
/// parse.
pub trait DataWiring: Send + Sync {
    fn create_io_specification(
        &self,
        definition: &IoSpecificationDefinition,
    ) -> CoreResult<IoSpecification>;

    fn create_data_input_association(
        &self,
        definition: &DataAssociationDefinition,
    ) -> CoreResult<DataAssociation>;

    fn create_data_output_association(
        &self,
        definition: &DataAssociationDefinition,
    ) -> CoreResult<DataAssociation>;
}

pub struct ItemDefinitionWiring<'a> {
    target_namespace: &'a str,
    item_definitions: &'a ItemDefinitionTable,
}

impl<'a> ItemDefinitionWiring<'a> {
    pub fn new(target_namespace: &'a str, item_definitions: &'a ItemDefinitionTable) -> Self {
        Self {
            target_namespace,
            item_definitions,
        }
    }

    fn data(&self, spec: &DataSpec) -> Data {
        let definition = spec
            .item_subject_ref
            .as_deref()
            .and_then(|item_ref| self.item_definitions.get(item_ref))
            .cloned();

        Data {
            id: format!("{}:{}", self.target_namespace, spec.id),
            name: spec.id.clone(),
            definition,
        }
    }
}

impl DataWiring for ItemDefinitionWiring<'_> {
    fn create_io_specification(
        &self,
        definition: &IoSpecificationDefinition,
    ) -> CoreResult<IoSpecification> {
        Ok(IoSpecification {
            inputs: definition.data_inputs.iter().map(|spec| self.data(spec)).collect(),
            outputs: definition.data_outputs.iter().map(|spec| self.data(spec)).collect(),
            input_refs: definition.data_input_refs.clone(),
            output_refs: definition.data_output_refs.clone(),
        })
    }

    fn create_data_input_association(
        &self,
        definition: &DataAssociationDefinition,
    ) -> CoreResult<DataAssociation> {
        if definition.assignments.is_empty() {
            return Ok(DataAssociation::MessageImplicitInput {
                source: definition.source_ref.clone(),
                target: definition.target_ref.clone(),
            });
        }

        let mut assignments = Vec::with_capacity(definition.assignments.len());
        for assignment in &definition.assignments {
            // half-specified assignments are dropped, not rejected
            let (Some(from), Some(to)) = (
                non_empty(assignment.from.as_deref()),
                non_empty(assignment.to.as_deref()),
            ) else {
                continue;
            };
            assignments.push(Assignment {
                from: Expression::parse(from)
                    .map_err(|error| association_error(definition, error))?,
                to: Expression::parse(to)
                    .map_err(|error| association_error(definition, error))?,
            });
        }

        Ok(DataAssociation::SimpleInput {
            source: definition.source_ref.clone(),
            target: definition.target_ref.clone(),
            assignments,
        })
    }

    fn create_data_output_association(
        &self,
        definition: &DataAssociationDefinition,
    ) -> CoreResult<DataAssociation> {
        if non_empty(definition.source_ref.as_deref()).is_some() {
            return Ok(DataAssociation::MessageImplicitOutput {
                source: definition.source_ref.clone(),
                target: definition.target_ref.clone(),
            });
        }

        let transformation = non_empty(definition.transformation.as_deref()).ok_or_else(|| {
            association_error(
                definition,
                CoreError::parse_failure(
                    "output association needs either a sourceRef or a transformation",
                ),
            )
        })?;

        Ok(DataAssociation::TransformationOutput {
            target: definition.target_ref.clone(),
            transformation: Expression::parse(transformation)
                .map_err(|error| association_error(definition, error))?,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn association_error(definition: &DataAssociationDefinition, error: CoreError) -> CoreError {
    match definition.target_ref.as_deref() {
        Some(target) if error.element.is_none() => error.for_element(target),
        _ => error,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{DataWiring, ItemDefinitionWiring};
    use crate::models::{
        AssignmentDefinition, CoreErrorKind, DataAssociation, DataAssociationDefinition, DataSpec,
        IoSpecificationDefinition, ItemDefinition,
    };

    fn items() -> HashMap<String, ItemDefinition> {
        HashMap::from([(
            "tns:orderItem".to_string(),
            ItemDefinition {
                id: "tns:orderItem".to_string(),
                structure_ref: Some("xsd:string".to_string()),
            },
        )])
    }

    #[test]
    fn io_specification_namespaces_data_and_resolves_items() {
        let items = items();
        let wiring = ItemDefinitionWiring::new("urn:billing", &items);
        let definition = IoSpecificationDefinition {
            data_inputs: vec![
                DataSpec::new("orderIn").item_subject_ref("tns:orderItem"),
                DataSpec::new("unknownIn").item_subject_ref("tns:nothing"),
            ],
            data_outputs: vec![DataSpec::new("receiptOut")],
            data_input_refs: vec!["orderIn".to_string(), "unknownIn".to_string()],
            data_output_refs: vec!["receiptOut".to_string()],
        };

        let spec = wiring.create_io_specification(&definition).unwrap();
        assert_eq!(spec.inputs.len(), 2);
        assert_eq!(spec.inputs[0].id, "urn:billing:orderIn");
        assert_eq!(spec.inputs[0].name, "orderIn");
        assert_eq!(
            spec.inputs[0].definition.as_ref().map(|item| item.id.as_str()),
            Some("tns:orderItem")
        );
        assert!(spec.inputs[1].definition.is_none());
        assert_eq!(spec.outputs[0].id, "urn:billing:receiptOut");
        assert_eq!(spec.input_refs, vec!["orderIn".to_string(), "unknownIn".to_string()]);
        assert_eq!(spec.output_refs, vec!["receiptOut".to_string()]);
    }

    #[test]
    fn empty_namespace_still_prefixes_data_ids() {
        let items = items();
        let wiring = ItemDefinitionWiring::new("", &items);
        let definition = IoSpecificationDefinition {
            data_inputs: vec![DataSpec::new("orderIn")],
            ..IoSpecificationDefinition::default()
        };

        let spec = wiring.create_io_specification(&definition).unwrap();
        assert_eq!(spec.inputs[0].id, ":orderIn");
        assert_eq!(spec.inputs[0].name, "orderIn");
    }

    #[test]
    fn input_without_assignments_is_message_implicit() {
        let items = items();
        let wiring = ItemDefinitionWiring::new("urn:billing", &items);
        let association = wiring
            .create_data_input_association(&DataAssociationDefinition::new(
                Some("order"),
                Some("orderIn"),
            ))
            .unwrap();

        assert_eq!(
            association,
            DataAssociation::MessageImplicitInput {
                source: Some("order".to_string()),
                target: Some("orderIn".to_string()),
            }
        );
    }

    #[test]
    fn input_assignments_skip_half_specified_entries() {
        let items = items();
        let wiring = ItemDefinitionWiring::new("urn:billing", &items);
        let mut definition = DataAssociationDefinition::new(None, Some("orderIn"))
            .assignment("${order.id}", "${orderIn.id}");
        definition.assignments.push(AssignmentDefinition {
            from: Some("${order.total}".to_string()),
            to: None,
        });

        let DataAssociation::SimpleInput { assignments, .. } =
            wiring.create_data_input_association(&definition).unwrap()
        else {
            panic!("expected a simple input association");
        };
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].from.as_str(), "${order.id}");
    }

    #[test]
    fn malformed_assignment_expression_is_fatal() {
        let items = items();
        let wiring = ItemDefinitionWiring::new("urn:billing", &items);
        let definition =
            DataAssociationDefinition::new(None, Some("orderIn")).assignment("${order.id", "${x}");

        let error = wiring.create_data_input_association(&definition).unwrap_err();
        assert_eq!(error.kind, CoreErrorKind::ParseFailure);
        assert_eq!(error.element.as_deref(), Some("orderIn"));
    }

    #[test]
    fn output_prefers_source_ref_over_transformation() {
        let items = items();
        let wiring = ItemDefinitionWiring::new("urn:billing", &items);
        let definition = DataAssociationDefinition::new(Some("receiptOut"), Some("receipt"))
            .transformation("${x}");

        let association = wiring.create_data_output_association(&definition).unwrap();
        assert!(matches!(association, DataAssociation::MessageImplicitOutput { .. }));
        assert_eq!(association.source(), Some("receiptOut"));
        assert_eq!(association.target(), Some("receipt"));
    }

    #[test]
    fn output_without_source_uses_transformation() {
        let items = items();
        let wiring = ItemDefinitionWiring::new("urn:billing", &items);
        let definition = DataAssociationDefinition::new(None, Some("receipt"))
            .transformation("${receiptOut.body}");

        let association = wiring.create_data_output_association(&definition).unwrap();
        let DataAssociation::TransformationOutput { target, transformation } = association else {
            panic!("expected a transformation output association");
        };
        assert_eq!(target.as_deref(), Some("receipt"));
        assert_eq!(transformation.as_str(), "${receiptOut.body}");
    }

    #[test]
    fn output_without_source_or_transformation_is_fatal() {
        let items = items();
        let wiring = ItemDefinitionWiring::new("urn:billing", &items);
        let error = wiring
            .create_data_output_association(&DataAssociationDefinition::new(None, Some("receipt")))
            .unwrap_err();
        assert_eq!(error.kind, CoreErrorKind::ParseFailure);
        assert_eq!(error.element.as_deref(), Some("receipt"));
    }
}
