use std::collections::HashMap;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemDefinition {
    pub id: String,
    pub structure_ref: Option<String>,
}

pub type ItemDefinitionTable = HashMap<String, ItemDefinition>;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DataSpec {
    pub id: String,
    pub name: Option<String>,
    pub item_subject_ref: Option<String>,
}

impl DataSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn item_subject_ref(mut self, item_subject_ref: impl Into<String>) -> Self {
        self.item_subject_ref = Some(item_subject_ref.into());
        self
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IoSpecificationDefinition {
    pub data_inputs: Vec<DataSpec>,
    pub data_outputs: Vec<DataSpec>,
    pub data_input_refs: Vec<String>,
    pub data_output_refs: Vec<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AssignmentDefinition {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// A data association as declared on the task element. Passed through to the
/// wiring layer untouched; nothing here validates the references.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DataAssociationDefinition {
    pub source_ref: Option<String>,
    pub target_ref: Option<String>,
    pub transformation: Option<String>,
    pub assignments: Vec<AssignmentDefinition>,
}

impl DataAssociationDefinition {
    pub fn new(source_ref: Option<&str>, target_ref: Option<&str>) -> Self {
        Self {
            source_ref: source_ref.map(str::to_string),
            target_ref: target_ref.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn transformation(mut self, transformation: impl Into<String>) -> Self {
        self.transformation = Some(transformation.into());
        self
    }

    pub fn assignment(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.assignments.push(AssignmentDefinition {
            from: Some(from.into()),
            to: Some(to.into()),
        });
        self
    }
}
