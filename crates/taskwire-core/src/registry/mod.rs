pub mod in_memory;

pub use in_memory::InMemoryActivityRegistry;

use crate::models::{Behavior, CoreResult, ELEMENT_TASK_SERVICE, ServiceTaskDefinition};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActivityNode {
    pub id: String,
    pub element_type: &'static str,
    pub name: Option<String>,
    pub asynchronous: bool,
    pub exclusive: bool,
    pub failed_job_retry_time_cycle: Option<String>,
    pub behavior: Option<Behavior>,
}

impl ActivityNode {
    pub fn for_service_task(task: &ServiceTaskDefinition) -> Self {
        Self {
            id: task.id.clone(),
            element_type: ELEMENT_TASK_SERVICE,
            name: task.name.clone(),
            asynchronous: task.asynchronous,
            exclusive: !task.not_exclusive,
            failed_job_retry_time_cycle: task.failed_job_retry_time_cycle.clone(),
            behavior: None,
        }
    }
}

pub trait ActivityRegistry: Send + Sync {
    fn create_activity(&self, activity: ActivityNode) -> CoreResult<()>;

    /// Attaches a behavior, replacing and returning whatever was there before.
    fn set_behavior(&self, activity_id: &str, behavior: Behavior) -> CoreResult<Option<Behavior>>;

    fn activity(&self, activity_id: &str) -> CoreResult<Option<ActivityNode>>;

    fn activities(&self) -> CoreResult<Vec<ActivityNode>>;
}
