use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::models::{Behavior, CoreError, CoreErrorKind, CoreResult};
use crate::registry::{ActivityNode, ActivityRegistry};

#[derive(Default)]
pub struct InMemoryActivityRegistry {
    state: Mutex<RegistryState>,
}

#[derive(Default)]
struct RegistryState {
    order: Vec<String>,
    activities: HashMap<String, ActivityNode>,
}

impl InMemoryActivityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_state(&self) -> CoreResult<MutexGuard<'_, RegistryState>> {
        self.state.lock().map_err(|_| {
            CoreError::new(
                CoreErrorKind::Internal,
                "activity registry mutex poisoned",
            )
        })
    }
}

impl ActivityRegistry for InMemoryActivityRegistry {
    fn create_activity(&self, activity: ActivityNode) -> CoreResult<()> {
        let mut state = self.lock_state()?;
        if state.activities.contains_key(&activity.id) {
            return Err(CoreError::new(
                CoreErrorKind::DuplicateKey,
                format!("activity '{}' is already registered", activity.id),
            )
            .for_task(&activity.id)
            .for_element(activity.element_type));
        }

        state.order.push(activity.id.clone());
        state.activities.insert(activity.id.clone(), activity);
        Ok(())
    }

    fn set_behavior(&self, activity_id: &str, behavior: Behavior) -> CoreResult<Option<Behavior>> {
        let mut state = self.lock_state()?;
        let activity = state
            .activities
            .get_mut(activity_id)
            .ok_or_else(|| unknown_activity(activity_id))?;

        Ok(activity.behavior.replace(behavior))
    }

    fn activity(&self, activity_id: &str) -> CoreResult<Option<ActivityNode>> {
        let state = self.lock_state()?;
        Ok(state.activities.get(activity_id).cloned())
    }

    fn activities(&self) -> CoreResult<Vec<ActivityNode>> {
        let state = self.lock_state()?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.activities.get(id).cloned())
            .collect())
    }
}

fn unknown_activity(activity_id: &str) -> CoreError {
    CoreError::new(
        CoreErrorKind::UnknownReference,
        format!("unknown activity id '{activity_id}'"),
    )
    .for_task(activity_id)
}
