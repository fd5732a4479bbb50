use todo_domain::Plan;

use crate::{error::ValidationError, CoreError};

/// Positional operations over a category's in-memory plan list.
pub struct PlanService;

impl PlanService {
    /// Appends a plan and returns its index.
    pub fn add(plans: &mut Vec<Plan>, plan: Plan) -> Result<usize, CoreError> {
        Self::ensure_description(&plan)?;
        plans.push(plan);
        Ok(plans.len() - 1)
    }

    /// Replaces the plan at `index`, keeping its position.
    pub fn update(plans: &mut [Plan], index: usize, plan: Plan) -> Result<(), CoreError> {
        Self::ensure_description(&plan)?;
        let slot = plans.get_mut(index).ok_or(CoreError::PlanNotFound(index))?;
        *slot = plan;
        Ok(())
    }

    /// Removes and returns the plan at `index`.
    pub fn remove(plans: &mut Vec<Plan>, index: usize) -> Result<Plan, CoreError> {
        if index >= plans.len() {
            return Err(CoreError::PlanNotFound(index));
        }
        Ok(plans.remove(index))
    }

    pub fn get(plans: &[Plan], index: usize) -> Result<&Plan, CoreError> {
        plans.get(index).ok_or(CoreError::PlanNotFound(index))
    }

    fn ensure_description(plan: &Plan) -> Result<(), CoreError> {
        if plan.has_description() {
            Ok(())
        } else {
            Err(ValidationError::new("Description cannot be empty").into())
        }
    }
}
