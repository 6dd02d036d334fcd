//! JSON output for allocation plans.

use crate::models::AllocationPlan;
use serde::Serialize;

/// A plan with the time it was generated.
#[derive(Serialize, Debug)]
pub struct PlanReport<'a> {
    pub generated_at: String,
    #[serde(flatten)]
    pub plan: &'a AllocationPlan,
}

impl<'a> PlanReport<'a> {
    pub fn new(plan: &'a AllocationPlan) -> PlanReport<'a> {
        PlanReport {
            generated_at: chrono::Local::now().to_rfc3339(),
            plan,
        }
    }
}

/// Render the plan as pretty printed JSON.
pub fn render_json(plan: &AllocationPlan) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&PlanReport::new(plan))
}
