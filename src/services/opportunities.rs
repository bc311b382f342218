use serde::Serialize;

use crate::domain::opportunity::Opportunity;

/// Aggregate numbers for the opportunities dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OpportunityStats {
    pub total: usize,
    /// Opportunities whose stage is neither closed-won nor closed-lost.
    pub open: usize,
    /// Sum of every recorded amount.
    pub pipeline_amount: f64,
}

/// Computes dashboard stats over `opportunities`.
pub fn opportunity_stats(opportunities: &[Opportunity]) -> OpportunityStats {
    OpportunityStats {
        total: opportunities.len(),
        open: opportunities.iter().filter(|o| o.stage.is_open()).count(),
        pipeline_amount: opportunities.iter().filter_map(|o| o.amount).sum(),
    }
}
