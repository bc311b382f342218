use crate::domain::lead::Lead;
use crate::domain::opportunity::Opportunity;
use crate::pagination::Paginated;
use crate::repository::LeadFilters;
use crate::services::leads::LeadStats;
use crate::services::opportunities::OpportunityStats;

/// Everything the lead console needs to render: the current page, stats
/// over the whole filtered set, and the active filter configuration.
#[derive(Clone, Debug)]
pub struct LeadDashboard {
    pub leads: Paginated<Lead>,
    pub stats: LeadStats,
    pub filters: LeadFilters,
}

/// Data backing the opportunities view.
#[derive(Clone, Debug)]
pub struct OpportunityDashboard {
    pub opportunities: Vec<Opportunity>,
    pub stats: OpportunityStats,
}
