//! In-memory repositories and their persisted filter configuration.

use serde::{Deserialize, Serialize};

use crate::domain::lead::LeadStatus;

pub mod errors;
pub mod lead;
pub mod opportunity;

pub use lead::LeadRepository;
pub use opportunity::OpportunityRepository;

/// Default page size for the lead table.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Status selector above the lead table: everything, or one status.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    New,
    Contacted,
    Qualified,
    Lost,
}

impl StatusFilter {
    /// Whether a lead with `status` passes this filter.
    pub fn matches(self, status: LeadStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::New => status == LeadStatus::New,
            StatusFilter::Contacted => status == LeadStatus::Contacted,
            StatusFilter::Qualified => status == LeadStatus::Qualified,
            StatusFilter::Lost => status == LeadStatus::Lost,
        }
    }
}

impl From<LeadStatus> for StatusFilter {
    fn from(status: LeadStatus) -> Self {
        match status {
            LeadStatus::New => StatusFilter::New,
            LeadStatus::Contacted => StatusFilter::Contacted,
            LeadStatus::Qualified => StatusFilter::Qualified,
            LeadStatus::Lost => StatusFilter::Lost,
        }
    }
}

/// Field the lead table is ordered by.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Descending by qualification score.
    #[default]
    Score,
    /// Ascending by lead name.
    Name,
    /// Ascending by company name.
    Company,
}

/// Filter, sort and pagination configuration, persisted across sessions
/// under the `leadFilters` key.
///
/// Every field defaults individually so a configuration written by an older
/// version still rehydrates.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadFilters {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub sort_by: SortField,
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for LeadFilters {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            sort_by: SortField::Score,
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}
