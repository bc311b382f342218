//! The dashboard composition: both repositories, their error state, and the
//! user actions the page exposes, with all presentation stripped away.
//!
//! Every action clears the relevant error before running and surfaces a
//! normalized message when it fails. Failures are never fatal; the console
//! stays interactive and any action can be retried.

use crate::domain::lead::Lead;
use crate::domain::opportunity::Opportunity;
use crate::dto::dashboard::{LeadDashboard, OpportunityDashboard};
use crate::error_handler::ErrorHandler;
use crate::forms::lead::SaveLeadForm;
use crate::forms::opportunity::ConvertLeadForm;
use crate::repository::errors::ErrorCode;
use crate::repository::{LeadRepository, OpportunityRepository, SortField, StatusFilter};
use crate::services;
use crate::storage::KeyValueStore;

pub struct SellerConsole<S> {
    pub leads: LeadRepository<S>,
    pub opportunities: OpportunityRepository<S>,
    pub lead_errors: ErrorHandler,
    pub opportunity_errors: ErrorHandler,
}

impl<S: KeyValueStore> SellerConsole<S> {
    /// Builds a console whose repositories share one store handle.
    pub fn new(store: S) -> Self
    where
        S: Clone,
    {
        Self {
            leads: LeadRepository::new(store.clone()),
            opportunities: OpportunityRepository::new(store),
            lead_errors: ErrorHandler::new(),
            opportunity_errors: ErrorHandler::new(),
        }
    }

    /// Hydrates both repositories. Returns whether both loads succeeded;
    /// failures land in the per-repository error state.
    pub fn load(&mut self) -> bool {
        let Self {
            leads,
            opportunities,
            lead_errors,
            opportunity_errors,
        } = self;

        let leads_ok = lead_errors
            .execute(ErrorCode::LoadFailed, Some("leads"), || leads.load())
            .is_some();
        let opportunities_ok = opportunity_errors
            .execute(ErrorCode::LoadFailed, Some("opportunities"), || {
                opportunities.load()
            })
            .is_some();

        leads_ok && opportunities_ok
    }

    /// Saves an inline lead edit. `None` means the save did not happen; the
    /// lead error state says why.
    pub fn save_lead(&mut self, form: SaveLeadForm) -> Option<Lead> {
        let Self {
            leads, lead_errors, ..
        } = self;

        let context = format!("lead {}", form.id);
        lead_errors
            .execute(ErrorCode::UpdateFailed, Some(&context), || {
                services::leads::save_lead(leads, form)
            })
            .flatten()
    }

    /// Runs the two-step conversion. On success the created opportunity is
    /// returned and the lead is gone from the table.
    pub fn convert_lead(&mut self, lead_id: i64, form: ConvertLeadForm) -> Option<Opportunity> {
        let Self {
            leads,
            opportunities,
            lead_errors,
            ..
        } = self;

        let context = format!("lead {lead_id}");
        lead_errors.execute(ErrorCode::SaveFailed, Some(&context), || {
            services::convert::convert_lead(leads, opportunities, lead_id, form)
        })
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let Self {
            leads, lead_errors, ..
        } = self;
        lead_errors
            .execute(ErrorCode::SaveFailed, Some("lead filters"), || {
                leads.set_search_term(term)
            })
            .is_some()
    }

    pub fn set_status_filter(&mut self, status_filter: StatusFilter) -> bool {
        let Self {
            leads, lead_errors, ..
        } = self;
        lead_errors
            .execute(ErrorCode::SaveFailed, Some("lead filters"), || {
                leads.set_status_filter(status_filter)
            })
            .is_some()
    }

    pub fn set_sort_by(&mut self, sort_by: SortField) -> bool {
        let Self {
            leads, lead_errors, ..
        } = self;
        lead_errors
            .execute(ErrorCode::SaveFailed, Some("lead filters"), || {
                leads.set_sort_by(sort_by)
            })
            .is_some()
    }

    pub fn set_current_page(&mut self, page: usize) -> bool {
        let Self {
            leads, lead_errors, ..
        } = self;
        lead_errors
            .execute(ErrorCode::SaveFailed, Some("lead filters"), || {
                leads.set_current_page(page)
            })
            .is_some()
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) -> bool {
        let Self {
            leads, lead_errors, ..
        } = self;
        lead_errors
            .execute(ErrorCode::SaveFailed, Some("lead filters"), || {
                leads.set_items_per_page(items_per_page)
            })
            .is_some()
    }

    /// View model for the lead console page.
    pub fn lead_dashboard(&self) -> LeadDashboard {
        let filtered = self.leads.filtered();
        LeadDashboard {
            stats: services::leads::lead_stats(&filtered),
            leads: self.leads.page(),
            filters: self.leads.filters().clone(),
        }
    }

    /// View model for the opportunities page.
    pub fn opportunity_dashboard(&self) -> OpportunityDashboard {
        let opportunities = self.opportunities.all().to_vec();
        OpportunityDashboard {
            stats: services::opportunities::opportunity_stats(&opportunities),
            opportunities,
        }
    }
}
