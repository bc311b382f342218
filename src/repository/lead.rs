use std::cmp::Ordering;

use log::warn;

use crate::domain::lead::{Lead, UpdateLead};
use crate::pagination::Paginated;
use crate::repository::errors::{ErrorCode, RepositoryError, RepositoryResult};
use crate::repository::{LeadFilters, SortField, StatusFilter};
use crate::storage::{KeyValueStore, LEAD_FILTERS_KEY, LEADS_KEY};

/// Bundled seed dataset used when no lead collection has been persisted yet.
const SEED_LEADS: &str = include_str!("../../data/leads.json");

/// Owns the authoritative lead collection and the active filter
/// configuration. Every view of the data is derived on demand from those
/// two inputs; nothing derived is cached.
pub struct LeadRepository<S> {
    store: S,
    leads: Vec<Lead>,
    filters: LeadFilters,
}

impl<S: KeyValueStore> LeadRepository<S> {
    /// Creates an empty repository; call [`load`](Self::load) to hydrate it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            leads: Vec::new(),
            filters: LeadFilters::default(),
        }
    }

    /// Reads the persisted filter configuration and lead collection.
    ///
    /// An absent or unreadable filter entry falls back to defaults; an
    /// absent lead collection falls back to the bundled seed. A storage or
    /// parse failure on the collection itself leaves the list empty and
    /// surfaces as a load error.
    pub fn load(&mut self) -> RepositoryResult<()> {
        self.leads.clear();

        self.filters = match self.store.get(LEAD_FILTERS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(filters) => filters,
                Err(e) => {
                    warn!("discarding unreadable filter configuration: {e}");
                    LeadFilters::default()
                }
            },
            Ok(None) => LeadFilters::default(),
            Err(e) => {
                return Err(
                    RepositoryError::with_context(ErrorCode::LoadFailed, "lead filters")
                        .caused_by(e),
                );
            }
        };

        let raw = self
            .store
            .get(LEADS_KEY)
            .map_err(|e| RepositoryError::with_context(ErrorCode::LoadFailed, "leads").caused_by(e))?;

        self.leads = match raw {
            Some(payload) => serde_json::from_str(&payload).map_err(|e| {
                RepositoryError::with_context(ErrorCode::LoadFailed, "leads").caused_by(e)
            })?,
            None => serde_json::from_str(SEED_LEADS).map_err(|e| {
                RepositoryError::with_context(ErrorCode::LoadFailed, "seed leads").caused_by(e)
            })?,
        };

        Ok(())
    }

    /// The lead with `id`, if it is still present.
    pub fn get(&self, id: i64) -> Option<&Lead> {
        self.leads.iter().find(|lead| lead.id == id)
    }

    /// The full filtered and sorted collection, independent of paging.
    /// Stats that must reflect every matching lead read this, not a page.
    pub fn filtered(&self) -> Vec<Lead> {
        filter_and_sort(&self.leads, &self.filters)
    }

    /// The current page of the filtered, sorted collection.
    pub fn page(&self) -> Paginated<Lead> {
        let filtered = self.filtered();
        let total_items = filtered.len();
        let per_page = self.filters.items_per_page.max(1);
        let page = self.filters.current_page.max(1);
        let total_pages = (total_items + per_page - 1) / per_page;

        let items = filtered
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Paginated::new(items, page, total_items, total_pages)
    }

    /// Number of leads in the filtered set.
    pub fn total_items(&self) -> usize {
        self.filtered().len()
    }

    /// Number of pages the filtered set spans at the current page size.
    pub fn total_pages(&self) -> usize {
        let per_page = self.filters.items_per_page.max(1);
        (self.total_items() + per_page - 1) / per_page
    }

    /// Applies a partial patch to the lead with `id` and persists the whole
    /// collection. The in-memory list only changes once the write has
    /// succeeded. Returns `Ok(None)` when no lead carries that id.
    pub fn update(&mut self, id: i64, updates: &UpdateLead) -> RepositoryResult<Option<Lead>> {
        let Some(index) = self.leads.iter().position(|lead| lead.id == id) else {
            return Ok(None);
        };

        let mut next = self.leads.clone();
        updates.apply(&mut next[index]);
        self.persist(&next, ErrorCode::UpdateFailed, &format!("lead {id}"))?;

        self.leads = next;
        Ok(Some(self.leads[index].clone()))
    }

    /// Deletes the lead with `id` and persists the resulting collection;
    /// a no-op when the id is unknown.
    pub fn remove(&mut self, id: i64) -> RepositoryResult<()> {
        if !self.leads.iter().any(|lead| lead.id == id) {
            return Ok(());
        }

        let next: Vec<Lead> = self
            .leads
            .iter()
            .filter(|lead| lead.id != id)
            .cloned()
            .collect();
        self.persist(&next, ErrorCode::DeleteFailed, &format!("lead {id}"))?;

        self.leads = next;
        Ok(())
    }

    /// The active filter configuration.
    pub fn filters(&self) -> &LeadFilters {
        &self.filters
    }

    /// Free-text search over lead name and company; resets to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> RepositoryResult<()> {
        self.filters.search_term = term.into();
        self.filters.current_page = 1;
        self.persist_filters()
    }

    /// Restricts the table to one status; resets to the first page.
    pub fn set_status_filter(&mut self, status_filter: StatusFilter) -> RepositoryResult<()> {
        self.filters.status_filter = status_filter;
        self.filters.current_page = 1;
        self.persist_filters()
    }

    /// Reorders the table. Changing the sort keeps the current page.
    pub fn set_sort_by(&mut self, sort_by: SortField) -> RepositoryResult<()> {
        self.filters.sort_by = sort_by;
        self.persist_filters()
    }

    /// Moves to `page`, clamped to at least the first page.
    pub fn set_current_page(&mut self, page: usize) -> RepositoryResult<()> {
        self.filters.current_page = page.max(1);
        self.persist_filters()
    }

    /// Changes the page size; resets to the first page.
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> RepositoryResult<()> {
        if items_per_page == 0 {
            return Err(RepositoryError::with_context(
                ErrorCode::ValidationError,
                "items per page must be positive",
            ));
        }
        self.filters.items_per_page = items_per_page;
        self.filters.current_page = 1;
        self.persist_filters()
    }

    fn persist(&self, leads: &[Lead], code: ErrorCode, context: &str) -> RepositoryResult<()> {
        let payload = serde_json::to_string(leads)
            .map_err(|e| RepositoryError::with_context(code, context).caused_by(e))?;
        self.store
            .set(LEADS_KEY, &payload)
            .map_err(|e| RepositoryError::with_context(code, context).caused_by(e))
    }

    fn persist_filters(&self) -> RepositoryResult<()> {
        let payload = serde_json::to_string(&self.filters).map_err(|e| {
            RepositoryError::with_context(ErrorCode::SaveFailed, "lead filters").caused_by(e)
        })?;
        self.store.set(LEAD_FILTERS_KEY, &payload).map_err(|e| {
            RepositoryError::with_context(ErrorCode::SaveFailed, "lead filters").caused_by(e)
        })
    }
}

/// Pure derivation from the raw collection and filter configuration: search
/// match, status filter, then a stable sort by the configured field. Ties
/// keep the order of the previous stage.
fn filter_and_sort(leads: &[Lead], filters: &LeadFilters) -> Vec<Lead> {
    let term = filters.search_term.to_lowercase();

    let mut matched: Vec<Lead> = leads
        .iter()
        .filter(|lead| {
            term.is_empty()
                || lead.name.to_lowercase().contains(&term)
                || lead.company.to_lowercase().contains(&term)
        })
        .filter(|lead| filters.status_filter.matches(lead.status))
        .cloned()
        .collect();

    match filters.sort_by {
        SortField::Score => matched.sort_by(|a, b| b.score.cmp(&a.score)),
        SortField::Name => matched.sort_by(|a, b| caseless(&a.name, &b.name)),
        SortField::Company => matched.sort_by(|a, b| caseless(&a.company, &b.company)),
    }

    matched
}

/// Case-insensitive ordering standing in for locale-aware collation.
fn caseless(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
