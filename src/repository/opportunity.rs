use chrono::Utc;

use crate::domain::opportunity::{NewOpportunity, Opportunity, UpdateOpportunity};
use crate::repository::errors::{ErrorCode, RepositoryError, RepositoryResult};
use crate::storage::{KeyValueStore, OPPORTUNITIES_KEY};

/// Owns the in-memory opportunity collection. Records are only ever created
/// through lead conversion and are never deleted automatically.
pub struct OpportunityRepository<S> {
    store: S,
    opportunities: Vec<Opportunity>,
}

impl<S: KeyValueStore> OpportunityRepository<S> {
    /// Creates an empty repository; call [`load`](Self::load) to hydrate it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            opportunities: Vec::new(),
        }
    }

    /// Reads the persisted collection; an absent key yields an empty one.
    pub fn load(&mut self) -> RepositoryResult<()> {
        self.opportunities.clear();

        let raw = self.store.get(OPPORTUNITIES_KEY).map_err(|e| {
            RepositoryError::with_context(ErrorCode::LoadFailed, "opportunities").caused_by(e)
        })?;

        if let Some(payload) = raw {
            self.opportunities = serde_json::from_str(&payload).map_err(|e| {
                RepositoryError::with_context(ErrorCode::LoadFailed, "opportunities").caused_by(e)
            })?;
        }

        Ok(())
    }

    /// The whole in-memory collection.
    pub fn all(&self) -> &[Opportunity] {
        &self.opportunities
    }

    /// The opportunity with `id`, if present.
    pub fn get(&self, id: i64) -> Option<&Opportunity> {
        self.opportunities.iter().find(|o| o.id == id)
    }

    /// Assigns a fresh id, appends the record and persists the collection.
    /// The in-memory state is untouched when the write fails.
    pub fn add(&mut self, new_opportunity: NewOpportunity) -> RepositoryResult<Opportunity> {
        let opportunity = Opportunity {
            id: self.next_id(),
            name: new_opportunity.name,
            stage: new_opportunity.stage,
            amount: new_opportunity.amount,
            account_name: new_opportunity.account_name,
            lead_id: new_opportunity.lead_id,
        };

        let mut next = self.opportunities.clone();
        next.push(opportunity.clone());
        self.persist(
            &next,
            ErrorCode::SaveFailed,
            &format!("opportunity for lead {}", opportunity.lead_id),
        )?;

        self.opportunities = next;
        Ok(opportunity)
    }

    /// Applies a partial patch and persists; `Ok(None)` when the id is
    /// unknown.
    pub fn update(
        &mut self,
        id: i64,
        updates: &UpdateOpportunity,
    ) -> RepositoryResult<Option<Opportunity>> {
        let Some(index) = self.opportunities.iter().position(|o| o.id == id) else {
            return Ok(None);
        };

        let mut next = self.opportunities.clone();
        updates.apply(&mut next[index]);
        self.persist(&next, ErrorCode::UpdateFailed, &format!("opportunity {id}"))?;

        self.opportunities = next;
        Ok(Some(self.opportunities[index].clone()))
    }

    /// Millisecond timestamps give ids that sort by creation time; bump past
    /// the current maximum when two conversions land in the same instant.
    fn next_id(&self) -> i64 {
        let candidate = Utc::now().timestamp_millis();
        match self.opportunities.iter().map(|o| o.id).max() {
            Some(max) if candidate <= max => max + 1,
            _ => candidate,
        }
    }

    fn persist(
        &self,
        opportunities: &[Opportunity],
        code: ErrorCode,
        context: &str,
    ) -> RepositoryResult<()> {
        let payload = serde_json::to_string(opportunities)
            .map_err(|e| RepositoryError::with_context(code, context).caused_by(e))?;
        self.store
            .set(OPPORTUNITIES_KEY, &payload)
            .map_err(|e| RepositoryError::with_context(code, context).caused_by(e))
    }
}
