use serde::Serialize;

use crate::domain::lead::{Lead, LeadStatus};
use crate::forms::lead::SaveLeadForm;
use crate::repository::LeadRepository;
use crate::services::ServiceResult;
use crate::storage::KeyValueStore;

/// Aggregate numbers shown above the lead table, computed over the whole
/// filtered set rather than the visible page.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LeadStats {
    pub total: usize,
    pub qualified: usize,
    pub average_score: u32,
}

/// Validates the inline edit and applies only the fields that changed.
/// Unknown ids and empty patches are no-ops.
pub fn save_lead<S: KeyValueStore>(
    repo: &mut LeadRepository<S>,
    form: SaveLeadForm,
) -> ServiceResult<Option<Lead>> {
    let id = form.id;
    let Some(current) = repo.get(id) else {
        return Ok(None);
    };

    let updates = form.into_update(current)?;
    if updates.is_empty() {
        return Ok(repo.get(id).cloned());
    }

    Ok(repo.update(id, &updates)?)
}

/// Computes table stats over `leads`.
pub fn lead_stats(leads: &[Lead]) -> LeadStats {
    let total = leads.len();
    let qualified = leads
        .iter()
        .filter(|lead| lead.status == LeadStatus::Qualified)
        .count();
    let average_score = if total == 0 {
        0
    } else {
        let sum: u32 = leads.iter().map(|lead| u32::from(lead.score)).sum();
        (f64::from(sum) / total as f64).round() as u32
    };

    LeadStats {
        total,
        qualified,
        average_score,
    }
}
