use validator::Validate;

use crate::domain::opportunity::{NewOpportunity, Opportunity};
use crate::forms::FormError;
use crate::forms::opportunity::ConvertLeadForm;
use crate::repository::{LeadRepository, OpportunityRepository};
use crate::services::{ServiceError, ServiceResult};
use crate::storage::KeyValueStore;

/// Converts a lead into an opportunity.
///
/// Two sequential writes, not a transaction: the opportunity is created
/// first, then the source lead is deleted. The deletion only runs once the
/// creation has persisted, so a step-one failure leaves the lead untouched.
/// A failed deletion leaves both records in place and is reported to the
/// caller; there is no compensating rollback.
pub fn convert_lead<S: KeyValueStore>(
    leads: &mut LeadRepository<S>,
    opportunities: &mut OpportunityRepository<S>,
    lead_id: i64,
    form: ConvertLeadForm,
) -> ServiceResult<Opportunity> {
    form.validate().map_err(FormError::from)?;
    let stage = form.stage()?;
    let amount = form.parsed_amount()?;

    if leads.get(lead_id).is_none() {
        return Err(ServiceError::LeadNotFound(lead_id));
    }

    let created = opportunities.add(NewOpportunity {
        name: form.name,
        stage,
        amount,
        account_name: form.account_name,
        lead_id,
    })?;

    leads.remove(lead_id)?;

    Ok(created)
}
