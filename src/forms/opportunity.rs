use serde::Deserialize;
use validator::Validate;

use crate::domain::lead::Lead;
use crate::domain::opportunity::OpportunityStage;
use crate::forms::FormError;

#[derive(Clone, Debug, Deserialize, Validate)]
/// Conversion dialog input.
///
/// `amount` carries the raw text of the input so an empty field can mean
/// "no amount" while anything unparseable is rejected before any write.
pub struct ConvertLeadForm {
    /// Opportunity name.
    #[validate(length(min = 1))]
    pub name: String,
    /// Pipeline stage, as selected in the UI.
    pub stage: String,
    /// Raw amount text; empty means the opportunity has no amount yet.
    #[serde(default)]
    pub amount: String,
    /// Account the opportunity is booked under.
    #[validate(length(min = 1))]
    pub account_name: String,
}

impl ConvertLeadForm {
    /// Default dialog contents for converting `lead`.
    pub fn prefill(lead: &Lead) -> Self {
        Self {
            name: format!("{} - {} Opportunity", lead.name, lead.company),
            stage: OpportunityStage::Qualification.to_string(),
            amount: String::new(),
            account_name: lead.company.clone(),
        }
    }

    /// Parses the stage selector value.
    pub fn stage(&self) -> Result<OpportunityStage, FormError> {
        Ok(self.stage.parse()?)
    }

    /// Parses the raw amount field; empty input means no amount.
    pub fn parsed_amount(&self) -> Result<Option<f64>, FormError> {
        let raw = self.amount.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(Some(amount)),
            _ => Err(FormError::InvalidAmount),
        }
    }
}
