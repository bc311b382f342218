use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A sales-pipeline record created by converting a lead.
///
/// `lead_id` is a non-owning back-reference: once the conversion completes
/// the originating lead no longer exists.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: i64,
    pub name: String,
    pub stage: OpportunityStage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub account_name: String,
    pub lead_id: i64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum OpportunityStage {
    Qualification,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl OpportunityStage {
    /// True while the opportunity is still in play.
    pub fn is_open(self) -> bool {
        !matches!(self, OpportunityStage::ClosedWon | OpportunityStage::ClosedLost)
    }
}

impl Display for OpportunityStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OpportunityStage::Qualification => write!(f, "qualification"),
            OpportunityStage::Proposal => write!(f, "proposal"),
            OpportunityStage::Negotiation => write!(f, "negotiation"),
            OpportunityStage::ClosedWon => write!(f, "closed-won"),
            OpportunityStage::ClosedLost => write!(f, "closed-lost"),
        }
    }
}

impl FromStr for OpportunityStage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "qualification" => Ok(OpportunityStage::Qualification),
            "proposal" => Ok(OpportunityStage::Proposal),
            "negotiation" => Ok(OpportunityStage::Negotiation),
            "closed-won" => Ok(OpportunityStage::ClosedWon),
            "closed-lost" => Ok(OpportunityStage::ClosedLost),
            other => Err(DomainError::UnknownStage(other.to_string())),
        }
    }
}

/// Input for creating an opportunity; the repository assigns the id.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOpportunity {
    pub name: String,
    pub stage: OpportunityStage,
    pub amount: Option<f64>,
    pub account_name: String,
    pub lead_id: i64,
}

/// Partial patch applied to an existing opportunity.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOpportunity {
    pub name: Option<String>,
    pub stage: Option<OpportunityStage>,
    pub amount: Option<f64>,
    pub account_name: Option<String>,
}

impl UpdateOpportunity {
    /// Applies the patch in place, leaving absent fields untouched.
    pub fn apply(&self, opportunity: &mut Opportunity) {
        if let Some(name) = &self.name {
            opportunity.name = name.clone();
        }
        if let Some(stage) = self.stage {
            opportunity.stage = stage;
        }
        if let Some(amount) = self.amount {
            opportunity.amount = Some(amount);
        }
        if let Some(account_name) = &self.account_name {
            opportunity.account_name = account_name.clone();
        }
    }
}
