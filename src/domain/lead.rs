use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A prospective customer with a qualification score and pipeline status.
///
/// Only `email` and `status` are mutable after creation; everything else is
/// fixed by the originating seed or import.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub company: String,
    pub email: String,
    pub source: String,
    /// Qualification score in the 0-100 range.
    pub score: u8,
    pub status: LeadStatus,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Lost,
}

impl Display for LeadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadStatus::New => write!(f, "new"),
            LeadStatus::Contacted => write!(f, "contacted"),
            LeadStatus::Qualified => write!(f, "qualified"),
            LeadStatus::Lost => write!(f, "lost"),
        }
    }
}

impl FromStr for LeadStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "qualified" => Ok(LeadStatus::Qualified),
            "lost" => Ok(LeadStatus::Lost),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

/// Partial patch over the two fields a lead allows editing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateLead {
    pub email: Option<String>,
    pub status: Option<LeadStatus>,
}

impl UpdateLead {
    /// True when the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.status.is_none()
    }

    /// Applies the patch in place, leaving absent fields untouched.
    pub fn apply(&self, lead: &mut Lead) {
        if let Some(email) = &self.email {
            lead.email = email.clone();
        }
        if let Some(status) = self.status {
            lead.status = status;
        }
    }
}
