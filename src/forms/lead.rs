use serde::Deserialize;
use validator::Validate;

use crate::domain::lead::{Lead, LeadStatus, UpdateLead};
use crate::forms::FormError;

#[derive(Clone, Debug, Deserialize, Validate)]
/// Inline edit of a lead's two mutable fields.
pub struct SaveLeadForm {
    /// Lead identifier.
    pub id: i64,
    /// Updated contact email.
    #[validate(email)]
    pub email: String,
    /// Updated pipeline status, as selected in the UI.
    pub status: String,
}

impl SaveLeadForm {
    /// Validates the form and produces the patch of fields that actually
    /// differ from `current`; an unchanged form yields an empty patch.
    pub fn into_update(self, current: &Lead) -> Result<UpdateLead, FormError> {
        self.validate()?;
        let status: LeadStatus = self.status.parse()?;

        let mut updates = UpdateLead::default();
        if self.email != current.email {
            updates.email = Some(self.email);
        }
        if status != current.status {
            updates.status = Some(status);
        }
        Ok(updates)
    }
}
