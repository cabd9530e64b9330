use cosmwasm_schema::cw_serde;
use staking_proto::cosmos::staking::v1beta1::Description as ProtoDescription;

use crate::error::StakingError;
use crate::Result;

/// Wire sentinel marking a description field that an edit leaves untouched.
pub const DO_NOT_MODIFY_DESC: &str = "[do-not-modify]";

#[cw_serde]
#[derive(Default)]
pub struct Description {
    /// Name of the validator.
    pub moniker: String,
    /// Identity of the validator, e.g. a Keybase or UPort signature.
    pub identity: String,
    /// Website of the validator.
    pub website: String,
    /// Security contact of the validator.
    pub security_contact: String,
    /// Details of the validator.
    pub details: String,
}

impl Description {
    /// Description field lengths
    pub const MAX_MONIKER_LENGTH: usize = 70;
    pub const MAX_IDENTITY_LENGTH: usize = 3000;
    pub const MAX_WEBSITE_LENGTH: usize = 140;
    pub const MAX_SECURITY_CONTACT_LENGTH: usize = 140;
    pub const MAX_DETAILS_LENGTH: usize = 280;

    pub fn new(
        moniker: impl Into<String>,
        identity: impl Into<String>,
        website: impl Into<String>,
        security_contact: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            moniker: moniker.into(),
            identity: identity.into(),
            website: website.into(),
            security_contact: security_contact.into(),
            details: details.into(),
        }
    }

    /// Checks the field lengths. Empty fields are allowed.
    pub fn validate(&self) -> Result<()> {
        ensure_length("moniker", &self.moniker, Self::MAX_MONIKER_LENGTH)?;
        ensure_length("identity", &self.identity, Self::MAX_IDENTITY_LENGTH)?;
        ensure_length("website", &self.website, Self::MAX_WEBSITE_LENGTH)?;
        ensure_length(
            "security contact",
            &self.security_contact,
            Self::MAX_SECURITY_CONTACT_LENGTH,
        )?;
        ensure_length("details", &self.details, Self::MAX_DETAILS_LENGTH)
    }

    /// Merges a partial update into this description and validates the result.
    pub fn apply(&self, update: &DescriptionUpdate) -> Result<Description> {
        let merged = Description {
            moniker: update.moniker.resolve(&self.moniker),
            identity: update.identity.resolve(&self.identity),
            website: update.website.resolve(&self.website),
            security_contact: update.security_contact.resolve(&self.security_contact),
            details: update.details.resolve(&self.details),
        };
        merged.validate()?;
        Ok(merged)
    }
}

fn ensure_length(field: &str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(StakingError::InvalidDescription(format!(
            "invalid {field} length; got: {}, max: {max}",
            value.len()
        )));
    }
    Ok(())
}

/// A description field in an edit: either left as it is, or replaced (possibly by "").
#[cw_serde]
#[derive(Default)]
pub enum FieldUpdate {
    #[default]
    Keep,
    Set(String),
}

impl FieldUpdate {
    fn resolve(&self, current: &str) -> String {
        match self {
            FieldUpdate::Keep => current.to_string(),
            FieldUpdate::Set(value) => value.clone(),
        }
    }

    fn as_set(&self) -> Option<&str> {
        match self {
            FieldUpdate::Keep => None,
            FieldUpdate::Set(value) => Some(value),
        }
    }
}

impl From<String> for FieldUpdate {
    fn from(raw: String) -> Self {
        if raw == DO_NOT_MODIFY_DESC {
            FieldUpdate::Keep
        } else {
            FieldUpdate::Set(raw)
        }
    }
}

impl From<FieldUpdate> for String {
    fn from(field: FieldUpdate) -> Self {
        match field {
            FieldUpdate::Keep => DO_NOT_MODIFY_DESC.to_string(),
            FieldUpdate::Set(value) => value,
        }
    }
}

/// Partial description carried by an edit message.
#[cw_serde]
#[derive(Default)]
pub struct DescriptionUpdate {
    pub moniker: FieldUpdate,
    pub identity: FieldUpdate,
    pub website: FieldUpdate,
    pub security_contact: FieldUpdate,
    pub details: FieldUpdate,
}

impl DescriptionUpdate {
    /// Validates only the fields that are being replaced.
    pub fn validate(&self) -> Result<()> {
        let replaced = |f: &FieldUpdate| f.as_set().unwrap_or_default().to_string();
        Description {
            moniker: replaced(&self.moniker),
            identity: replaced(&self.identity),
            website: replaced(&self.website),
            security_contact: replaced(&self.security_contact),
            details: replaced(&self.details),
        }
        .validate()
    }
}

/// An edit that replaces every field.
impl From<Description> for DescriptionUpdate {
    fn from(d: Description) -> Self {
        Self {
            moniker: FieldUpdate::Set(d.moniker),
            identity: FieldUpdate::Set(d.identity),
            website: FieldUpdate::Set(d.website),
            security_contact: FieldUpdate::Set(d.security_contact),
            details: FieldUpdate::Set(d.details),
        }
    }
}

impl From<ProtoDescription> for Description {
    fn from(d: ProtoDescription) -> Self {
        Self {
            moniker: d.moniker,
            identity: d.identity,
            website: d.website,
            security_contact: d.security_contact,
            details: d.details,
        }
    }
}

impl From<Description> for ProtoDescription {
    fn from(d: Description) -> Self {
        Self {
            moniker: d.moniker,
            identity: d.identity,
            website: d.website,
            security_contact: d.security_contact,
            details: d.details,
        }
    }
}

impl From<ProtoDescription> for DescriptionUpdate {
    fn from(d: ProtoDescription) -> Self {
        Self {
            moniker: d.moniker.into(),
            identity: d.identity.into(),
            website: d.website.into(),
            security_contact: d.security_contact.into(),
            details: d.details.into(),
        }
    }
}

impl From<DescriptionUpdate> for ProtoDescription {
    fn from(d: DescriptionUpdate) -> Self {
        Self {
            moniker: d.moniker.into(),
            identity: d.identity.into(),
            website: d.website.into(),
            security_contact: d.security_contact.into(),
            details: d.details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn empty_and_partial_descriptions_are_valid() {
        assert!(Description::default().validate().is_ok());
        assert!(Description::new("", "", "c", "", "").validate().is_ok());
    }

    #[test]
    fn overlong_fields_are_rejected() {
        let d = Description::new("a".repeat(Description::MAX_MONIKER_LENGTH + 1), "", "", "", "");
        assert_matches!(d.validate(), Err(StakingError::InvalidDescription(_)));

        let d = Description::new("", "", "", "", "d".repeat(Description::MAX_DETAILS_LENGTH + 1));
        assert_matches!(d.validate(), Err(StakingError::InvalidDescription(_)));
    }

    #[test]
    fn sentinel_is_distinct_from_empty() {
        assert_eq!(
            FieldUpdate::from(DO_NOT_MODIFY_DESC.to_string()),
            FieldUpdate::Keep
        );
        assert_eq!(
            FieldUpdate::from(String::new()),
            FieldUpdate::Set(String::new())
        );
        assert_eq!(String::from(FieldUpdate::Keep), DO_NOT_MODIFY_DESC);
    }

    #[test]
    fn apply_keeps_and_clears() {
        let current = Description::new("moniker", "identity", "website", "contact", "details");
        let update = DescriptionUpdate {
            moniker: FieldUpdate::Set("renamed".to_string()),
            website: FieldUpdate::Set(String::new()),
            ..Default::default()
        };
        let merged = current.apply(&update).unwrap();
        assert_eq!(
            merged,
            Description::new("renamed", "identity", "", "contact", "details")
        );
    }

    #[test]
    fn update_validates_only_replaced_fields() {
        let update = DescriptionUpdate {
            details: FieldUpdate::Set("x".repeat(Description::MAX_DETAILS_LENGTH + 1)),
            ..Default::default()
        };
        assert_matches!(update.validate(), Err(StakingError::InvalidDescription(_)));
        assert!(DescriptionUpdate::default().validate().is_ok());
    }
}
