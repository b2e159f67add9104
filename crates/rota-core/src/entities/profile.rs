use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::AGE_OF_MAJORITY;
use crate::enums::Role;
use crate::errors::CoreError;
use crate::ids::ProfileId;

/// A person who can be scheduled, with the roles they are qualified for.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub age: u32,
    pub roles: BTreeSet<Role>,
}

impl Profile {
    pub fn new(
        id: ProfileId,
        name: impl Into<String>,
        age: u32,
        roles: impl IntoIterator<Item = Role>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            roles: roles.into_iter().collect(),
        }
    }

    #[must_use]
    pub const fn is_minor(&self) -> bool {
        self.age < AGE_OF_MAJORITY
    }

    #[must_use]
    pub fn is_qualified_for(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// The editable fields of a profile, as submitted by the roster form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub age: u32,
    pub roles: BTreeSet<Role>,
}

impl ProfileDraft {
    pub fn new(name: impl Into<String>, age: u32, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            name: name.into(),
            age,
            roles: roles.into_iter().collect(),
        }
    }

    /// Check the draft and return it with the name trimmed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the name is blank or no role is selected.
    pub fn validated(self) -> Result<Self, CoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("profile name must not be empty".into()));
        }
        if self.roles.is_empty() {
            return Err(CoreError::Validation(format!(
                "profile '{name}' must be qualified for at least one role"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            ..self
        })
    }

    #[must_use]
    pub fn into_profile(self, id: ProfileId) -> Profile {
        Profile {
            id,
            name: self.name,
            age: self.age,
            roles: self.roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn minor_boundary_is_eighteen() {
        let seventeen = Profile::new(ProfileId(1), "a", 17, [Role::Audio]);
        let eighteen = Profile::new(ProfileId(2), "b", 18, [Role::Audio]);
        assert!(seventeen.is_minor());
        assert!(!eighteen.is_minor());
    }

    #[test]
    fn loads_profile_written_by_legacy_app() {
        let json = r#"{"id":1712345678901,"name":"Beto","age":15,"roles":["Audio","Video","Acomodador"]}"#;
        let beto: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(beto.id, ProfileId(1_712_345_678_901));
        assert!(beto.is_qualified_for(Role::Usher));
        assert!(!beto.is_qualified_for(Role::Microphone));
    }

    #[test]
    fn duplicate_role_tags_collapse() {
        let json = r#"{"id":1,"name":"Ana","age":20,"roles":["audio","Audio"]}"#;
        let ana: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(ana.roles.len(), 1);
    }

    #[test]
    fn draft_trims_name() {
        let draft = ProfileDraft::new("  Ana ", 20, [Role::Usher]).validated().unwrap();
        assert_eq!(draft.name, "Ana");
    }

    #[test]
    fn draft_rejects_blank_name() {
        let err = ProfileDraft::new("   ", 20, [Role::Usher]).validated().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn draft_rejects_missing_roles() {
        let err = ProfileDraft::new("Ana", 20, Vec::<Role>::new()).validated().unwrap_err();
        assert!(err.to_string().contains("at least one role"));
    }
}
