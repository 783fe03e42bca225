use thiserror::Error;

use crate::models::Profile;

/// A required top-level field left blank at save time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Summary,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Name => "Name",
            RequiredField::Email => "Email",
            RequiredField::Summary => "Summary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields ({})", labels(.missing))]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
}

fn labels(missing: &[RequiredField]) -> String {
    missing
        .iter()
        .map(RequiredField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks the fields that must be present before a profile may be stored.
pub fn validate(profile: &Profile) -> Result<(), ValidationError> {
    let checks = [
        (RequiredField::Name, &profile.personal_info.name),
        (RequiredField::Email, &profile.personal_info.email),
        (RequiredField::Summary, &profile.summary),
    ];

    let missing: Vec<_> = checks
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Profile {
        let mut profile = Profile::default();
        profile.personal_info.name = "Ada".to_string();
        profile.personal_info.email = "ada@example.com".to_string();
        profile.summary = "Mathematician".to_string();
        profile
    }

    #[test]
    fn test_complete_profile_passes() {
        assert!(validate(&complete()).is_ok());
    }

    #[test]
    fn test_missing_name_is_reported() {
        let mut profile = complete();
        profile.personal_info.name.clear();
        let err = validate(&profile).unwrap_err();
        assert_eq!(err.missing, vec![RequiredField::Name]);
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields (Name)"
        );
    }

    #[test]
    fn test_all_missing_fields_named() {
        let err = validate(&Profile::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields (Name, Email, Summary)"
        );
    }

    #[test]
    fn test_optional_fields_not_required() {
        let mut profile = complete();
        profile.personal_info.phone.clear();
        profile.experience.clear();
        assert!(validate(&profile).is_ok());
    }
}
