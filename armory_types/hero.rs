use serde::{Deserialize, Serialize};

use crate::errors::{AppError, FieldError};

/// A hero record. `id` is assigned by the store on first save and never
/// changes afterwards; a persisted hero always has `id = Some(_)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: Option<i64>,
    pub name: String,
}

impl Hero {
    pub fn new(name: String) -> Self {
        Self { id: None, name }
    }

    /// Applies a merge patch: fields present in the payload overwrite the
    /// stored values, absent fields keep them. The id never changes.
    pub fn apply_patch(&mut self, patch: &HeroPayload) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
    }
}

/// Wire-level hero body. Both fields are optional so the same type binds
/// create, replace and merge-patch requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl HeroPayload {
    /// Checks required fields, returning one error per failing field.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.is_none() {
            errors.push(FieldError::required("name"));
        }
        errors
    }

    /// Validates the payload and converts it into a `Hero`.
    pub fn into_hero(self) -> Result<Hero, AppError> {
        let errors = self.validate();
        match self.name {
            Some(name) if errors.is_empty() => Ok(Hero { id: self.id, name }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_reports_missing_name() {
        let payload = HeroPayload {
            id: Some(1),
            name: None,
        };
        let errors = payload.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn validate_passes_with_name() {
        let payload = HeroPayload {
            id: None,
            name: Some("Alucard".to_string()),
        };
        assert!(payload.validate().is_empty());
    }

    #[test]
    fn into_hero_keeps_id_and_name() {
        let payload = HeroPayload {
            id: Some(7),
            name: Some("Alucard".to_string()),
        };
        let hero = payload.into_hero().unwrap();
        assert_eq!(hero.id, Some(7));
        assert_eq!(hero.name, "Alucard");
    }

    #[test]
    fn into_hero_fails_without_name() {
        let payload = HeroPayload {
            id: Some(7),
            name: None,
        };
        let err = payload.into_hero().unwrap_err();
        match err {
            AppError::Validation(errors) => assert_eq!(errors[0].field, "name"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn patch_with_name_overwrites_only_name() {
        let mut hero = Hero {
            id: Some(3),
            name: "AAAAAAAAAA".to_string(),
        };
        hero.apply_patch(&HeroPayload {
            id: Some(3),
            name: Some("BBBBBBBBBB".to_string()),
        });
        assert_eq!(hero.id, Some(3));
        assert_eq!(hero.name, "BBBBBBBBBB");
    }

    #[test]
    fn patch_without_name_is_a_no_op() {
        let mut hero = Hero {
            id: Some(3),
            name: "AAAAAAAAAA".to_string(),
        };
        hero.apply_patch(&HeroPayload {
            id: Some(3),
            name: None,
        });
        assert_eq!(hero.name, "AAAAAAAAAA");
    }
}
