//! Form-level validation. Runs in the view before anything reaches the
//! product service; the service itself does no field validation.

use super::aggregate::ProductDraft;

pub const NAME_MAX: usize = 255;
pub const DESCRIPTION_MAX: usize = 2000;

/// Field-level validation errors, reported inline next to each input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }
}

/// Check form values. `Err` carries one message per offending field.
pub fn validate(draft: &ProductDraft) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();

    if draft.name.trim().is_empty() {
        errors.name = Some("Name is required.".into());
    } else if draft.name.chars().count() > NAME_MAX {
        errors.name = Some(format!("Name cannot exceed {} characters.", NAME_MAX));
    }

    if draft.description.trim().is_empty() {
        errors.description = Some("Description is required.".into());
    } else if draft.description.chars().count() > DESCRIPTION_MAX {
        errors.description = Some(format!(
            "Description cannot exceed {} characters.",
            DESCRIPTION_MAX
        ));
    }

    if !draft.price.is_finite() {
        errors.price = Some("Price must be a number.".into());
    } else if draft.price <= 0.0 {
        errors.price = Some("Price must be a positive number.".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: "Desk Lamp".into(),
            description: "Adjustable LED desk lamp.".into(),
            tags: vec![],
            price: 39.90,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate(&valid_draft()).is_ok());
    }

    #[test]
    fn empty_fields_are_rejected() {
        let mut draft = valid_draft();
        draft.name = "   ".into();
        draft.description = String::new();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.name.as_deref(), Some("Name is required."));
        assert_eq!(
            errors.description.as_deref(),
            Some("Description is required.")
        );
        assert!(errors.price.is_none());
    }

    #[test]
    fn name_at_limit_passes_one_over_fails() {
        let mut draft = valid_draft();
        draft.name = "x".repeat(NAME_MAX);
        assert!(validate(&draft).is_ok());

        draft.name = "x".repeat(NAME_MAX + 1);
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.name.as_deref(),
            Some("Name cannot exceed 255 characters.")
        );
    }

    #[test]
    fn description_over_limit_fails() {
        let mut draft = valid_draft();
        draft.description = "x".repeat(DESCRIPTION_MAX + 1);
        assert!(validate(&draft).is_err());
    }

    #[test]
    fn non_positive_or_nan_price_fails() {
        let mut draft = valid_draft();

        draft.price = 0.0;
        assert_eq!(
            validate(&draft).unwrap_err().price.as_deref(),
            Some("Price must be a positive number.")
        );

        draft.price = -5.0;
        assert!(validate(&draft).is_err());

        draft.price = f64::NAN;
        assert_eq!(
            validate(&draft).unwrap_err().price.as_deref(),
            Some("Price must be a number.")
        );
    }
}
