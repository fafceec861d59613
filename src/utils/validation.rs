use crate::utils::error::{GrilleError, Result};

pub use crate::domain::model::MAX_GRILLE_SIZE;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(GrilleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(GrilleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GrilleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| GrilleError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_grille_size(field_name: &str, size: usize) -> Result<()> {
    validate_range(field_name, size, 1, MAX_GRILLE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("workers", 4, 1).is_ok());
        assert!(validate_positive_number("workers", 0, 1).is_err());
    }

    #[test]
    fn test_validate_grille_size() {
        assert!(validate_grille_size("size", 4).is_ok());
        assert!(validate_grille_size("size", 0).is_err());
        assert!(validate_grille_size("size", MAX_GRILLE_SIZE + 1).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("1,1".to_string());
        let absent: Option<String> = None;
        assert!(validate_required_field("holes", &present).is_ok());
        assert!(matches!(
            validate_required_field("holes", &absent),
            Err(GrilleError::MissingConfigError { field }) if field == "holes"
        ));
    }
}
