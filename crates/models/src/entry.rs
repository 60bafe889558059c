use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Longest accepted entry name or value, in characters.
pub const MAX_FIELD_LEN: usize = 255;

/// A string value addressed by a string name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl Entry {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_field("name", &self.name)?;
        validate_field("value", &self.value)
    }
}

/// Entry fields are ASCII letters only, 1..=255 long.
pub fn validate_field(field: &str, input: &str) -> Result<(), ModelError> {
    if input.is_empty() {
        return Err(ModelError::Validation(format!("{field} is required")));
    }
    if input.chars().count() > MAX_FIELD_LEN {
        return Err(ModelError::Validation(format!(
            "{field} must be at most {MAX_FIELD_LEN} characters"
        )));
    }
    if !input.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ModelError::Validation(format!("{field} must contain only letters")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_within_bounds() {
        assert!(validate_field("name", "foo").is_ok());
        assert!(validate_field("name", &"a".repeat(MAX_FIELD_LEN)).is_ok());
    }

    #[test]
    fn rejects_empty_long_and_non_alpha() {
        assert_eq!(
            validate_field("name", ""),
            Err(ModelError::Validation("name is required".into()))
        );
        assert!(validate_field("value", &"a".repeat(MAX_FIELD_LEN + 1)).is_err());
        assert!(validate_field("name", "foo1").is_err());
        assert!(validate_field("name", "foo bar").is_err());
        assert!(validate_field("name", "café").is_err());
    }

    #[test]
    fn missing_fields_decode_then_fail_validation() {
        let entry: Entry = serde_json::from_str(r#"{"name":"foo"}"#).unwrap();
        assert_eq!(entry.value, "");
        assert!(entry.validate().is_err());
    }
}
