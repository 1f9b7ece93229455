use crate::domain::errors::ValidationError;
use crate::domain::model::FormData;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*@([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}$"#)
        .expect("email pattern is a valid regex")
});

/// One rule bound to the field it governs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidation {
    /// Fails when the value is absent or empty.
    Required { field: String },
    /// Fails when a non-empty value is not shaped like an email address.
    Email { field: String },
    /// Fails when a present value has fewer than `min` characters.
    MinLength { field: String, min: usize },
    /// Fails when the value differs from the one held by `other`.
    SameAs { field: String, other: String },
}

impl FieldValidation {
    pub fn field(&self) -> &str {
        match self {
            FieldValidation::Required { field }
            | FieldValidation::Email { field }
            | FieldValidation::MinLength { field, .. }
            | FieldValidation::SameAs { field, .. } => field,
        }
    }

    pub fn validate(&self, input: &FormData) -> Option<ValidationError> {
        let value = input.get(self.field());
        let failed = match self {
            FieldValidation::Required { .. } => value.map_or(true, str::is_empty),
            FieldValidation::Email { .. } => {
                value.is_some_and(|v| !v.is_empty() && !EMAIL_REGEX.is_match(v))
            }
            // Absence is left to Required.
            FieldValidation::MinLength { min, .. } => {
                value.is_some_and(|v| v.chars().count() < *min)
            }
            FieldValidation::SameAs { other, .. } => value != input.get(other),
        };

        if !failed {
            return None;
        }
        Some(match self {
            FieldValidation::Required { .. } => ValidationError::RequiredField,
            _ => ValidationError::InvalidField,
        })
    }
}
