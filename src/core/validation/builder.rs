use super::field_validation::FieldValidation;

/// Accumulates rules for a single field, in call order.
///
/// ```
/// use auth_front::core::validation::ValidationBuilder;
///
/// let rules = ValidationBuilder::field("password").required().min(5).build();
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ValidationBuilder {
    field_name: String,
    validations: Vec<FieldValidation>,
}

impl ValidationBuilder {
    pub fn field(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            validations: Vec::new(),
        }
    }

    pub fn required(self) -> Self {
        let field = self.field_name.clone();
        self.push(FieldValidation::Required { field })
    }

    pub fn email(self) -> Self {
        let field = self.field_name.clone();
        self.push(FieldValidation::Email { field })
    }

    pub fn min(self, length: usize) -> Self {
        let field = self.field_name.clone();
        self.push(FieldValidation::MinLength { field, min: length })
    }

    pub fn same_as(self, field_to_compare: impl Into<String>) -> Self {
        let field = self.field_name.clone();
        self.push(FieldValidation::SameAs {
            field,
            other: field_to_compare.into(),
        })
    }

    pub fn build(self) -> Vec<FieldValidation> {
        self.validations
    }

    fn push(mut self, validation: FieldValidation) -> Self {
        self.validations.push(validation);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_keeps_call_order() {
        let rules = ValidationBuilder::field("passwordConfirmation")
            .required()
            .min(5)
            .same_as("password")
            .build();

        assert_eq!(
            rules,
            vec![
                FieldValidation::Required {
                    field: "passwordConfirmation".to_string()
                },
                FieldValidation::MinLength {
                    field: "passwordConfirmation".to_string(),
                    min: 5
                },
                FieldValidation::SameAs {
                    field: "passwordConfirmation".to_string(),
                    other: "password".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_order_is_not_enforced() {
        let rules = ValidationBuilder::field("email").email().required().build();
        assert!(matches!(rules[0], FieldValidation::Email { .. }));
        assert!(matches!(rules[1], FieldValidation::Required { .. }));
    }

    #[test]
    fn test_empty_chain_builds_nothing() {
        assert!(ValidationBuilder::field("name").build().is_empty());
    }
}
