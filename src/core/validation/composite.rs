use super::field_validation::FieldValidation;
use crate::domain::errors::ValidationError;
use crate::domain::model::FormData;
use crate::domain::ports::Validation;

/// All rules of a form, flattened in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationComposite {
    validators: Vec<FieldValidation>,
}

impl ValidationComposite {
    pub fn build(validators: impl IntoIterator<Item = FieldValidation>) -> Self {
        Self {
            validators: validators.into_iter().collect(),
        }
    }

    /// First failing rule registered for `field_name`.
    pub fn first_error(&self, field_name: &str, input: &FormData) -> Option<ValidationError> {
        self.validators
            .iter()
            .filter(|v| v.field() == field_name)
            .find_map(|v| v.validate(input))
    }

    /// Distinct governed fields in the order they were first registered.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for validator in &self.validators {
            if !fields.contains(&validator.field()) {
                fields.push(validator.field());
            }
        }
        fields
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, field_name: &str, input: &FormData) -> Option<String> {
        self.first_error(field_name, input).map(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::ValidationBuilder;

    fn login_like() -> ValidationComposite {
        ValidationComposite::build(
            [
                ValidationBuilder::field("email").required().email().build(),
                ValidationBuilder::field("password").required().min(5).build(),
            ]
            .concat(),
        )
    }

    #[test]
    fn test_first_registered_failure_wins() {
        let sut = login_like();
        let input = FormData::new().with("email", "");

        assert_eq!(
            sut.validate("email", &input),
            Some(ValidationError::RequiredField.to_string())
        );
    }

    #[test]
    fn test_later_rule_reports_when_earlier_passes() {
        let sut = login_like();
        let input = FormData::new().with("email", "not-an-email");

        assert_eq!(
            sut.first_error("email", &input),
            Some(ValidationError::InvalidField)
        );
    }

    #[test]
    fn test_only_rules_of_the_requested_field_apply() {
        let sut = login_like();
        let input = FormData::new()
            .with("email", "ada@example.com")
            .with("password", "abc");

        assert_eq!(sut.validate("email", &input), None);
        assert_eq!(
            sut.validate("password", &input),
            Some("Invalid value".to_string())
        );
    }

    #[test]
    fn test_unknown_field_has_no_error() {
        let sut = login_like();
        assert_eq!(sut.validate("nickname", &FormData::new()), None);
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let sut = login_like();
        let input = FormData::new().with("password", "abc");
        let first = sut.validate("password", &input);
        assert_eq!(sut.validate("password", &input), first);
    }

    #[test]
    fn test_fields_in_registration_order() {
        assert_eq!(login_like().fields(), vec!["email", "password"]);
    }
}
