use super::{collect_field_errors, finish, FieldError, SubmitError, SubmitOutcome};
use crate::domain::model::{AuthenticationParams, FormData};
use crate::domain::ports::{Authentication, SaveAccessToken, Validation};

pub const LOGIN_FIELDS: [&str; 2] = ["email", "password"];

pub struct LoginFlow<V: Validation, A: Authentication, S: SaveAccessToken> {
    validation: V,
    authentication: A,
    save_access_token: S,
}

impl<V: Validation, A: Authentication, S: SaveAccessToken> LoginFlow<V, A, S> {
    pub fn new(validation: V, authentication: A, save_access_token: S) -> Self {
        Self {
            validation,
            authentication,
            save_access_token,
        }
    }

    pub fn field_errors(&self, form: &FormData) -> Vec<FieldError> {
        collect_field_errors(&self.validation, &LOGIN_FIELDS, form)
    }

    pub async fn submit(&self, form: &FormData) -> Result<SubmitOutcome, SubmitError> {
        let errors = self.field_errors(form);
        if !errors.is_empty() {
            tracing::debug!("Login blocked by {} invalid field(s)", errors.len());
            return Err(SubmitError::Invalid(errors));
        }

        let params = AuthenticationParams {
            email: form.value_or_empty("email"),
            password: form.value_or_empty("password"),
        };
        let account = self.authentication.auth(&params).await?;
        let outcome = finish(&self.save_access_token, account).await?;

        tracing::info!(email = %params.email, "Login completed");
        Ok(outcome)
    }
}
