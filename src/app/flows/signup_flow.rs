use super::{collect_field_errors, finish, FieldError, SubmitError, SubmitOutcome};
use crate::domain::model::{AddAccountParams, FormData};
use crate::domain::ports::{AddAccount, SaveAccessToken, Validation};

pub const SIGNUP_FIELDS: [&str; 4] = ["name", "email", "password", "passwordConfirmation"];

pub struct SignUpFlow<V: Validation, A: AddAccount, S: SaveAccessToken> {
    validation: V,
    add_account: A,
    save_access_token: S,
}

impl<V: Validation, A: AddAccount, S: SaveAccessToken> SignUpFlow<V, A, S> {
    pub fn new(validation: V, add_account: A, save_access_token: S) -> Self {
        Self {
            validation,
            add_account,
            save_access_token,
        }
    }

    pub fn field_errors(&self, form: &FormData) -> Vec<FieldError> {
        collect_field_errors(&self.validation, &SIGNUP_FIELDS, form)
    }

    pub async fn submit(&self, form: &FormData) -> Result<SubmitOutcome, SubmitError> {
        let errors = self.field_errors(form);
        if !errors.is_empty() {
            tracing::debug!("Sign-up blocked by {} invalid field(s)", errors.len());
            return Err(SubmitError::Invalid(errors));
        }

        let params = AddAccountParams {
            name: form.value_or_empty("name"),
            email: form.value_or_empty("email"),
            password: form.value_or_empty("password"),
            password_confirmation: form.value_or_empty("passwordConfirmation"),
        };
        let account = self.add_account.add(&params).await?;
        let outcome = finish(&self.save_access_token, account).await?;

        tracing::info!(email = %params.email, "Account created");
        Ok(outcome)
    }
}
