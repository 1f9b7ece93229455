pub mod remote;
pub mod save_access_token;
pub mod validation;

pub use crate::domain::errors::{DomainError, ValidationError};
pub use crate::domain::model::{AccountModel, AddAccountParams, AuthenticationParams, FormData};
pub use crate::domain::ports::{
    AddAccount, Authentication, HttpPostClient, SaveAccessToken, SetStorage, Validation,
};
pub use crate::utils::error::Result;
