pub mod factories;
pub mod flows;

pub use flows::{FieldError, LoginFlow, SignUpFlow, SubmitError, SubmitOutcome};
