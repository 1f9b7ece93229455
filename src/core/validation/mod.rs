//! Declarative per-field form validation.
//!
//! Rules are built per field with [`ValidationBuilder`], concatenated, and
//! handed to a [`ValidationComposite`] which answers "what is wrong with this
//! field right now" for the form.

pub mod builder;
pub mod composite;
pub mod field_validation;

pub use builder::ValidationBuilder;
pub use composite::ValidationComposite;
pub use field_validation::FieldValidation;
