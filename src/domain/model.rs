use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current values of a form, keyed by field name.
///
/// A missing key stands for a null or undefined value. Validators only ever
/// read from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, Option<String>>")]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Value of `field`, or an empty string when absent.
    pub fn value_or_empty(&self, field: &str) -> String {
        self.get(field).unwrap_or_default().to_string()
    }
}

impl From<HashMap<String, Option<String>>> for FormData {
    fn from(raw: HashMap<String, Option<String>>) -> Self {
        let fields = raw
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v)))
            .collect();
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(field, value)| (field.into(), value.into()))
            .collect();
        Self { fields }
    }
}

/// Session returned by the account API.
///
/// Fields other than `accessToken` are kept as received so the model
/// re-serializes to the same JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountModel {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AccountModel {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationParams {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}
