#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the CIF Desk API contracts.
//!
//! The API server speaks `PascalCase` JSON with loosely typed columns (nullable
//! strings, numeric or textual identifiers, bit-or-bool flags). The helpers in
//! this crate normalise those shapes once so the UI works with plain Rust types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Error envelope returned by the API on non-success statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Server-provided error message, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Parse an error body, treating malformed payloads as "no message".
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Non-blank server message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

/// Credentials submitted to the authentication collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Password, already in the form the collaborator expects.
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Opaque bearer token.
    pub token: String,
    /// Signed-in user's profile.
    pub user: UserProfile,
}

/// Minimal profile of the signed-in operator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserProfile {
    /// Operator identifier, when the collaborator returns one.
    #[serde(
        rename = "UserID",
        default,
        deserialize_with = "optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    /// Given name.
    #[serde(default, deserialize_with = "nullable_string")]
    pub first_name: String,
    /// Family name.
    #[serde(default, deserialize_with = "nullable_string")]
    pub last_name: String,
    /// Contact email.
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
}

impl UserProfile {
    /// First and last name joined for display.
    #[must_use]
    pub fn display_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

/// Row returned by the CIF search and customer list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerSummary {
    /// Stable CIF key.
    #[serde(rename = "CIFKey", deserialize_with = "required_id")]
    pub cif_key: String,
    /// Owning branch.
    #[serde(default, deserialize_with = "nullable_string")]
    pub branch: String,
    /// Given name.
    #[serde(default, deserialize_with = "nullable_string")]
    pub first_name: String,
    /// Family name.
    #[serde(default, deserialize_with = "nullable_string")]
    pub last_name: String,
    /// Primary address line.
    #[serde(default, deserialize_with = "nullable_string")]
    pub address: String,
}

impl CustomerSummary {
    /// First and last name joined for display.
    #[must_use]
    pub fn display_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

/// Row returned by the user list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserSummary {
    /// Stable user identifier (numeric or textual upstream).
    #[serde(rename = "UserID", deserialize_with = "required_id")]
    pub user_id: String,
    /// Given name.
    #[serde(default, deserialize_with = "nullable_string")]
    pub first_name: String,
    /// Family name.
    #[serde(default, deserialize_with = "nullable_string")]
    pub last_name: String,
    /// Contact email.
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
    /// Contact phone number.
    #[serde(default, deserialize_with = "nullable_string")]
    pub phone_number: String,
    /// Owning branch.
    #[serde(default, deserialize_with = "nullable_string")]
    pub branch: String,
    /// Employee number.
    #[serde(rename = "EmployeeID", default, deserialize_with = "nullable_string")]
    pub employee_id: String,
    /// Whether the account is active.
    #[serde(default, deserialize_with = "flag")]
    pub is_active: bool,
}

impl UserSummary {
    /// First and last name joined for display.
    #[must_use]
    pub fn display_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }

    /// Status label shown in the table.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }
}

/// Payload for `addCustomer` / `updateCustomer`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerInput {
    /// CIF key; absent when the server assigns one on create.
    #[serde(rename = "CIFKey", default, skip_serializing_if = "Option::is_none")]
    pub cif_key: Option<String>,
    /// Owning branch.
    pub branch: String,
    /// Given name.
    pub first_name: String,
    /// Middle name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Family name.
    pub last_name: String,
    /// Primary address line.
    pub address: String,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Mobile number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_no: Option<String>,
}

/// Wide detail payload kept as an attribute bag.
///
/// Detail endpoints return dozens of optional columns whose presence varies by
/// record; the UI renders them from a layout table instead of a fixed struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct DetailRecord {
    fields: Map<String, Value>,
}

impl DetailRecord {
    /// Raw JSON value for a column.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|value| !value.is_null())
    }

    /// Column rendered as text; numbers and flags are stringified.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        match self.value(key)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            other => Some(other.to_string()),
        }
    }

    /// Column interpreted as a truthy flag (`true`, non-zero, `"true"`, `"1"`, `"y"`).
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        match self.value(key) {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(text)) => matches!(
                text.trim().to_ascii_lowercase().as_str(),
                "true" | "1" | "y" | "yes"
            ),
            _ => false,
        }
    }

    /// Whether the column holds a non-empty value.
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        match self.value(key) {
            Some(Value::String(text)) => !text.is_empty(),
            Some(_) => true,
            None => false,
        }
    }
}

fn join_name(first: &str, last: &str) -> String {
    format!("{first} {last}").trim().to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(serde_json::Number),
}

impl From<IdRepr> for String {
    fn from(value: IdRepr) -> Self {
        match value {
            IdRepr::Text(text) => text,
            IdRepr::Number(number) => number.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Number(i64),
    Text(String),
}

fn required_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    IdRepr::deserialize(deserializer).map(String::from)
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IdRepr>::deserialize(deserializer).map(|value| value.map(String::from))
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<FlagRepr>::deserialize(deserializer)?;
    Ok(match value {
        Some(FlagRepr::Bool(flag)) => flag,
        Some(FlagRepr::Number(number)) => number != 0,
        Some(FlagRepr::Text(text)) => matches!(text.trim(), "true" | "1"),
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn customer_summary_tolerates_nulls_and_missing_columns() {
        let row: CustomerSummary = serde_json::from_value(json!({
            "CIFKey": "C-0001",
            "Branch": null,
            "FirstName": "Aris",
            "LastName": "Dela Cruz"
        }))
        .expect("customer row");
        assert_eq!(row.cif_key, "C-0001");
        assert_eq!(row.branch, "");
        assert_eq!(row.address, "");
        assert_eq!(row.display_name(), "Aris Dela Cruz");
    }

    #[test]
    fn user_summary_accepts_numeric_ids_and_bit_flags() {
        let row: UserSummary = serde_json::from_value(json!({
            "UserID": 42,
            "FirstName": "Mara",
            "LastName": "Santos",
            "EmployeeID": "E-9",
            "IsActive": 1
        }))
        .expect("user row");
        assert_eq!(row.user_id, "42");
        assert!(row.is_active);
        assert_eq!(row.status_label(), "Active");

        let inactive: UserSummary =
            serde_json::from_value(json!({ "UserID": "u-7", "IsActive": false }))
                .expect("inactive row");
        assert_eq!(inactive.status_label(), "Inactive");
    }

    #[test]
    fn error_body_ignores_blank_and_malformed_messages() {
        assert_eq!(
            ErrorBody::parse(r#"{"error":"CIF not found"}"#).message(),
            Some("CIF not found")
        );
        assert_eq!(ErrorBody::parse(r#"{"error":"   "}"#).message(), None);
        assert_eq!(ErrorBody::parse("<html>bad gateway</html>").message(), None);
    }

    #[test]
    fn detail_record_reads_loose_columns() {
        let detail: DetailRecord = serde_json::from_value(json!({
            "CIFKey": "C-1",
            "Dependents": 3,
            "DOSRI": 1,
            "Taxable": "false",
            "BankEmployeeIndicator": true,
            "MiddleName": null,
            "Nickname": ""
        }))
        .expect("detail");
        assert_eq!(detail.text("Dependents").as_deref(), Some("3"));
        assert!(detail.flag("DOSRI"));
        assert!(!detail.flag("Taxable"));
        assert!(detail.flag("BankEmployeeIndicator"));
        assert_eq!(detail.text("MiddleName"), None);
        assert!(!detail.is_set("Nickname"));
        assert!(detail.is_set("CIFKey"));
    }

    #[test]
    fn customer_input_omits_server_assigned_key_on_create() {
        let input = CustomerInput {
            branch: "Main".into(),
            first_name: "Aris".into(),
            last_name: "Reyes".into(),
            address: "1 Rizal Ave".into(),
            ..CustomerInput::default()
        };
        let encoded = serde_json::to_value(&input).expect("encode");
        assert!(encoded.get("CIFKey").is_none());
        assert_eq!(encoded["FirstName"], "Aris");
    }
}
