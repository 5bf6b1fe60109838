//! Customer create/edit form state.
//!
//! # Design
//! - Inputs are kept as raw strings; blank optional inputs become `None`.
//! - Validation runs before any request and reports the first failing field.

use cifdesk_api_models::{CustomerInput, CustomerSummary, DetailRecord};
use thiserror::Error;
use tracing::debug;

use crate::core::gateway::{GatewayError, Method};
use crate::core::notify::NotificationKind;
use crate::core::screen::ListScreenHandle;
use crate::features::customers::schema::{ADD_CUSTOMER_PATH, UPDATE_CUSTOMER_PATH};

/// Whether the form creates a record or edits one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    /// New customer; the server may assign the CIF key.
    #[default]
    Create,
    /// Existing customer; the CIF key is required.
    Edit,
}

/// Local validation failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    /// Editing without a CIF key.
    #[error("CIF Key is required")]
    MissingKey,
    /// A required name part is blank.
    #[error("{field} is required")]
    MissingName {
        /// Field label.
        field: &'static str,
    },
    /// Email is present but malformed.
    #[error("Email address is invalid")]
    InvalidEmail,
}

/// Editable customer fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    /// Create or edit.
    pub mode: FormMode,
    /// CIF key.
    pub cif_key: String,
    /// Branch.
    pub branch: String,
    /// Given name.
    pub first_name: String,
    /// Middle name.
    pub middle_name: String,
    /// Family name.
    pub last_name: String,
    /// Address.
    pub address: String,
    /// Email.
    pub email: String,
    /// Mobile number.
    pub mobile_no: String,
}

impl CustomerDraft {
    /// Pre-fill an edit form from a fetched detail.
    #[must_use]
    pub fn from_detail(record: &DetailRecord) -> Self {
        let text = |key: &str| record.text(key).unwrap_or_default();
        Self {
            mode: FormMode::Edit,
            cif_key: text("CIFKey"),
            branch: text("Branch"),
            first_name: text("FirstName"),
            middle_name: text("MiddleName"),
            last_name: text("LastName"),
            address: record
                .text("Address")
                .or_else(|| record.text("HomeAddress"))
                .unwrap_or_default(),
            email: text("Email"),
            mobile_no: text("MobileNo"),
        }
    }

    /// Validate and build the request payload.
    ///
    /// # Errors
    ///
    /// Returns the first [`DraftError`] found.
    pub fn validate(&self) -> Result<CustomerInput, DraftError> {
        let cif_key = optional(&self.cif_key);
        if self.mode == FormMode::Edit && cif_key.is_none() {
            return Err(DraftError::MissingKey);
        }
        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            return Err(DraftError::MissingName {
                field: "First Name",
            });
        }
        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            return Err(DraftError::MissingName { field: "Last Name" });
        }
        let email = optional(&self.email);
        if email.as_deref().is_some_and(|email| !looks_like_email(email)) {
            return Err(DraftError::InvalidEmail);
        }
        Ok(CustomerInput {
            cif_key,
            branch: self.branch.trim().to_string(),
            first_name: first_name.to_string(),
            middle_name: optional(&self.middle_name),
            last_name: last_name.to_string(),
            address: self.address.trim().to_string(),
            email,
            mobile_no: optional(&self.mobile_no),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

impl ListScreenHandle<CustomerSummary> {
    /// Validate and submit a draft, then notify and refresh. Returns whether
    /// the server accepted it.
    ///
    /// # Errors
    ///
    /// Returns the [`DraftError`] for inline display; nothing is sent in that
    /// case. Server and network failures are reported on the notification
    /// channel instead.
    pub async fn save_customer(&self, draft: &CustomerDraft) -> Result<bool, DraftError> {
        let input = draft.validate()?;
        let (method, path, done, failed) = match draft.mode {
            FormMode::Create => (
                Method::Post,
                ADD_CUSTOMER_PATH,
                "Customer added.",
                "Failed to add customer",
            ),
            FormMode::Edit => (
                Method::Put,
                UPDATE_CUSTOMER_PATH,
                "Customer updated.",
                "Failed to update customer",
            ),
        };
        debug!(path, "saving customer");
        match self.gateway().send_json(method, path, &input).await {
            Ok(_) => {
                self.notify(NotificationKind::Success, done);
                self.refresh().await;
                Ok(true)
            }
            Err(GatewayError::Unauthorized) => Ok(false),
            Err(err) => {
                if let Some(message) =
                    err.user_message(failed, "Network error occurred while saving customer")
                {
                    self.notify(NotificationKind::Error, message);
                }
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{RecordingTransport, gateway_with};
    use std::rc::Rc;

    fn draft() -> CustomerDraft {
        CustomerDraft {
            first_name: " Juan ".to_string(),
            last_name: "Dela Cruz".to_string(),
            branch: "Makati".to_string(),
            email: "   ".to_string(),
            ..CustomerDraft::default()
        }
    }

    #[test]
    fn valid_create_trims_and_drops_blanks() {
        let input = draft().validate().expect("valid draft");
        assert_eq!(input.first_name, "Juan");
        assert_eq!(input.cif_key, None);
        assert_eq!(input.email, None);
        assert_eq!(input.middle_name, None);
    }

    #[test]
    fn validation_reports_first_failure() {
        let mut edit = draft();
        edit.mode = FormMode::Edit;
        assert_eq!(edit.validate(), Err(DraftError::MissingKey));

        let mut nameless = draft();
        nameless.last_name.clear();
        assert_eq!(
            nameless.validate().map_err(|err| err.to_string()),
            Err("Last Name is required".to_string())
        );

        let mut bad_email = draft();
        bad_email.email = "juan@example".to_string();
        assert_eq!(bad_email.validate(), Err(DraftError::InvalidEmail));
        bad_email.email = "juan@example.ph".to_string();
        assert!(bad_email.validate().is_ok());
    }

    #[test]
    fn edit_draft_prefills_from_detail() {
        let record: DetailRecord = serde_json::from_value(serde_json::json!({
            "CIFKey": 4451,
            "FirstName": "Ana",
            "LastName": "Reyes",
            "HomeAddress": "12 Mabini St"
        }))
        .expect("detail");
        let draft = CustomerDraft::from_detail(&record);
        assert_eq!(draft.mode, FormMode::Edit);
        assert_eq!(draft.cif_key, "4451");
        assert_eq!(draft.address, "12 Mabini St");
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_network() {
        let transport = Rc::new(RecordingTransport::new());
        let screen = ListScreenHandle::<CustomerSummary>::new(gateway_with(&transport));
        let mut bad = draft();
        bad.first_name.clear();

        let result = screen.save_customer(&bad).await;

        assert!(matches!(result, Err(DraftError::MissingName { .. })));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn update_posts_put_and_notifies() {
        let transport = Rc::new(RecordingTransport::new());
        transport.respond(Method::Put, UPDATE_CUSTOMER_PATH, 200, "{}");
        let screen = ListScreenHandle::<CustomerSummary>::new(gateway_with(&transport));
        let mut edit = draft();
        edit.mode = FormMode::Edit;
        edit.cif_key = "000451".to_string();

        assert_eq!(screen.save_customer(&edit).await, Ok(true));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].body.as_ref().and_then(|body| body.get("CIFKey")),
            Some(&serde_json::json!("000451"))
        );
        screen.cell().with(|state| {
            assert_eq!(
                state.notices.current().map(|notice| notice.message.as_str()),
                Some("Customer updated.")
            );
        });
    }

    #[tokio::test]
    async fn server_rejection_surfaces_its_message() {
        let transport = Rc::new(RecordingTransport::new());
        transport.respond(Method::Post, ADD_CUSTOMER_PATH, 409, r#"{"error":"Duplicate CIF"}"#);
        let screen = ListScreenHandle::<CustomerSummary>::new(gateway_with(&transport));

        assert_eq!(screen.save_customer(&draft()).await, Ok(false));

        screen.cell().with(|state| {
            let notice = state.notices.current().expect("notice");
            assert_eq!(notice.kind, NotificationKind::Error);
            assert_eq!(notice.message, "Duplicate CIF");
        });
    }
}
