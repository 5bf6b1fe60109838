//! Detail-on-demand loader and detail layouts.
//!
//! # Design
//! - Each request gets a sequence number; only the latest may open the view.
//! - A failed fetch leaves whatever is open untouched.
//! - Layouts are static tables so the modal renders any record type.

use cifdesk_api_models::DetailRecord;
use chrono::FixedOffset;

use crate::core::format::{format_date, format_date_time, masked, yes_no};
use crate::core::gateway::GatewayError;

/// How a detail value is rendered.
#[derive(Clone, Copy)]
pub enum FieldFormat {
    /// Raw text.
    Text,
    /// Calendar date.
    Date,
    /// Date and time.
    DateTime,
    /// `Yes` / `No`.
    Flag,
    /// Masked; only presence is shown.
    Secret,
    /// Derived from several columns.
    Computed(fn(&DetailRecord) -> String),
}

/// One labelled value in a detail section.
#[derive(Clone, Copy)]
pub struct DetailField {
    /// Label.
    pub label: &'static str,
    /// Column key.
    pub key: &'static str,
    /// Rendering.
    pub format: FieldFormat,
}

impl DetailField {
    /// Plain text field.
    #[must_use]
    pub const fn text(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            key,
            format: FieldFormat::Text,
        }
    }

    /// Field with an explicit format.
    #[must_use]
    pub const fn with(label: &'static str, key: &'static str, format: FieldFormat) -> Self {
        Self { label, key, format }
    }

    /// Render this field from `record`.
    #[must_use]
    pub fn render(&self, record: &DetailRecord, offset: FixedOffset) -> String {
        match self.format {
            FieldFormat::Text => record.text(self.key).unwrap_or_default(),
            FieldFormat::Date => format_date(record.text(self.key).as_deref(), offset),
            FieldFormat::DateTime => format_date_time(record.text(self.key).as_deref(), offset),
            FieldFormat::Flag => yes_no(record.flag(self.key)).to_string(),
            FieldFormat::Secret => masked(record.is_set(self.key)).to_string(),
            FieldFormat::Computed(derive) => derive(record),
        }
    }
}

/// Titled group of fields.
pub struct DetailSection {
    /// Heading.
    pub title: &'static str,
    /// Fields in display order.
    pub fields: &'static [DetailField],
}

/// A section rendered to label/value pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedSection {
    /// Heading.
    pub title: &'static str,
    /// Label and display value, in order.
    pub rows: Vec<(&'static str, String)>,
}

/// Complete layout for one record type's detail view.
pub struct DetailLayout {
    /// Heading prefix ("CIF Details").
    pub heading: &'static str,
    /// Column holding the record identifier.
    pub id_key: &'static str,
    /// Sections in display order.
    pub sections: &'static [DetailSection],
}

impl DetailLayout {
    /// Modal heading for `record`, falling back to the requested id.
    #[must_use]
    pub fn title(&self, record: &DetailRecord, requested_id: &str) -> String {
        let id = record
            .text(self.id_key)
            .unwrap_or_else(|| requested_id.to_string());
        format!("{} - {id}", self.heading)
    }

    /// Render every section of `record`.
    #[must_use]
    pub fn render(&self, record: &DetailRecord, offset: FixedOffset) -> Vec<RenderedSection> {
        self.sections
            .iter()
            .map(|section| RenderedSection {
                title: section.title,
                rows: section
                    .fields
                    .iter()
                    .map(|field| (field.label, field.render(record, offset)))
                    .collect(),
            })
            .collect()
    }
}

/// Record types that open a detail view.
pub trait HasDetailLayout {
    /// Layout used to render the fetched detail.
    fn detail_layout() -> &'static DetailLayout;
}

/// Ticket for one detail request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailTicket(u64);

/// Detail currently shown.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenDetail {
    /// Identifier the detail was requested for.
    pub id: String,
    /// Fetched attributes.
    pub record: DetailRecord,
}

/// Result of resolving a detail request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailOutcome {
    /// The view now shows the fetched record.
    Opened,
    /// A newer request was issued; the response was ignored.
    Stale,
    /// The fetch failed; `notice` is set unless the failure is silent.
    Failed {
        /// Message for the notification channel.
        notice: Option<String>,
    },
}

/// Tracks the open detail and the latest request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailLoader {
    issued: u64,
    pending: Option<String>,
    open: Option<OpenDetail>,
}

impl DetailLoader {
    /// Issue a request for `id`, superseding any in flight.
    pub fn begin(&mut self, id: &str) -> DetailTicket {
        self.issued = self.issued.wrapping_add(1);
        self.pending = Some(id.to_string());
        DetailTicket(self.issued)
    }

    /// Apply a response.
    pub fn resolve(
        &mut self,
        ticket: DetailTicket,
        result: Result<DetailRecord, GatewayError>,
        failed: &str,
        network: &str,
    ) -> DetailOutcome {
        if ticket.0 != self.issued {
            return DetailOutcome::Stale;
        }
        let id = self.pending.take().unwrap_or_default();
        match result {
            Ok(record) => {
                self.open = Some(OpenDetail { id, record });
                DetailOutcome::Opened
            }
            Err(err) => DetailOutcome::Failed {
                notice: err.user_message(failed, network),
            },
        }
    }

    /// Close the view and drop any in-flight request.
    pub fn close(&mut self) {
        self.issued = self.issued.wrapping_add(1);
        self.pending = None;
        self.open = None;
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Id of the in-flight request.
    #[must_use]
    pub fn pending_id(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// The open detail, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&OpenDetail> {
        self.open.as_ref()
    }
}
