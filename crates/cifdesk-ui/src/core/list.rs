//! Generic list controller behind every record table.
//!
//! # Design
//! - One controller, parametrized by a static [`ListSchema`] per record type.
//! - Raw rows are replaced only by fetches; sort, page and selection derive a view.
//! - Fetches are ticketed so a late response for a superseded request is dropped.
//! - `page` is clamped into `1..=total_pages` after every mutation.

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;

use crate::core::config::{MIN_QUERY_LEN, PageSize};
use crate::core::gateway::GatewayError;
use crate::core::notify::NotificationKind;

/// Inline error shown for queries shorter than [`MIN_QUERY_LEN`].
pub const QUERY_TOO_SHORT: &str = "Search query must be at least 4 characters long";

/// Sortable field: a key and the string it sorts by.
pub struct FieldSpec<R> {
    /// Stable key used by column headers.
    pub key: &'static str,
    /// Derived string compared case-insensitively.
    pub sort_value: fn(&R) -> String,
}

/// Table column.
pub struct ColumnSpec<R> {
    /// Header text.
    pub label: &'static str,
    /// Field sorted when the header is clicked, if sortable.
    pub sort_key: Option<&'static str>,
    /// Cell text.
    pub cell: fn(&R) -> String,
}

/// API paths used by a list screen.
pub struct ListEndpoints {
    /// List-all path.
    pub list_all: &'static str,
    /// Search path builder for an already-trimmed query.
    pub search: Option<fn(&str) -> String>,
    /// Detail path builder.
    pub detail: fn(&str) -> String,
    /// Delete path builder, when the record type is deletable.
    pub delete: Option<fn(&str) -> String>,
}

/// Operator-facing copy for a list screen.
pub struct ListMessages {
    /// Plural noun used in bulk notices ("customers").
    pub plural: &'static str,
    /// Fallback when a search fails without a server message.
    pub search_failed: &'static str,
    /// Shown when a search cannot reach the server.
    pub search_network: &'static str,
    /// Fallback when a list fetch fails without a server message.
    pub fetch_failed: &'static str,
    /// Shown when a list fetch cannot reach the server.
    pub fetch_network: &'static str,
    /// Fallback when a detail fetch fails without a server message.
    pub detail_failed: &'static str,
    /// Shown when a detail fetch cannot reach the server.
    pub detail_network: &'static str,
}

/// Static description of one record type's table.
pub struct ListSchema<R: 'static> {
    /// Stable identifier accessor.
    pub id_of: fn(&R) -> String,
    /// Sortable fields.
    pub fields: &'static [FieldSpec<R>],
    /// Rendered columns.
    pub columns: &'static [ColumnSpec<R>],
    /// API paths.
    pub endpoints: ListEndpoints,
    /// Copy.
    pub messages: ListMessages,
}

impl<R: 'static> ListSchema<R> {
    /// Look up a sortable field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldSpec<R>> {
        self.fields.iter().find(|field| field.key == key)
    }
}

/// A row type that a [`ListController`] can manage.
pub trait Record: Clone + PartialEq + DeserializeOwned + 'static {
    /// Schema describing the record's table.
    fn schema() -> &'static ListSchema<Self>;

    /// Stable identifier.
    fn id(&self) -> String {
        (Self::schema().id_of)(self)
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// A to Z.
    Ascending,
    /// Z to A.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    /// Field key.
    pub field: &'static str,
    /// Direction.
    pub direction: SortDirection,
}

/// What populated the raw set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchKind {
    /// The list-all endpoint.
    All,
    /// A validated, trimmed search query.
    Search(String),
}

/// Ticket identifying one in-flight fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Result of validating a search box value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchPlan {
    /// Empty input; results and error cleared.
    Cleared,
    /// Too short; inline error set, no request.
    Invalid,
    /// Valid; fetch this trimmed query.
    Fetch(String),
}

/// Result of applying a fetch response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Rows replaced.
    Applied,
    /// A newer fetch was issued; the response was ignored.
    Stale,
    /// The fetch failed; `notice` is set when a notification should be raised.
    Failed {
        /// Message for the notification channel.
        notice: Option<String>,
    },
}

/// Placeholder shown instead of table rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmptyState {
    /// Rows are present or a request is pending.
    None,
    /// Nothing fetched yet; prompt the operator to search.
    Prompt,
    /// A search returned nothing.
    NoResults(String),
}

/// Derived page of rows handed to the table component.
#[derive(Clone, Debug, PartialEq)]
pub struct ListView<R> {
    /// Rows on the current page, sorted.
    pub rows: Vec<R>,
    /// Rows in the raw set.
    pub total: usize,
    /// Number of pages (at least one).
    pub total_pages: usize,
    /// Current page, one-based.
    pub page: usize,
    /// Rows per page.
    pub page_size: PageSize,
    /// Whether every visible row is selected.
    pub all_selected: bool,
}

/// State machine for one record table.
#[derive(Clone, Debug, PartialEq)]
pub struct ListController<R> {
    rows: Vec<R>,
    sort: Option<SortState>,
    page: usize,
    page_size: PageSize,
    selected: BTreeSet<String>,
    query_error: Option<String>,
    loading: bool,
    deleting: bool,
    last_fetch: Option<FetchKind>,
    issued: u64,
}

impl<R: Record> Default for ListController<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            sort: None,
            page: 1,
            page_size: PageSize::default(),
            selected: BTreeSet::new(),
            query_error: None,
            loading: false,
            deleting: false,
            last_fetch: None,
            issued: 0,
        }
    }
}

impl<R: Record> ListController<R> {
    /// Validate a search box value.
    ///
    /// Empty input clears results silently; input shorter than
    /// [`MIN_QUERY_LEN`] clears results and sets the inline error. Neither
    /// touches the network, and both invalidate any in-flight fetch.
    pub fn plan_search(&mut self, raw: &str) -> SearchPlan {
        let query = raw.trim();
        self.query_error = None;
        if query.is_empty() {
            self.reset_results();
            return SearchPlan::Cleared;
        }
        if query.chars().count() < MIN_QUERY_LEN {
            self.reset_results();
            self.query_error = Some(QUERY_TOO_SHORT.to_string());
            return SearchPlan::Invalid;
        }
        SearchPlan::Fetch(query.to_string())
    }

    /// Mark a fetch as in flight and remember it for [`Self::last_fetch`].
    pub fn begin_fetch(&mut self, kind: FetchKind) -> FetchTicket {
        self.issued = self.issued.wrapping_add(1);
        self.loading = true;
        if matches!(kind, FetchKind::Search(_)) {
            self.query_error = None;
        }
        self.last_fetch = Some(kind);
        FetchTicket(self.issued)
    }

    /// Apply a fetch response.
    ///
    /// A successful search resets to page one; a list-all refresh keeps the
    /// current page (clamped). Failed searches clear rows and report inline;
    /// failed list-all fetches keep rows and return a notice.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<R>, GatewayError>,
    ) -> FetchOutcome {
        if ticket.0 != self.issued {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        let searching = matches!(self.last_fetch, Some(FetchKind::Search(_)));
        let messages = &R::schema().messages;
        match result {
            Ok(rows) => {
                if searching {
                    self.page = 1;
                }
                self.set_rows(rows);
                FetchOutcome::Applied
            }
            Err(err) if searching => {
                self.rows.clear();
                self.page = 1;
                self.prune_selection();
                self.query_error = err.user_message(messages.search_failed, messages.search_network);
                FetchOutcome::Failed { notice: None }
            }
            Err(err) => FetchOutcome::Failed {
                notice: err.user_message(messages.fetch_failed, messages.fetch_network),
            },
        }
    }

    /// Replace the raw set, pruning selection and clamping the page.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.prune_selection();
        self.clamp_page();
    }

    /// Sort by `key`: a new field starts ascending, the same field flips.
    /// Unknown keys are ignored.
    pub fn sort(&mut self, key: &str) {
        let Some(field) = R::schema().field(key) else {
            return;
        };
        self.sort = Some(match self.sort {
            Some(current) if current.field == field.key => SortState {
                field: current.field,
                direction: current.direction.flipped(),
            },
            _ => SortState {
                field: field.key,
                direction: SortDirection::Ascending,
            },
        });
    }

    /// Active sort, if any.
    #[must_use]
    pub const fn sort_state(&self) -> Option<SortState> {
        self.sort
    }

    /// Number of rows in the raw set.
    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// `max(1, ceil(total / page_size))`.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.page_size.rows()).max(1)
    }

    /// Current page, one-based.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page.clamp(1, self.total_pages())
    }

    /// Jump to `page`, clamped into range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// Advance one page, stopping at the last.
    pub fn next_page(&mut self) {
        self.set_page(self.page().saturating_add(1));
    }

    /// Go back one page, stopping at the first.
    pub fn prev_page(&mut self) {
        self.set_page(self.page().saturating_sub(1));
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Change rows per page and return to page one.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page = 1;
    }

    /// Sorted rows on the current page.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<R> {
        let size = self.page_size.rows();
        let start = (self.page() - 1) * size;
        self.ordered()
            .into_iter()
            .skip(start)
            .take(size)
            .cloned()
            .collect()
    }

    /// Identifiers of the rows on the current page.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<String> {
        self.visible_rows().iter().map(Record::id).collect()
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> ListView<R> {
        let rows = self.visible_rows();
        let all_selected = !rows.is_empty() && rows.iter().all(|row| self.selected.contains(&row.id()));
        ListView {
            rows,
            total: self.total(),
            total_pages: self.total_pages(),
            page: self.page(),
            page_size: self.page_size,
            all_selected,
        }
    }

    /// Whether every row on the current page is selected.
    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        self.view().all_selected
    }

    /// Select the visible page, or deselect exactly it when already selected.
    pub fn toggle_select_all(&mut self) {
        let visible = self.visible_ids();
        if self.is_all_selected() {
            for id in &visible {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(visible);
        }
    }

    /// Flip membership of one id.
    pub fn toggle_select_one(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Selected ids in stable order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    /// Number of selected ids.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Start a bulk delete, returning the ids to delete (or `None` when
    /// nothing is selected or a delete is already running).
    pub fn begin_bulk_delete(&mut self) -> Option<Vec<String>> {
        if self.selected.is_empty() || self.deleting {
            return None;
        }
        self.deleting = true;
        Some(self.selected_ids())
    }

    /// Finish a bulk delete: clear selection and build the single notice.
    pub fn finish_bulk_delete(&mut self, total: usize, failed: usize) -> (NotificationKind, String) {
        self.deleting = false;
        self.selected.clear();
        bulk_delete_notice(R::schema().messages.plural, total, failed)
    }

    /// Whether a bulk delete is running.
    #[must_use]
    pub const fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Inline search error, if any.
    #[must_use]
    pub fn query_error(&self) -> Option<&str> {
        self.query_error.as_deref()
    }

    /// The fetch to repeat on refresh.
    #[must_use]
    pub const fn last_fetch(&self) -> Option<&FetchKind> {
        self.last_fetch.as_ref()
    }

    /// Which placeholder, if any, replaces the table body.
    #[must_use]
    pub fn empty_state(&self) -> EmptyState {
        if self.loading || !self.rows.is_empty() || self.query_error.is_some() {
            return EmptyState::None;
        }
        match &self.last_fetch {
            None => EmptyState::Prompt,
            Some(FetchKind::Search(query)) => EmptyState::NoResults(query.clone()),
            Some(FetchKind::All) => EmptyState::None,
        }
    }

    fn ordered(&self) -> Vec<&R> {
        let Some((sort_value, direction)) = self.sort.and_then(|state| {
            R::schema()
                .field(state.field)
                .map(|field| (field.sort_value, state.direction))
        }) else {
            return self.rows.iter().collect();
        };
        let mut keyed: Vec<(String, &R)> = self
            .rows
            .iter()
            .map(|row| (sort_value(row).to_lowercase(), row))
            .collect();
        keyed.sort_by(|(left, _), (right, _)| match direction {
            SortDirection::Ascending => left.cmp(right),
            SortDirection::Descending => right.cmp(left),
        });
        keyed.into_iter().map(|(_, row)| row).collect()
    }

    fn reset_results(&mut self) {
        self.issued = self.issued.wrapping_add(1);
        self.loading = false;
        self.last_fetch = None;
        self.rows.clear();
        self.page = 1;
        self.prune_selection();
    }

    fn prune_selection(&mut self) {
        let present: BTreeSet<String> = self.rows.iter().map(Record::id).collect();
        self.selected.retain(|id| present.contains(id));
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages());
    }
}

/// The single notice raised after a bulk delete of `total` ids.
#[must_use]
pub fn bulk_delete_notice(plural: &str, total: usize, failed: usize) -> (NotificationKind, String) {
    if failed == 0 {
        (
            NotificationKind::Success,
            format!("Selected {plural} deleted."),
        )
    } else if failed >= total {
        (
            NotificationKind::Error,
            format!("Failed to delete selected {plural}."),
        )
    } else {
        (
            NotificationKind::Error,
            format!("Failed to delete {failed} of {total} selected {plural}."),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, Debug, PartialEq, Deserialize)]
    struct Row {
        id: u32,
        name: String,
    }

    static ROW_FIELDS: [FieldSpec<Row>; 2] = [
        FieldSpec {
            key: "name",
            sort_value: |row| row.name.clone(),
        },
        FieldSpec {
            key: "id",
            sort_value: |row| row.id.to_string(),
        },
    ];

    static ROW_SCHEMA: ListSchema<Row> = ListSchema {
        id_of: |row| row.id.to_string(),
        fields: &ROW_FIELDS,
        columns: &[],
        endpoints: ListEndpoints {
            list_all: "/api/rows",
            search: None,
            detail: |id| format!("/api/rows/{id}"),
            delete: None,
        },
        messages: ListMessages {
            plural: "rows",
            search_failed: "Search failed",
            search_network: "Network error occurred during search",
            fetch_failed: "Failed to fetch rows",
            fetch_network: "Network error occurred while fetching rows",
            detail_failed: "Failed to fetch row details",
            detail_network: "Network error occurred while fetching details",
        },
    };

    impl Record for Row {
        fn schema() -> &'static ListSchema<Self> {
            &ROW_SCHEMA
        }
    }

    fn row(id: u32, name: &str) -> Row {
        Row {
            id,
            name: name.to_string(),
        }
    }

    fn numbered(count: u32) -> Vec<Row> {
        (1..=count).map(|id| row(id, &format!("row {id:03}"))).collect()
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|row| row.id).collect()
    }

    #[test]
    fn sort_cycles_ascending_descending_ascending() {
        let mut list = ListController::<Row>::default();
        list.set_rows(vec![row(1, "B"), row(2, "a")]);

        list.sort("name");
        assert_eq!(ids(&list.visible_rows()), vec![2, 1]);
        list.sort("name");
        assert_eq!(ids(&list.visible_rows()), vec![1, 2]);
        list.sort("name");
        assert_eq!(
            list.sort_state().map(|state| state.direction),
            Some(SortDirection::Ascending)
        );
    }

    #[test]
    fn switching_fields_restarts_ascending_and_keeps_ties_stable() {
        let mut list = ListController::<Row>::default();
        list.set_rows(vec![row(3, "same"), row(1, "Same"), row(2, "other")]);
        list.sort("id");
        list.sort("id");
        list.sort("name");

        assert_eq!(
            list.sort_state(),
            Some(SortState {
                field: "name",
                direction: SortDirection::Ascending
            })
        );
        assert_eq!(ids(&list.visible_rows()), vec![2, 3, 1]);
        list.sort("unknown");
        assert_eq!(list.sort_state().map(|state| state.field), Some("name"));
    }

    #[test]
    fn page_stays_in_range_through_mutations() {
        let mut list = ListController::<Row>::default();
        assert_eq!((list.page(), list.total_pages()), (1, 1));
        assert!(list.visible_rows().is_empty());

        list.set_rows(numbered(45));
        list.set_page(99);
        assert_eq!((list.page(), list.total_pages()), (5, 5));
        list.set_page(0);
        assert_eq!(list.page(), 1);

        list.set_page(5);
        list.set_page_size(PageSize::Twenty);
        assert_eq!((list.page(), list.total_pages()), (1, 3));

        list.set_page(3);
        list.set_rows(numbered(12));
        assert_eq!((list.page(), list.total_pages()), (1, 1));
        list.next_page();
        assert_eq!(list.page(), 1);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let mut list = ListController::<Row>::default();
        list.set_rows(numbered(23));
        list.set_page(3);
        let view = list.view();
        assert_eq!(ids(&view.rows), vec![21, 22, 23]);
        assert_eq!(view.total, 23);
        list.prev_page();
        assert_eq!(list.page(), 2);
    }

    #[test]
    fn select_all_twice_restores_selection() {
        let mut list = ListController::<Row>::default();
        list.set_rows(numbered(15));
        list.set_page(2);
        list.toggle_select_one("12");
        list.set_page(1);
        let before = list.selected_ids();

        list.toggle_select_all();
        assert!(list.is_all_selected());
        assert_eq!(list.selected_count(), 11);
        list.toggle_select_all();

        assert_eq!(list.selected_ids(), before);
    }

    #[test]
    fn select_all_when_partially_selected_unions() {
        let mut list = ListController::<Row>::default();
        list.set_rows(numbered(3));
        list.toggle_select_one("2");
        list.toggle_select_all();
        assert_eq!(list.selected_count(), 3);
        list.toggle_select_all();
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn selection_survives_paging_and_is_pruned_on_refetch() {
        let mut list = ListController::<Row>::default();
        list.set_rows(numbered(25));
        list.toggle_select_one("1");
        list.toggle_select_one("24");
        list.set_page(3);
        assert!(list.is_selected("1"));

        list.set_rows(numbered(10));
        assert_eq!(list.selected_ids(), vec!["1".to_string()]);
    }

    #[test]
    fn short_query_is_rejected_without_fetching() {
        let mut list = ListController::<Row>::default();
        list.set_rows(numbered(3));

        assert_eq!(list.plan_search("  ab "), SearchPlan::Invalid);
        assert_eq!(list.query_error(), Some(QUERY_TOO_SHORT));
        assert_eq!(list.total(), 0);

        assert_eq!(list.plan_search("   "), SearchPlan::Cleared);
        assert_eq!(list.query_error(), None);
        assert_eq!(list.empty_state(), EmptyState::Prompt);

        assert_eq!(
            list.plan_search(" aris "),
            SearchPlan::Fetch("aris".to_string())
        );
    }

    #[test]
    fn successful_search_resets_to_first_page() {
        let mut list = ListController::<Row>::default();
        list.set_rows(numbered(30));
        list.set_page(3);

        let ticket = list.begin_fetch(FetchKind::Search("row 0".to_string()));
        assert!(list.is_loading());
        let outcome = list.finish_fetch(ticket, Ok(numbered(30)));

        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(list.page(), 1);
        assert!(!list.is_loading());
    }

    #[test]
    fn superseded_fetch_is_discarded() {
        let mut list = ListController::<Row>::default();
        let first = list.begin_fetch(FetchKind::Search("aaaa".to_string()));
        let second = list.begin_fetch(FetchKind::Search("bbbb".to_string()));

        assert_eq!(list.finish_fetch(second, Ok(numbered(2))), FetchOutcome::Applied);
        assert_eq!(list.finish_fetch(first, Ok(numbered(9))), FetchOutcome::Stale);
        assert_eq!(list.total(), 2);
        assert_eq!(
            list.last_fetch(),
            Some(&FetchKind::Search("bbbb".to_string()))
        );
    }

    #[test]
    fn clearing_the_query_invalidates_in_flight_search() {
        let mut list = ListController::<Row>::default();
        let ticket = list.begin_fetch(FetchKind::Search("aris".to_string()));
        list.plan_search("");

        assert_eq!(list.finish_fetch(ticket, Ok(numbered(4))), FetchOutcome::Stale);
        assert_eq!(list.total(), 0);
    }

    #[test]
    fn failed_search_reports_inline_and_clears_rows() {
        let mut list = ListController::<Row>::default();
        list.set_rows(numbered(4));
        let ticket = list.begin_fetch(FetchKind::Search("aris".to_string()));

        let outcome = list.finish_fetch(
            ticket,
            Err(GatewayError::Server {
                status: 500,
                message: Some("Database unavailable".to_string()),
            }),
        );

        assert_eq!(outcome, FetchOutcome::Failed { notice: None });
        assert_eq!(list.query_error(), Some("Database unavailable"));
        assert_eq!(list.total(), 0);
        assert_eq!(list.empty_state(), EmptyState::None);
    }

    #[test]
    fn failed_list_all_keeps_rows_and_returns_notice() {
        let mut list = ListController::<Row>::default();
        list.set_rows(numbered(4));
        let ticket = list.begin_fetch(FetchKind::All);

        let outcome = list.finish_fetch(
            ticket,
            Err(GatewayError::Network {
                detail: "offline".to_string(),
            }),
        );

        assert_eq!(
            outcome,
            FetchOutcome::Failed {
                notice: Some("Network error occurred while fetching rows".to_string())
            }
        );
        assert_eq!(list.total(), 4);
    }

    #[test]
    fn empty_search_result_shows_no_results() {
        let mut list = ListController::<Row>::default();
        let ticket = list.begin_fetch(FetchKind::Search("zzzz".to_string()));
        list.finish_fetch(ticket, Ok(Vec::new()));
        assert_eq!(list.empty_state(), EmptyState::NoResults("zzzz".to_string()));
    }

    #[test]
    fn bulk_delete_clears_selection_and_counts_failures() {
        let mut list = ListController::<Row>::default();
        list.set_rows(numbered(3));
        list.toggle_select_all();

        let targets = list.begin_bulk_delete().expect("selection present");
        assert_eq!(targets.len(), 3);
        assert_eq!(list.begin_bulk_delete(), None);

        let (kind, message) = list.finish_bulk_delete(3, 1);
        assert_eq!(kind, NotificationKind::Error);
        assert_eq!(message, "Failed to delete 1 of 3 selected rows.");
        assert_eq!(list.selected_count(), 0);
        assert!(!list.is_deleting());
        assert_eq!(list.begin_bulk_delete(), None);
    }

    #[test]
    fn bulk_notice_wording() {
        assert_eq!(
            bulk_delete_notice("customers", 2, 0),
            (
                NotificationKind::Success,
                "Selected customers deleted.".to_string()
            )
        );
        assert_eq!(
            bulk_delete_notice("customers", 2, 2),
            (
                NotificationKind::Error,
                "Failed to delete selected customers.".to_string()
            )
        );
    }
}
