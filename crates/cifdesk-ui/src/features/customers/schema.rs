//! Customer table schema.

use cifdesk_api_models::CustomerSummary;

use crate::core::list::{ColumnSpec, FieldSpec, ListEndpoints, ListMessages, ListSchema, Record};

/// List-all endpoint.
pub const CUSTOMERS_PATH: &str = "/api/customers";
/// Create endpoint.
pub const ADD_CUSTOMER_PATH: &str = "/api/addCustomer";
/// Update endpoint.
pub const UPDATE_CUSTOMER_PATH: &str = "/api/updateCustomer";

fn search_path(query: &str) -> String {
    format!("/api/search-cif?query={}", urlencoding::encode(query))
}

fn detail_path(id: &str) -> String {
    format!("/api/cif-details/{}", urlencoding::encode(id))
}

fn delete_path(id: &str) -> String {
    format!("/api/deleteCustomer/{}", urlencoding::encode(id))
}

fn sort_name(row: &CustomerSummary) -> String {
    format!("{} {}", row.first_name, row.last_name)
}

static CUSTOMER_FIELDS: [FieldSpec<CustomerSummary>; 4] = [
    FieldSpec {
        key: "branch",
        sort_value: |row| row.branch.clone(),
    },
    FieldSpec {
        key: "cifkey",
        sort_value: |row| row.cif_key.clone(),
    },
    FieldSpec {
        key: "name",
        sort_value: sort_name,
    },
    FieldSpec {
        key: "address",
        sort_value: |row| row.address.clone(),
    },
];

// Both name columns sort by the combined name.
static CUSTOMER_COLUMNS: [ColumnSpec<CustomerSummary>; 5] = [
    ColumnSpec {
        label: "Branch",
        sort_key: Some("branch"),
        cell: |row| row.branch.clone(),
    },
    ColumnSpec {
        label: "CIF Key",
        sort_key: Some("cifkey"),
        cell: |row| row.cif_key.clone(),
    },
    ColumnSpec {
        label: "First Name",
        sort_key: Some("name"),
        cell: |row| row.first_name.clone(),
    },
    ColumnSpec {
        label: "Last Name",
        sort_key: Some("name"),
        cell: |row| row.last_name.clone(),
    },
    ColumnSpec {
        label: "Address",
        sort_key: Some("address"),
        cell: |row| row.address.clone(),
    },
];

/// Schema for the CIF inquiry table.
pub static CUSTOMER_SCHEMA: ListSchema<CustomerSummary> = ListSchema {
    id_of: |row| row.cif_key.clone(),
    fields: &CUSTOMER_FIELDS,
    columns: &CUSTOMER_COLUMNS,
    endpoints: ListEndpoints {
        list_all: CUSTOMERS_PATH,
        search: Some(search_path),
        detail: detail_path,
        delete: Some(delete_path),
    },
    messages: ListMessages {
        plural: "customers",
        search_failed: "Search failed",
        search_network: "Network error occurred during search",
        fetch_failed: "Failed to fetch customers",
        fetch_network: "Network error occurred while fetching customers",
        detail_failed: "Failed to fetch CIF details",
        detail_network: "Network error occurred while fetching details",
    },
};

impl Record for CustomerSummary {
    fn schema() -> &'static ListSchema<Self> {
        &CUSTOMER_SCHEMA
    }
}
