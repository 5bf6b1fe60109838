//! User table schema.

use cifdesk_api_models::UserSummary;

use crate::core::list::{ColumnSpec, FieldSpec, ListEndpoints, ListMessages, ListSchema, Record};

/// List-all endpoint.
pub const USERS_PATH: &str = "/api/users";

fn detail_path(id: &str) -> String {
    format!("/api/user-details/{}", urlencoding::encode(id))
}

static USER_FIELDS: [FieldSpec<UserSummary>; 5] = [
    FieldSpec {
        key: "name",
        sort_value: |row| format!("{} {}", row.first_name, row.last_name),
    },
    FieldSpec {
        key: "email",
        sort_value: |row| row.email.clone(),
    },
    FieldSpec {
        key: "branch",
        sort_value: |row| row.branch.clone(),
    },
    FieldSpec {
        key: "employeeid",
        sort_value: |row| row.employee_id.clone(),
    },
    FieldSpec {
        key: "isactive",
        sort_value: |row| if row.is_active { "active" } else { "inactive" }.to_string(),
    },
];

static USER_COLUMNS: [ColumnSpec<UserSummary>; 7] = [
    ColumnSpec {
        label: "User ID",
        sort_key: None,
        cell: |row| row.user_id.clone(),
    },
    ColumnSpec {
        label: "Name",
        sort_key: Some("name"),
        cell: UserSummary::display_name,
    },
    ColumnSpec {
        label: "Email",
        sort_key: Some("email"),
        cell: |row| row.email.clone(),
    },
    ColumnSpec {
        label: "Phone",
        sort_key: None,
        cell: |row| row.phone_number.clone(),
    },
    ColumnSpec {
        label: "Branch",
        sort_key: Some("branch"),
        cell: |row| row.branch.clone(),
    },
    ColumnSpec {
        label: "Employee ID",
        sort_key: Some("employeeid"),
        cell: |row| row.employee_id.clone(),
    },
    ColumnSpec {
        label: "Status",
        sort_key: Some("isactive"),
        cell: |row| row.status_label().to_string(),
    },
];

/// Schema for the admin user table. Users are read-only here.
pub static USER_SCHEMA: ListSchema<UserSummary> = ListSchema {
    id_of: |row| row.user_id.clone(),
    fields: &USER_FIELDS,
    columns: &USER_COLUMNS,
    endpoints: ListEndpoints {
        list_all: USERS_PATH,
        search: None,
        detail: detail_path,
        delete: None,
    },
    messages: ListMessages {
        plural: "users",
        search_failed: "Search failed",
        search_network: "Network error occurred during search",
        fetch_failed: "Failed to fetch users",
        fetch_network: "Network error occurred while fetching users",
        detail_failed: "Failed to fetch user details",
        detail_network: "Network error occurred while fetching user details",
    },
};

impl Record for UserSummary {
    fn schema() -> &'static ListSchema<Self> {
        &USER_SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gateway::Method;
    use crate::core::screen::ListScreenHandle;
    use crate::core::testing::{RecordingTransport, gateway_with};
    use std::rc::Rc;

    const USERS: &str = r#"[
        {"UserID": 7, "FirstName": "Ben", "LastName": "Tan", "IsActive": 0},
        {"UserID": 8, "FirstName": "Ada", "LastName": "Lim", "IsActive": 1}
    ]"#;

    #[tokio::test]
    async fn status_sort_orders_active_first() {
        let transport = Rc::new(RecordingTransport::new());
        transport.respond(Method::Get, USERS_PATH, 200, USERS);
        let screen = ListScreenHandle::<UserSummary>::new(gateway_with(&transport));

        screen.load_all().await;
        screen.cell().update(|state| state.list.sort("isactive"));

        screen.cell().with(|state| {
            let ids: Vec<_> = state.list.visible_ids();
            assert_eq!(ids, vec!["8".to_string(), "7".to_string()]);
        });
    }

    #[tokio::test]
    async fn failed_refresh_keeps_rows_and_notifies() {
        let transport = Rc::new(RecordingTransport::new());
        transport.respond(Method::Get, USERS_PATH, 200, USERS);
        let screen = ListScreenHandle::<UserSummary>::new(gateway_with(&transport));
        screen.load_all().await;

        transport.fail(Method::Get, USERS_PATH);
        screen.refresh().await;

        assert_eq!(transport.count(Method::Get, USERS_PATH), 2);
        screen.cell().with(|state| {
            assert_eq!(state.list.total(), 2);
            assert_eq!(
                state.notices.current().map(|notice| notice.message.as_str()),
                Some("Network error occurred while fetching users")
            );
        });
    }

    #[test]
    fn delete_is_not_offered() {
        assert!(USER_SCHEMA.endpoints.delete.is_none());
        assert!(USER_SCHEMA.endpoints.search.is_none());
    }
}
