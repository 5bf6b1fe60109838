//! User detail layout.

use cifdesk_api_models::UserSummary;

use crate::core::detail::{DetailField, DetailLayout, DetailSection, FieldFormat, HasDetailLayout};

const FLAG: FieldFormat = FieldFormat::Flag;
const STAMP: FieldFormat = FieldFormat::DateTime;

static PERSONAL: [DetailField; 8] = [
    DetailField::text("User ID", "UserID"),
    DetailField::text("User UID", "UserUID"),
    DetailField::text("First Name", "FirstName"),
    DetailField::text("Last Name", "LastName"),
    DetailField::text("Phone Number", "PhoneNumber"),
    DetailField::text("Email", "Email"),
    DetailField::text("Employee ID", "EmployeeID"),
    DetailField::text("Branch", "Branch"),
];

static ACCOUNT_STATUS: [DetailField; 5] = [
    DetailField::with("Is Active", "IsActive", FLAG),
    DetailField::with("Is Deleted", "IsDeleted", FLAG),
    DetailField::with("Lockout Enabled", "LockoutEnabled", FLAG),
    DetailField::with("Lockout End Date", "LockoutEndDateUtc", STAMP),
    DetailField::text("Access Failed Count", "AccessFailedCount"),
];

static SECURITY: [DetailField; 4] = [
    DetailField::with("Two Factor Enabled", "TwoFactorEnabled", FLAG),
    DetailField::with("Two Factor Key", "TwoFactorKey", FieldFormat::Secret),
    DetailField::with("Password Changed", "PasswordChanged", STAMP),
    DetailField::with("Token Expire Date", "TokenExpireDate", STAMP),
];

static ALERTS: [DetailField; 2] = [
    DetailField::with("Send Alert SMS", "SendAlertSMS", FLAG),
    DetailField::text("Alert SMS Contact", "AlertSMSContact"),
];

static TIMESTAMPS: [DetailField; 2] = [
    DetailField::with("Date Added", "DateAdded", STAMP),
    DetailField::with("Date Updated", "DateUpdated", STAMP),
];

static SECTIONS: [DetailSection; 5] = [
    DetailSection {
        title: "Personal Information",
        fields: &PERSONAL,
    },
    DetailSection {
        title: "Account Status",
        fields: &ACCOUNT_STATUS,
    },
    DetailSection {
        title: "Security Settings",
        fields: &SECURITY,
    },
    DetailSection {
        title: "Alert Settings",
        fields: &ALERTS,
    },
    DetailSection {
        title: "Timestamps",
        fields: &TIMESTAMPS,
    },
];

/// Layout of the user detail view.
pub static USER_DETAIL: DetailLayout = DetailLayout {
    heading: "User Details",
    id_key: "UserID",
    sections: &SECTIONS,
};

impl HasDetailLayout for UserSummary {
    fn detail_layout() -> &'static DetailLayout {
        &USER_DETAIL
    }
}
