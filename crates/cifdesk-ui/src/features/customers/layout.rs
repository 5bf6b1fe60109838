//! CIF detail layout.

use cifdesk_api_models::{CustomerSummary, DetailRecord};

use crate::core::detail::{DetailField, DetailLayout, DetailSection, FieldFormat, HasDetailLayout};

const DATE: FieldFormat = FieldFormat::Date;
const FLAG: FieldFormat = FieldFormat::Flag;

/// `FullName` when the record carries one, else first, middle and last joined.
#[must_use]
pub fn full_name(record: &DetailRecord) -> String {
    if let Some(full) = record.text("FullName").filter(|name| !name.trim().is_empty()) {
        return full;
    }
    ["FirstName", "MiddleName", "LastName"]
        .iter()
        .filter_map(|key| record.text(key))
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

static PERSONAL: [DetailField; 14] = [
    DetailField::text("CIF Key", "CIFKey"),
    DetailField::with("Full Name", "FullName", FieldFormat::Computed(full_name)),
    DetailField::text("First Name", "FirstName"),
    DetailField::text("Middle Name", "MiddleName"),
    DetailField::text("Last Name", "LastName"),
    DetailField::text("Nickname", "Nickname"),
    DetailField::text("Suffix", "Suffix"),
    DetailField::with("Birth Date", "BirthDate", DATE),
    DetailField::text("Place of Birth", "PlaceOfBirth"),
    DetailField::text("Sex", "Sex"),
    DetailField::text("Civil Status", "CivilStatus"),
    DetailField::text("Citizenship", "Citizenship"),
    DetailField::text("Dependents", "Dependents"),
    DetailField::text("Mother's Maiden Name", "MothersMaidenName"),
];

static CONTACT: [DetailField; 9] = [
    DetailField::text("Home Phone", "HomePhone"),
    DetailField::text("Home Mobile", "HomeMobilePhone"),
    DetailField::text("Mobile No", "MobileNo"),
    DetailField::text("Business Phone", "BusinessPhone"),
    DetailField::text("Business Mobile", "BusinessMobilePhone"),
    DetailField::text("Email", "Email"),
    DetailField::text("Home Email", "HomeEmail"),
    DetailField::text("Business Email", "BusinessEmail"),
    DetailField::text("Personal Email", "PersonalEmailAddress"),
];

static ADDRESS: [DetailField; 13] = [
    DetailField::text("Home Address", "HomeAddress"),
    DetailField::text("Home Address 2", "HomeAddress2"),
    DetailField::text("Home Address 3", "HomeAddress3"),
    DetailField::text("Home ZIP", "HomeZip"),
    DetailField::text("Home Region", "HomeRegion"),
    DetailField::text("Home Country", "HomeCountry"),
    DetailField::text("Business Address", "BusinessAddress"),
    DetailField::text("Business Address 2", "BusinessAddress2"),
    DetailField::text("Business Address 3", "BusinessAddress3"),
    DetailField::text("Business ZIP", "BusinessZIP"),
    DetailField::text("Business Region", "BusinessRegion"),
    DetailField::text("Business Country", "BusinessCountry"),
    DetailField::text("Mailing Address", "MailingAddress"),
];

static BUSINESS: [DetailField; 7] = [
    DetailField::text("Business Name", "BusinessName"),
    DetailField::text("Nature of Business", "NatureOfBusiness"),
    DetailField::text("Kind of Business", "KindOfBusiness"),
    DetailField::with("Business Start Date", "BusinessStartDate", DATE),
    DetailField::text("Annual Gross Income", "BusinessAnnualGrossIncome"),
    DetailField::text("Source of Funds", "SourceOfFunds"),
    DetailField::text("Other Source of Funds", "OtherSourceOfFunds"),
];

static ACCOUNT: [DetailField; 8] = [
    DetailField::text("CASA Account Number", "CASAAccountNumber"),
    DetailField::text("Other Bank Accounts", "OtherBankAccounts"),
    DetailField::text("Customer Classification", "CustomerClassification"),
    DetailField::text("Customer Risk Profile", "CustomerRiskProfile"),
    DetailField::with("DOSRI", "DOSRI", FLAG),
    DetailField::text("DOSRI Tag", "DOSRITag"),
    DetailField::with("Bank Employee", "BankEmployeeIndicator", FLAG),
    DetailField::with("Taxable", "Taxable", FLAG),
];

static STATUS: [DetailField; 8] = [
    DetailField::text("CIF Status", "CIFStatus"),
    DetailField::text("CIF Sts", "CIFSts"),
    DetailField::text("Approved By", "ApprovedBy"),
    DetailField::with("Date Approved", "DateApproved", DATE),
    DetailField::with("Date Added", "DateAdded", DATE),
    DetailField::with("Date Updated", "DateUpdated", DATE),
    DetailField::with("Date Sent", "DateSent", DATE),
    DetailField::text("CIF Remark", "CIFRemark"),
];

static OTHER: [DetailField; 4] = [
    DetailField::text("CIF Personal ID", "CIFPersonalID"),
    DetailField::text("Old Reference", "OldReference"),
    DetailField::text("Relationship", "Relationship"),
    DetailField::text("Other Info", "OtherInfo"),
];

static SECTIONS: [DetailSection; 7] = [
    DetailSection {
        title: "Personal Information",
        fields: &PERSONAL,
    },
    DetailSection {
        title: "Contact Information",
        fields: &CONTACT,
    },
    DetailSection {
        title: "Address Information",
        fields: &ADDRESS,
    },
    DetailSection {
        title: "Business Information",
        fields: &BUSINESS,
    },
    DetailSection {
        title: "Account Information",
        fields: &ACCOUNT,
    },
    DetailSection {
        title: "Status Information",
        fields: &STATUS,
    },
    DetailSection {
        title: "Other Information",
        fields: &OTHER,
    },
];

/// Layout of the CIF detail view.
pub static CUSTOMER_DETAIL: DetailLayout = DetailLayout {
    heading: "CIF Details",
    id_key: "CIFKey",
    sections: &SECTIONS,
};

impl HasDetailLayout for CustomerSummary {
    fn detail_layout() -> &'static DetailLayout {
        &CUSTOMER_DETAIL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::utc_offset;
    use serde_json::json;

    fn record(value: serde_json::Value) -> DetailRecord {
        serde_json::from_value(value).expect("detail record")
    }

    #[test]
    fn full_name_prefers_the_stored_value() {
        let stored = record(json!({"FullName": "Ma. Clara Reyes", "FirstName": "Clara"}));
        assert_eq!(full_name(&stored), "Ma. Clara Reyes");

        let parts = record(json!({"FirstName": "Juan", "MiddleName": null, "LastName": "Cruz"}));
        assert_eq!(full_name(&parts), "Juan Cruz");
    }

    #[test]
    fn title_and_flags_render() {
        let detail = record(json!({
            "CIFKey": "000451",
            "DOSRI": true,
            "BankEmployeeIndicator": "0",
            "DateApproved": "2023-06-01T00:00:00.000Z"
        }));
        assert_eq!(CUSTOMER_DETAIL.title(&detail, "ignored"), "CIF Details - 000451");

        let account = &CUSTOMER_DETAIL.sections[4];
        assert_eq!(account.title, "Account Information");
        let rendered: Vec<_> = account
            .fields
            .iter()
            .filter(|field| matches!(field.format, FieldFormat::Flag))
            .map(|field| field.render(&detail, utc_offset()))
            .collect();
        assert_eq!(rendered, vec!["Yes", "No", "No"]);

        let approved = CUSTOMER_DETAIL.sections[5].fields[3];
        assert_eq!(approved.render(&detail, utc_offset()), "6/1/2023");
    }
}
