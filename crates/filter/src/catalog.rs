//! Built-in field catalogs for the provider, credentialing and upload tables.

use crate::field::{FieldCatalog, FieldDescriptor, SelectOption};

/// Names accepted by [`FieldCatalog::builtin`].
pub const BUILTIN_CATALOGS: [&str; 3] = ["providers", "credentialing", "uploads"];

// State ids are 1-based positions in this list (DC sits between DE and FL).
const STATES: [&str; 51] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "District of Columbia",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

fn options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(value, label)| SelectOption::new(*value, *label))
        .collect()
}

fn state_options() -> Vec<SelectOption> {
    (1_u64..)
        .zip(STATES)
        .map(|(id, name)| SelectOption::new(id, name))
        .collect()
}

fn approval_statuses() -> Vec<SelectOption> {
    options(&[
        ("APPROVED", "Approved"),
        ("PENDING", "Pending"),
        ("IN_PROGRESS", "In Progress"),
        ("DENIED", "Denied"),
        ("EXPIRED", "Expired"),
    ])
}

// Builtins are fixed literals with distinct keys.
fn fixed(descriptors: Vec<FieldDescriptor>) -> FieldCatalog {
    FieldCatalog::try_new(descriptors).unwrap_or_default()
}

impl FieldCatalog {
    /// Look up a built-in catalog by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "providers" => Some(Self::providers()),
            "credentialing" => Some(Self::credentialing()),
            "uploads" => Some(Self::uploads()),
            _ => None,
        }
    }

    /// Fields of the provider directory table.
    pub fn providers() -> Self {
        fixed(vec![
            FieldDescriptor::text("firstName", "First Name"),
            FieldDescriptor::text("lastName", "Last Name"),
            FieldDescriptor::number("npi", "NPI"),
            FieldDescriptor::text("email", "Email"),
            FieldDescriptor::text("phone", "Phone"),
            FieldDescriptor::select(
                "basicInfo.degree",
                "Degree",
                options(&[
                    ("MD", "Doctor of Medicine"),
                    ("DO", "Doctor of Osteopathic Medicine"),
                    ("NP", "Nurse Practitioner"),
                    ("PA", "Physician Assistant"),
                    ("DDS", "Doctor of Dental Surgery"),
                    ("PhD", "Doctor of Philosophy"),
                    ("LCSW", "Licensed Clinical Social Worker"),
                ]),
            ),
            FieldDescriptor::text("basicInfo.specialty", "Specialty"),
            FieldDescriptor::select(
                "basicInfo.cred_approval_status",
                "Credentialing Status",
                approval_statuses(),
            ),
            FieldDescriptor::boolean("basicInfo.isActive", "Active"),
            FieldDescriptor::select("address.stateId", "State", state_options()),
            FieldDescriptor::text("address.city", "City"),
            FieldDescriptor::text("address.zipCode", "ZIP Code"),
            FieldDescriptor::text("address.healthPlans.name", "Health Plan"),
            FieldDescriptor::date("createdAt", "Created"),
            FieldDescriptor::date("updatedAt", "Last Updated"),
        ])
    }

    /// Fields of the credentialing workflow table.
    pub fn credentialing() -> Self {
        fixed(vec![
            FieldDescriptor::text("providerName", "Provider"),
            FieldDescriptor::number("npi", "NPI"),
            FieldDescriptor::select(
                "status",
                "Status",
                options(&[
                    ("NOT_STARTED", "Not Started"),
                    ("IN_PROGRESS", "In Progress"),
                    ("PENDING_REVIEW", "Pending Review"),
                    ("APPROVED", "Approved"),
                    ("DENIED", "Denied"),
                    ("RECREDENTIALING", "Re-credentialing"),
                ]),
            ),
            FieldDescriptor::select(
                "priority",
                "Priority",
                options(&[
                    ("LOW", "Low"),
                    ("MEDIUM", "Medium"),
                    ("HIGH", "High"),
                    ("URGENT", "Urgent"),
                ]),
            ),
            FieldDescriptor::text("assignedTo", "Assigned To"),
            FieldDescriptor::date("applicationDate", "Application Date"),
            FieldDescriptor::date("dueDate", "Due Date"),
            FieldDescriptor::date("completedDate", "Completed Date"),
            FieldDescriptor::number("daysInProcess", "Days in Process"),
            FieldDescriptor::boolean("committeeApproved", "Committee Approved"),
            FieldDescriptor::text("documents.type", "Document Type"),
        ])
    }

    /// Fields of the upload history table.
    pub fn uploads() -> Self {
        fixed(vec![
            FieldDescriptor::text("fileName", "File Name"),
            FieldDescriptor::select(
                "fileType",
                "File Type",
                options(&[("CSV", "CSV"), ("XLSX", "Excel"), ("PDF", "PDF")]),
            ),
            FieldDescriptor::text("uploadedBy", "Uploaded By"),
            FieldDescriptor::date("uploadedAt", "Uploaded At"),
            FieldDescriptor::select(
                "status",
                "Status",
                options(&[
                    ("PROCESSING", "Processing"),
                    ("COMPLETED", "Completed"),
                    ("PARTIAL", "Partially Imported"),
                    ("FAILED", "Failed"),
                ]),
            ),
            FieldDescriptor::number("recordCount", "Records"),
            FieldDescriptor::number("errorCount", "Errors"),
            FieldDescriptor::text("errors.message", "Error Message"),
        ])
    }
}
