use serde::{Deserialize, Serialize};

use super::Organization;

/// Employee count at or above which an organization counts as large.
pub const LARGE_EMPLOYEE_THRESHOLD: u64 = 1000;

/// Organization record with the derived size classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformedOrganization {
    pub name: String,
    pub country: String,
    pub employee_count: u64,
    pub is_large: bool,
}

impl From<Organization> for TransformedOrganization {
    fn from(org: Organization) -> Self {
        Self {
            is_large: org.employee_count >= LARGE_EMPLOYEE_THRESHOLD,
            name: org.name,
            country: org.country,
            employee_count: org.employee_count,
        }
    }
}

/// Response body for the transformed organizations endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformedOrganizationResponse {
    pub organizations: Vec<TransformedOrganization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_employees: Option<f64>,
}
