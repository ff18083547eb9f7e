use serde::{Deserialize, Serialize};

/// A single organization record as returned by the external directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub country: String,
    pub employee_count: u64,
    pub industry: String,
    pub founded: i32,
}

/// Response body for endpoints that return raw organization records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationResponse {
    pub organizations: Vec<Organization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_employees: Option<f64>,
}

/// Mean employee count over one page of records.
///
/// Returns `None` for an empty page rather than dividing by zero. The average
/// covers the returned page only, not the upstream total.
pub fn average_employees(records: &[Organization]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let total: u64 = records.iter().map(|org| org.employee_count).sum();
    Some(total as f64 / records.len() as f64)
}
