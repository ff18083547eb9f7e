use axum::{
    extract::{Extension, Query},
    Json,
};
use serde::Deserialize;

use crate::kernel::{DirectoryQuery, SortBy, SortOrder};
use crate::models::OrganizationResponse;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::routes::check_page_size;

/// Pagination, filter and sort parameters shared by the listing endpoints.
///
/// Invalid `sort_by` / `sort_order` values fail enum deserialization, so the
/// extractor rejects them with 400 before the handler runs.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub size: Option<u32>,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub min_employees: u64,
    pub country: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

impl ListParams {
    /// Resolve into an upstream query, validating the page size.
    pub fn into_query(self, default_page_size: u32) -> Result<DirectoryQuery, ApiError> {
        let size = check_page_size(self.size.unwrap_or(default_page_size))?;

        Ok(DirectoryQuery {
            size,
            offset: self.offset,
            min_employees: self.min_employees,
            country: self.country,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        })
    }
}

/// List organizations with pagination and optional filters.
pub async fn organizations_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<OrganizationResponse>, ApiError> {
    let query = params.into_query(state.default_page_size)?;
    let response = state.directory.get_organizations(query).await?;
    Ok(Json(response))
}
