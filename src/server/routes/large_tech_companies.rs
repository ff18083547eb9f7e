use axum::{
    extract::{Extension, Query},
    Json,
};
use serde::Deserialize;

use crate::models::OrganizationResponse;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::routes::check_page_size;

/// Pagination parameters for the large tech companies endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub size: Option<u32>,
    #[serde(default)]
    pub offset: u32,
}

/// List large technology organizations with pagination.
pub async fn large_tech_companies_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<OrganizationResponse>, ApiError> {
    let size = check_page_size(params.size.unwrap_or(state.default_page_size))?;
    let response = state
        .directory
        .get_large_tech_companies(size, params.offset)
        .await?;
    Ok(Json(response))
}
