use axum::{
    extract::{Extension, Query},
    Json,
};

use crate::models::TransformedOrganizationResponse;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::routes::organizations::ListParams;

/// List organizations with the derived `is_large` classification.
///
/// Sorts by employee count descending unless the caller asks otherwise.
pub async fn transformed_organizations_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<TransformedOrganizationResponse>, ApiError> {
    let query = params.into_query(state.default_page_size)?;
    let response = state.directory.get_transformed_organizations(query).await?;
    Ok(Json(response))
}
