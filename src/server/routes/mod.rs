// HTTP routes
pub mod health;
pub mod large_tech_companies;
pub mod organizations;
pub mod transformed_organizations;

pub use health::*;
pub use large_tech_companies::*;
pub use organizations::*;
pub use transformed_organizations::*;

use crate::server::error::ApiError;

/// Upper bound on the page size accepted by every listing endpoint.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Reject page sizes outside 1..=MAX_PAGE_SIZE.
pub(crate) fn check_page_size(size: u32) -> Result<u32, ApiError> {
    if size == 0 || size > MAX_PAGE_SIZE {
        return Err(ApiError::InvalidParameter(format!(
            "size must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(size)
}
