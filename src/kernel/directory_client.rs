use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{
    average_employees, Organization, OrganizationResponse, TransformedOrganizationResponse,
    LARGE_EMPLOYEE_THRESHOLD,
};

/// Industry label the upstream service uses for tech companies.
const TECH_INDUSTRY: &str = "Technology";

/// Sortable fields accepted by the external directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    EmployeeCount,
    Founded,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::EmployeeCount => "employee_count",
            SortBy::Founded => "founded",
        }
    }
}

/// Sort direction accepted by the external directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query forwarded to the external directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryQuery {
    pub size: u32,
    pub offset: u32,
    pub min_employees: u64,
    pub country: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

impl DirectoryQuery {
    /// Query pairs sent upstream. `size` and `offset` are always present;
    /// filters and sort keys only when set.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("size", self.size.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if self.min_employees > 0 {
            params.push(("min_employees", self.min_employees.to_string()));
        }
        if let Some(country) = &self.country {
            params.push(("country", country.clone()));
        }
        if let Some(sort_by) = self.sort_by {
            params.push(("sort_by", sort_by.as_str().to_string()));
        }
        if let Some(sort_order) = self.sort_order {
            params.push(("sort_order", sort_order.as_str().to_string()));
        }
        params
    }

    /// Fill in a sort key and direction when the caller supplied none.
    pub fn or_default_sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        if self.sort_by.is_none() {
            self.sort_by = Some(sort_by);
            self.sort_order = Some(sort_order);
        }
        self
    }
}

/// Errors talking to the external directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("external directory request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("external directory returned {status}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Upstream response envelope: a `data` array plus the total record count.
#[derive(Debug, Deserialize)]
struct DirectoryPage {
    data: Vec<Organization>,
    #[allow(dead_code)]
    total_records: u64,
}

/// Read operations against the external organization directory.
#[async_trait]
pub trait OrganizationDirectory: Send + Sync {
    async fn get_organizations(
        &self,
        query: DirectoryQuery,
    ) -> Result<OrganizationResponse, DirectoryError>;

    async fn get_transformed_organizations(
        &self,
        query: DirectoryQuery,
    ) -> Result<TransformedOrganizationResponse, DirectoryError>;

    async fn get_large_tech_companies(
        &self,
        size: u32,
        offset: u32,
    ) -> Result<OrganizationResponse, DirectoryError>;
}

/// HTTP client for the external organization directory.
pub struct DirectoryClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl DirectoryClient {
    /// Create a new directory client
    pub fn new(base_url: String, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    async fn fetch_page(&self, query: &DirectoryQuery) -> Result<DirectoryPage, DirectoryError> {
        let response = self
            .client
            .get(format!("{}/data", self.base_url))
            .header("api-key", &self.api_key)
            .query(&query.to_query_params())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl OrganizationDirectory for DirectoryClient {
    async fn get_organizations(
        &self,
        query: DirectoryQuery,
    ) -> Result<OrganizationResponse, DirectoryError> {
        let page = self.fetch_page(&query).await?;

        Ok(OrganizationResponse {
            average_employees: average_employees(&page.data),
            organizations: page.data,
        })
    }

    async fn get_transformed_organizations(
        &self,
        query: DirectoryQuery,
    ) -> Result<TransformedOrganizationResponse, DirectoryError> {
        // This view lists the biggest organizations first unless told otherwise.
        let query = query.or_default_sort(SortBy::EmployeeCount, SortOrder::Desc);
        let page = self.fetch_page(&query).await?;
        let average = average_employees(&page.data);

        Ok(TransformedOrganizationResponse {
            organizations: page.data.into_iter().map(Into::into).collect(),
            average_employees: average,
        })
    }

    async fn get_large_tech_companies(
        &self,
        size: u32,
        offset: u32,
    ) -> Result<OrganizationResponse, DirectoryError> {
        let query = DirectoryQuery {
            size,
            offset,
            min_employees: LARGE_EMPLOYEE_THRESHOLD,
            ..Default::default()
        };
        let page = self.fetch_page(&query).await?;

        // The upstream filter handles size; industry is narrowed here.
        let tech: Vec<Organization> = page
            .data
            .into_iter()
            .filter(|org| org.industry == TECH_INDUSTRY)
            .collect();

        Ok(OrganizationResponse {
            average_employees: average_employees(&tech),
            organizations: tech,
        })
    }
}
