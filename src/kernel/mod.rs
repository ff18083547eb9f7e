//! Kernel module - outbound infrastructure.

pub mod directory_client;

pub use directory_client::{
    DirectoryClient, DirectoryError, DirectoryQuery, OrganizationDirectory, SortBy, SortOrder,
};
