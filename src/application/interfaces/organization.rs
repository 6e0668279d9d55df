use crate::error::AppError;
use crate::model::requests::ListOptions;
use crate::presentation::organization::{Organization, User};
use crate::presentation::repository::Repository;
use async_trait::async_trait;

/// Interface for organization and user lookups
#[async_trait]
pub trait OrganizationService: Send + Sync {
    /// Gets an organization
    async fn get_org(&self, org: &str) -> Result<Organization, AppError>;

    /// Lists the organizations the token's user belongs to
    async fn list_orgs(&self, options: ListOptions) -> Result<Vec<Organization>, AppError>;

    /// Lists all repositories of an organization
    async fn list_org_repos(
        &self,
        org: &str,
        options: ListOptions,
    ) -> Result<Vec<Repository>, AppError>;

    /// Gets the user owning the access token
    async fn get_authenticated_user(&self) -> Result<User, AppError>;
}
