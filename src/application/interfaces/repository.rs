use crate::error::AppError;
use crate::model::requests::{CreateRepoRequest, ListOptions};
use crate::presentation::repository::{EnsuredRepo, RepoEmptiness, RepoExistence, Repository};
use async_trait::async_trait;

/// Interface for the repository service
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// Gets a repository
    async fn get_repo(&self, owner: &str, repo: &str) -> Result<Repository, AppError>;

    /// Checks whether a repository exists
    ///
    /// Any failure, including authentication or network errors, is reported
    /// as `is_exist: false` rather than returned.
    async fn has_repo(&self, owner: &str, repo: &str) -> Result<RepoExistence, AppError>;

    /// Checks whether a repository has no commits
    ///
    /// Any failure listing commits is reported as `is_empty: true`, since
    /// Gitee answers the commit list of an empty repository with an error.
    async fn check_repo_empty(&self, owner: &str, repo: &str) -> Result<RepoEmptiness, AppError>;

    /// Creates a repository under the token's user or under an organization
    ///
    /// The owner is compared with the authenticated user's login to choose
    /// between the user and organization endpoints.
    async fn create_repo(&self, request: &CreateRepoRequest) -> Result<Repository, AppError>;

    /// Deletes a repository
    async fn delete_repo(&self, owner: &str, repo: &str) -> Result<(), AppError>;

    /// Lists every repository the token's user can access
    async fn list_user_repos(&self, options: ListOptions) -> Result<Vec<Repository>, AppError>;

    /// Makes sure `owner/repo` exists and is empty
    ///
    /// # Returns
    /// * `is_new_created: true` - The repository was missing and has been created as private
    /// * `is_new_created: false` - The repository already existed without commits
    /// * `Err(AppError::RepoNotEmpty)` - The repository already exists and has commits
    async fn ensure_empty_repo(&self, owner: &str, repo: &str) -> Result<EnsuredRepo, AppError>;
}
