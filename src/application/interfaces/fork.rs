use crate::error::AppError;
use crate::model::requests::{CreateForkRequest, ListOptions};
use crate::presentation::repository::Fork;
use async_trait::async_trait;

/// Interface for the fork service
#[async_trait]
pub trait ForkService: Send + Sync {
    /// Forks `owner/repo` into the token's namespace or an organization
    async fn create_fork(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateForkRequest,
    ) -> Result<Fork, AppError>;

    /// Lists all forks of a repository
    async fn list_forks(
        &self,
        owner: &str,
        repo: &str,
        options: ListOptions,
    ) -> Result<Vec<Fork>, AppError>;
}
