use crate::application::client::{Client, repo_path};
use crate::application::interfaces::fork::ForkService;
use crate::error::AppError;
use crate::model::requests::{CreateForkRequest, ListOptions};
use crate::presentation::repository::Fork;
use crate::utils::validation::require_repo;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ForkService for Client {
    async fn create_fork(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateForkRequest,
    ) -> Result<Fork, AppError> {
        require_repo(owner, repo)?;
        info!(
            "Forking {}/{} into {}",
            owner,
            repo,
            request.organization.as_deref().unwrap_or("the authenticated user")
        );

        let path = format!("{}/forks", repo_path(owner, repo));
        let source = self.http().post(&path, request).await?;
        Ok(Fork::from(source))
    }

    async fn list_forks(
        &self,
        owner: &str,
        repo: &str,
        options: ListOptions,
    ) -> Result<Vec<Fork>, AppError> {
        require_repo(owner, repo)?;
        info!("Listing forks of {}/{}", owner, repo);

        let path = format!("{}/forks", repo_path(owner, repo));
        let rows = self.http().paginate(&path, &options).await?;
        debug!("Forks obtained: {}", rows.len());
        Ok(rows.into_iter().map(Fork::from).collect())
    }
}
