use crate::application::client::{Client, repo_path, segment};
use crate::application::interfaces::branch::BranchService;
use crate::error::AppError;
use crate::model::requests::{CreateBranchRequest, ListOptions};
use crate::presentation::branch::{Branch, ProtectedBranch};
use crate::utils::validation::{require_non_empty, require_repo};
use async_trait::async_trait;
use tracing::{debug, info};

fn branch_path(owner: &str, repo: &str, branch: &str) -> String {
    format!("{}/branches/{}", repo_path(owner, repo), segment(branch))
}

#[async_trait]
impl BranchService for Client {
    async fn list_branches(
        &self,
        owner: &str,
        repo: &str,
        options: ListOptions,
    ) -> Result<Vec<Branch>, AppError> {
        require_repo(owner, repo)?;
        info!("Listing branches of {}/{}", owner, repo);

        let path = format!("{}/branches", repo_path(owner, repo));
        let rows = self.http().paginate(&path, &options).await?;
        debug!("Branches obtained: {}", rows.len());
        Ok(rows.into_iter().map(Branch::from).collect())
    }

    async fn get_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<Branch, AppError> {
        require_repo(owner, repo)?;
        require_non_empty("branch", branch)?;

        let source = self
            .http()
            .get(&branch_path(owner, repo, branch), &())
            .await?;
        Ok(Branch::from(source))
    }

    async fn create_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        refs: &str,
    ) -> Result<Branch, AppError> {
        require_repo(owner, repo)?;
        require_non_empty("branch", branch)?;
        require_non_empty("refs", refs)?;
        info!("Creating branch {} from {} in {}/{}", branch, refs, owner, repo);

        let path = format!("{}/branches", repo_path(owner, repo));
        let body = CreateBranchRequest::new(branch, refs);
        let source = self.http().post(&path, &body).await?;
        Ok(Branch::from(source))
    }

    async fn set_protection_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<ProtectedBranch, AppError> {
        require_repo(owner, repo)?;
        require_non_empty("branch", branch)?;
        info!("Protecting branch {} of {}/{}", branch, owner, repo);

        let path = branch_path(owner, repo, branch);
        self.http().put(&format!("{path}/protection"), &()).await?;

        let source = self.http().get(&path, &()).await?;
        let status = ProtectedBranch::from(source);
        debug!("Branch {} protected: {}", branch, status.protected);
        Ok(status)
    }

    async fn remove_protection_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<(), AppError> {
        require_repo(owner, repo)?;
        require_non_empty("branch", branch)?;
        info!("Removing protection from branch {} of {}/{}", branch, owner, repo);

        let path = format!("{}/protection", branch_path(owner, repo, branch));
        self.http().delete(&path, &()).await?;
        Ok(())
    }
}
