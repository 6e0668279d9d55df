use crate::application::client::{Client, repo_path, segment};
use crate::application::interfaces::organization::OrganizationService;
use crate::application::interfaces::repository::RepositoryService;
use crate::error::AppError;
use crate::model::requests::{CreateRepoRequest, ListOptions};
use crate::presentation::repository::{EnsuredRepo, RepoEmptiness, RepoExistence, Repository};
use crate::utils::validation::require_repo;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl RepositoryService for Client {
    async fn get_repo(&self, owner: &str, repo: &str) -> Result<Repository, AppError> {
        require_repo(owner, repo)?;
        info!("Getting repository {}/{}", owner, repo);

        let source = self.http().get(&repo_path(owner, repo), &()).await?;
        Ok(Repository::from(source))
    }

    async fn has_repo(&self, owner: &str, repo: &str) -> Result<RepoExistence, AppError> {
        require_repo(owner, repo)?;

        match self.http().get(&repo_path(owner, repo), &()).await {
            Ok(_) => Ok(RepoExistence { is_exist: true }),
            Err(e) => {
                debug!("Treating {}/{} as missing: {}", owner, repo, e);
                Ok(RepoExistence { is_exist: false })
            }
        }
    }

    async fn check_repo_empty(&self, owner: &str, repo: &str) -> Result<RepoEmptiness, AppError> {
        require_repo(owner, repo)?;

        let path = format!("{}/commits", repo_path(owner, repo));
        let params = ListOptions::new().with_per_page(1);
        let is_empty = match self.http().get(&path, &params).await {
            Ok(Value::Array(commits)) => commits.is_empty(),
            Ok(other) => {
                debug!("Unexpected commit list for {}/{}: {}", owner, repo, other);
                true
            }
            Err(e) => {
                debug!("Treating {}/{} as empty: {}", owner, repo, e);
                true
            }
        };

        debug!("Repository {}/{} empty: {}", owner, repo, is_empty);
        Ok(RepoEmptiness { is_empty })
    }

    async fn create_repo(&self, request: &CreateRepoRequest) -> Result<Repository, AppError> {
        require_repo(&request.owner, &request.name)?;

        let user = self.get_authenticated_user().await?;
        let owned_by_user = user
            .login
            .as_deref()
            .is_some_and(|login| login.eq_ignore_ascii_case(&request.owner));
        let path = if owned_by_user {
            "/user/repos".to_string()
        } else {
            format!("/orgs/{}/repos", segment(&request.owner))
        };

        info!(
            "Creating {} repository {}/{}",
            if request.private { "private" } else { "public" },
            request.owner,
            request.name
        );
        let source = self.http().post(&path, request).await?;
        Ok(Repository::from(source))
    }

    async fn delete_repo(&self, owner: &str, repo: &str) -> Result<(), AppError> {
        require_repo(owner, repo)?;
        info!("Deleting repository {}/{}", owner, repo);

        self.http().delete(&repo_path(owner, repo), &()).await?;
        Ok(())
    }

    async fn list_user_repos(&self, options: ListOptions) -> Result<Vec<Repository>, AppError> {
        info!("Listing repositories of the authenticated user");

        let rows = self.http().paginate("/user/repos", &options).await?;
        debug!("Repositories obtained: {}", rows.len());
        Ok(rows.into_iter().map(Repository::from).collect())
    }

    async fn ensure_empty_repo(&self, owner: &str, repo: &str) -> Result<EnsuredRepo, AppError> {
        require_repo(owner, repo)?;

        if self.has_repo(owner, repo).await?.is_exist {
            if self.check_repo_empty(owner, repo).await?.is_empty {
                info!("Reusing existing empty repository {}/{}", owner, repo);
                return Ok(EnsuredRepo {
                    url: self.repo_url(owner, repo),
                    is_new_created: false,
                });
            }
            return Err(AppError::RepoNotEmpty(format!("{owner}/{repo}")));
        }

        let request = CreateRepoRequest::new(owner, repo).private(true);
        let created = self.create_repo(&request).await?;
        Ok(EnsuredRepo {
            url: created.url.unwrap_or_else(|| self.repo_url(owner, repo)),
            is_new_created: true,
        })
    }
}
