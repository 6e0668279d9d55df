use crate::application::client::{Client, repo_path, segment};
use crate::application::interfaces::commit::CommitService;
use crate::error::AppError;
use crate::model::requests::{GitRef, ListCommitsRequest, ListOptions};
use crate::presentation::commit::{Commit, RefCommit, Tag};
use crate::utils::validation::{require_non_empty, require_repo};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl CommitService for Client {
    async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        request: &ListCommitsRequest,
    ) -> Result<Vec<Commit>, AppError> {
        require_repo(owner, repo)?;
        info!("Listing commits of {}/{}", owner, repo);

        let path = format!("{}/commits", repo_path(owner, repo));
        let rows = self.http().paginate(&path, request).await?;
        debug!("Commits obtained: {}", rows.len());
        Ok(rows.into_iter().map(Commit::from).collect())
    }

    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<Commit, AppError> {
        require_repo(owner, repo)?;
        require_non_empty("sha", sha)?;

        let path = format!("{}/commits/{}", repo_path(owner, repo), segment(sha));
        let source = self.http().get(&path, &()).await?;
        Ok(Commit::from(source))
    }

    async fn get_ref_commit(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> Result<RefCommit, AppError> {
        require_repo(owner, repo)?;
        require_non_empty("ref", reference)?;

        let git_ref = GitRef::parse(reference);
        require_non_empty("ref", git_ref.name())?;
        debug!("Resolving {} in {}/{} as {:?}", reference, owner, repo, git_ref);

        match git_ref {
            GitRef::Tag(tag) => {
                let path = format!("{}/releases/tags/{}", repo_path(owner, repo), segment(tag));
                let source = self.http().get(&path, &()).await?;
                Ok(RefCommit::from_release(&source))
            }
            GitRef::Branch(branch) => {
                let path = format!("{}/branches/{}", repo_path(owner, repo), segment(branch));
                let source = self.http().get(&path, &()).await?;
                Ok(RefCommit::from_branch(&source))
            }
        }
    }

    async fn list_tags(
        &self,
        owner: &str,
        repo: &str,
        options: ListOptions,
    ) -> Result<Vec<Tag>, AppError> {
        require_repo(owner, repo)?;
        info!("Listing tags of {}/{}", owner, repo);

        let path = format!("{}/tags", repo_path(owner, repo));
        let rows = self.http().paginate(&path, &options).await?;
        debug!("Tags obtained: {}", rows.len());
        Ok(rows.into_iter().map(Tag::from).collect())
    }
}
