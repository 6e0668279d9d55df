use crate::error::AppError;
use crate::model::requests::{ListCommitsRequest, ListOptions};
use crate::presentation::commit::{Commit, RefCommit, Tag};
use async_trait::async_trait;

/// Interface for the commit service
#[async_trait]
pub trait CommitService: Send + Sync {
    /// Lists commits, following every page
    async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        request: &ListCommitsRequest,
    ) -> Result<Vec<Commit>, AppError>;

    /// Gets a single commit by sha
    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<Commit, AppError>;

    /// Resolves a reference to a commit
    ///
    /// # Arguments
    /// * `reference` - `refs/tags/<tag>`, `refs/heads/<branch>` or a bare branch name
    ///
    /// # Returns
    /// * For tags, `sha` is the release's `target_commitish` and `message` the tag name
    /// * For branches, `sha` and `message` come from the head commit
    async fn get_ref_commit(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> Result<RefCommit, AppError>;

    /// Lists all tags of a repository
    async fn list_tags(
        &self,
        owner: &str,
        repo: &str,
        options: ListOptions,
    ) -> Result<Vec<Tag>, AppError>;
}
