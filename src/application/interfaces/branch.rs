use crate::error::AppError;
use crate::model::requests::ListOptions;
use crate::presentation::branch::{Branch, ProtectedBranch};
use async_trait::async_trait;

/// Interface for the branch service
#[async_trait]
pub trait BranchService: Send + Sync {
    /// Lists all branches of a repository
    async fn list_branches(
        &self,
        owner: &str,
        repo: &str,
        options: ListOptions,
    ) -> Result<Vec<Branch>, AppError>;

    /// Gets a single branch
    async fn get_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<Branch, AppError>;

    /// Creates `branch` from `refs` (a branch, tag or commit sha)
    async fn create_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        refs: &str,
    ) -> Result<Branch, AppError>;

    /// Protects a branch and reports its resulting protection status
    async fn set_protection_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<ProtectedBranch, AppError>;

    /// Removes protection from a branch
    async fn remove_protection_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<(), AppError>;
}
