use crate::application::client::{Client, segment};
use crate::application::interfaces::organization::OrganizationService;
use crate::error::AppError;
use crate::model::requests::ListOptions;
use crate::presentation::organization::{Organization, User};
use crate::presentation::repository::Repository;
use crate::utils::validation::require_non_empty;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl OrganizationService for Client {
    async fn get_org(&self, org: &str) -> Result<Organization, AppError> {
        require_non_empty("org", org)?;
        info!("Getting organization {}", org);

        let source = self.http().get(&format!("/orgs/{}", segment(org)), &()).await?;
        Ok(Organization::from(source))
    }

    async fn list_orgs(&self, options: ListOptions) -> Result<Vec<Organization>, AppError> {
        info!("Listing organizations of the authenticated user");

        let rows = self.http().paginate("/user/orgs", &options).await?;
        debug!("Organizations obtained: {}", rows.len());
        Ok(rows.into_iter().map(Organization::from).collect())
    }

    async fn list_org_repos(
        &self,
        org: &str,
        options: ListOptions,
    ) -> Result<Vec<Repository>, AppError> {
        require_non_empty("org", org)?;
        info!("Listing repositories of organization {}", org);

        let rows = self
            .http()
            .paginate(&format!("/orgs/{}/repos", segment(org)), &options)
            .await?;
        debug!("Repositories obtained: {}", rows.len());
        Ok(rows.into_iter().map(Repository::from).collect())
    }

    async fn get_authenticated_user(&self) -> Result<User, AppError> {
        let source = self.http().get("/user", &()).await?;
        let user = User::from(source);
        debug!("Authenticated as {:?}", user.login);
        Ok(user)
    }
}
