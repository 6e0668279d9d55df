use crate::application::client::{Client, repo_path};
use crate::application::interfaces::webhook::WebhookService;
use crate::error::AppError;
use crate::model::requests::{ListOptions, WebhookRequest};
use crate::presentation::webhook::Webhook;
use crate::utils::validation::{require_http_url, require_id, require_repo};
use async_trait::async_trait;
use tracing::{debug, info, warn};

fn hooks_path(owner: &str, repo: &str) -> String {
    format!("{}/hooks", repo_path(owner, repo))
}

fn validate_request(request: &WebhookRequest) -> Result<(), AppError> {
    require_http_url("url", &request.url)?;
    if request.events.is_empty() {
        warn!("Webhook {} subscribes to no events", request.url);
    }
    Ok(())
}

#[async_trait]
impl WebhookService for Client {
    async fn list_webhooks(
        &self,
        owner: &str,
        repo: &str,
        options: ListOptions,
    ) -> Result<Vec<Webhook>, AppError> {
        require_repo(owner, repo)?;
        info!("Listing webhooks of {}/{}", owner, repo);

        let rows = self
            .http()
            .paginate(&hooks_path(owner, repo), &options)
            .await?;
        debug!("Webhooks obtained: {}", rows.len());
        Ok(rows.into_iter().map(Webhook::from).collect())
    }

    async fn get_webhook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<Webhook, AppError> {
        require_repo(owner, repo)?;
        require_id("hook_id", hook_id)?;

        let path = format!("{}/{}", hooks_path(owner, repo), hook_id);
        let source = self.http().get(&path, &()).await?;
        Ok(Webhook::from(source))
    }

    async fn create_webhook(
        &self,
        owner: &str,
        repo: &str,
        request: &WebhookRequest,
    ) -> Result<Webhook, AppError> {
        require_repo(owner, repo)?;
        validate_request(request)?;
        info!("Creating webhook {} on {}/{}", request.url, owner, repo);

        let source = self.http().post(&hooks_path(owner, repo), request).await?;
        Ok(Webhook::from(source))
    }

    async fn update_webhook(
        &self,
        owner: &str,
        repo: &str,
        hook_id: u64,
        request: &WebhookRequest,
    ) -> Result<Webhook, AppError> {
        require_repo(owner, repo)?;
        require_id("hook_id", hook_id)?;
        validate_request(request)?;
        info!("Updating webhook {} on {}/{}", hook_id, owner, repo);

        let path = format!("{}/{}", hooks_path(owner, repo), hook_id);
        let source = self.http().patch(&path, request).await?;
        Ok(Webhook::from(source))
    }

    async fn delete_webhook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<(), AppError> {
        require_repo(owner, repo)?;
        require_id("hook_id", hook_id)?;
        info!("Deleting webhook {} on {}/{}", hook_id, owner, repo);

        let path = format!("{}/{}", hooks_path(owner, repo), hook_id);
        self.http().delete(&path, &()).await?;
        Ok(())
    }

    async fn test_webhook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<(), AppError> {
        require_repo(owner, repo)?;
        require_id("hook_id", hook_id)?;
        info!("Testing webhook {} on {}/{}", hook_id, owner, repo);

        let path = format!("{}/{}/tests", hooks_path(owner, repo), hook_id);
        self.http().post(&path, &()).await?;
        Ok(())
    }
}
