use crate::error::AppError;
use crate::model::requests::{ListOptions, WebhookRequest};
use crate::presentation::webhook::Webhook;
use async_trait::async_trait;

/// Interface for the webhook service
#[async_trait]
pub trait WebhookService: Send + Sync {
    /// Lists all webhooks of a repository
    async fn list_webhooks(
        &self,
        owner: &str,
        repo: &str,
        options: ListOptions,
    ) -> Result<Vec<Webhook>, AppError>;

    /// Gets a webhook by id
    async fn get_webhook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<Webhook, AppError>;

    /// Registers a webhook
    async fn create_webhook(
        &self,
        owner: &str,
        repo: &str,
        request: &WebhookRequest,
    ) -> Result<Webhook, AppError>;

    /// Replaces the URL, password and events of a webhook
    async fn update_webhook(
        &self,
        owner: &str,
        repo: &str,
        hook_id: u64,
        request: &WebhookRequest,
    ) -> Result<Webhook, AppError>;

    /// Deletes a webhook
    async fn delete_webhook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<(), AppError>;

    /// Asks Gitee to deliver a test push event to a webhook
    async fn test_webhook(&self, owner: &str, repo: &str, hook_id: u64) -> Result<(), AppError>;
}
