/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::requests::WebhookEvents;
use crate::model::responses::RawWebhook;
use crate::presentation::serialization::from_source;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A repository webhook
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Webhook {
    /// Hook id
    pub id: Option<u64>,
    /// Callback URL
    pub url: Option<String>,
    /// Subscribed events
    pub events: WebhookEvents,
    /// Whether comment events are delivered
    pub note_events: bool,
    /// Creation time as sent by Gitee
    pub created_at: Option<String>,
    /// Raw provider response
    pub source: Value,
}

impl From<Value> for Webhook {
    fn from(source: Value) -> Self {
        let raw: RawWebhook = from_source(&source);
        Webhook {
            id: raw.id,
            url: raw.url,
            events: WebhookEvents {
                push_events: raw.push_events.unwrap_or(false),
                tag_push_events: raw.tag_push_events.unwrap_or(false),
                merge_requests_events: raw.merge_requests_events.unwrap_or(false),
                issues_events: raw.issues_events.unwrap_or(false),
            },
            note_events: raw.note_events.unwrap_or(false),
            created_at: raw.created_at,
            source,
        }
    }
}
