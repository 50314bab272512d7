//! REST implementation of the mail service boundary
//!
//! Routes consumed (relative to the configured base URL):
//!
//! - `GET  /messages` — list with `folder`, `q`, `category`, `group`,
//!   `offset`, `limit` query parameters
//! - `GET  /messages/{id}` — fetch one
//! - `POST /messages` — send
//! - `POST /messages/{id}/star` / `POST /messages/{id}/unstar`
//! - `POST /messages/{id}/trash` / `POST /messages/{id}/restore`,
//!   with a `from` parameter naming the originating folder
//! - `POST /messages/{id}/read`
//!
//! Attachments travel base64-encoded inside the send payload; nothing
//! is uploaded before the send call.

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::folder::Folder;
use crate::model::{Message, MessageId};
use crate::service::{ListQuery, MailService, OutgoingMessage};
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// `reqwest`-backed [`MailService`] for the school messaging REST API.
pub struct HttpMailService {
    client: reqwest::Client,
    config: ServiceConfig,
}

/// Wire wrapper for list responses.
#[derive(Debug, Deserialize)]
struct ListResponse {
    items: Vec<Message>,
}

/// Wire shape of the send payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendRequest<'a> {
    subject: &'a str,
    body: &'a str,
    recipient_ids: &'a [u64],
    category_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<u64>,
    attachments: Vec<SendAttachment>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendAttachment {
    filename: String,
    /// Base64-encoded file content.
    content: String,
}

impl HttpMailService {
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.config.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Turn a non-2xx response into [`Error::Api`].
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api { status, body })
        }
    }

    async fn post_action(&self, id: MessageId, action: &str, from: Option<Folder>) -> Result<()> {
        let mut builder = self.request(reqwest::Method::POST, &format!("/messages/{id}/{action}"));
        if let Some(from) = from {
            builder = builder.query(&[("from", from.as_str())]);
        }
        let response = builder.send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl MailService for HttpMailService {
    async fn list(&self, query: &ListQuery, offset: usize, limit: usize) -> Result<Vec<Message>> {
        debug!(
            "listing folder={} q={:?} offset={} limit={}",
            query.folder, query.query, offset, limit
        );

        let mut params: Vec<(&str, String)> = vec![
            ("folder", query.folder.as_str().to_string()),
            ("offset", offset.to_string()),
            ("limit", limit.to_string()),
        ];
        if !query.query.is_empty() {
            params.push(("q", query.query.clone()));
        }
        if let Some(category) = query.category {
            params.push(("category", category.to_string()));
        }
        if let Some(group) = query.group {
            params.push(("group", group.to_string()));
        }

        let response = self
            .request(reqwest::Method::GET, "/messages")
            .query(&params)
            .send()
            .await?;

        let list: ListResponse = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        debug!("got {} messages", list.items.len());
        Ok(list.items)
    }

    async fn get(&self, id: MessageId) -> Result<Message> {
        debug!("fetching message {id}");

        let response = self
            .request(reqwest::Method::GET, &format!("/messages/{id}"))
            .send()
            .await?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))
    }

    async fn send(&self, outgoing: &OutgoingMessage) -> Result<Message> {
        let engine = base64::engine::general_purpose::STANDARD;

        let payload = SendRequest {
            subject: &outgoing.subject,
            body: &outgoing.body,
            recipient_ids: &outgoing.recipient_ids,
            category_id: outgoing.category_id,
            parent_id: outgoing.parent_id,
            attachments: outgoing
                .attachments
                .iter()
                .map(|a| SendAttachment {
                    filename: a.filename.clone(),
                    content: engine.encode(&a.content),
                })
                .collect(),
        };

        debug!(
            "sending message to {} recipients, {} attachments",
            outgoing.recipient_ids.len(),
            outgoing.attachments.len()
        );

        let response = self
            .request(reqwest::Method::POST, "/messages")
            .json(&payload)
            .send()
            .await?;

        let created: Message = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        info!("sent message, id={}", created.id);
        Ok(created)
    }

    async fn set_starred(&self, id: MessageId, starred: bool) -> Result<()> {
        let action = if starred { "star" } else { "unstar" };
        debug!("{action} message {id}");
        self.post_action(id, action, None).await
    }

    async fn set_trashed(&self, id: MessageId, trashed: bool, from: Folder) -> Result<()> {
        let action = if trashed { "trash" } else { "restore" };
        debug!("{action} message {id} (from {from})");
        self.post_action(id, action, Some(from)).await
    }

    async fn mark_read(&self, id: MessageId) -> Result<()> {
        debug!("marking message {id} as read");
        self.post_action(id, "read", None).await
    }
}
