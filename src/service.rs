//! The remote mail service boundary
//!
//! [`MailService`] is the seam between the orchestration state and the
//! REST backend: the store and the compose form only ever talk to this
//! trait, so unit tests drive them against an in-memory fake while the
//! real implementation ([`HttpMailService`](crate::HttpMailService))
//! issues HTTP requests.

use crate::error::Result;
use crate::folder::Folder;
use crate::model::{
    AttachmentDraft, CategoryId, ClassId, Message, MessageId, UserId,
};
use async_trait::async_trait;

/// The filter context of a mailbox list view.
///
/// Changing any of these fields is a view change: pagination restarts
/// from offset zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub folder: Folder,
    /// Free-text search over subject and body. Empty means no filter.
    pub query: String,
    pub category: Option<CategoryId>,
    pub group: Option<ClassId>,
}

impl ListQuery {
    /// A plain folder view with no filters.
    #[must_use]
    pub const fn folder(folder: Folder) -> Self {
        Self {
            folder,
            query: String::new(),
            category: None,
            group: None,
        }
    }
}

/// A validated message ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub subject: String,
    pub body: String,
    pub recipient_ids: Vec<UserId>,
    pub category_id: CategoryId,
    /// Set when replying, linking the new message into a thread.
    pub parent_id: Option<MessageId>,
    pub attachments: Vec<AttachmentDraft>,
}

/// Operations the orchestration layer needs from the remote mailbox.
#[async_trait]
pub trait MailService: Send + Sync {
    /// Fetch one page of messages for a view.
    async fn list(&self, query: &ListQuery, offset: usize, limit: usize) -> Result<Vec<Message>>;

    /// Fetch a single message by id.
    async fn get(&self, id: MessageId) -> Result<Message>;

    /// Send a new message. Returns the created message.
    async fn send(&self, outgoing: &OutgoingMessage) -> Result<Message>;

    /// Set or clear the star flag.
    async fn set_starred(&self, id: MessageId, starred: bool) -> Result<()>;

    /// Set or clear the soft-delete flag. The originating folder is
    /// passed through for the service's bookkeeping so a restore puts
    /// the message back where it came from.
    async fn set_trashed(&self, id: MessageId, trashed: bool, from: Folder) -> Result<()>;

    /// Mark a message as read.
    async fn mark_read(&self, id: MessageId) -> Result<()>;
}
