//! Test data model for the fake mail server
//!
//! Provides a builder-style API for constructing server state:
//!
//! ```ignore
//! let mailbox = MailboxBuilder::new()
//!     .sender(me)
//!     .user(student)
//!     .message(Folder::Inbox, msg)
//!     .build();
//! ```
//!
//! The `Mailbox` is shared with the fake server via `Arc<Mutex<..>>`
//! so handlers can read and mutate it. Each stored message carries the
//! server-assigned `home` folder (inbox/sent/draft/spam); trash and
//! starred are projections over the message flags, matching the
//! client's `Folder::shows`.

use chrono::Utc;
use schoolmail_client::{Attachment, Category, Folder, Message, User};

/// A message as the server stores it.
#[derive(Debug, Clone)]
pub struct StoredMessage {
    pub message: Message,
    /// Server-assigned folder; unchanged by trash, so a restore puts
    /// the message straight back.
    pub home: Folder,
    /// Class-group tag for the `group` list filter.
    pub group: Option<u64>,
}

/// Complete server state: a user directory and the stored messages.
#[derive(Debug, Clone)]
pub struct Mailbox {
    pub sender: User,
    pub users: Vec<User>,
    pub messages: Vec<StoredMessage>,
    next_id: u64,
}

impl Mailbox {
    /// Whether a stored message appears in a folder view, mirroring
    /// the flag/ownership projection the client relies on.
    pub fn visible_in(stored: &StoredMessage, folder: Folder) -> bool {
        match folder {
            Folder::Trash => stored.message.is_deleted,
            Folder::Starred => stored.message.is_starred && !stored.message.is_deleted,
            home => stored.home == home && !stored.message.is_deleted,
        }
    }

    pub fn find(&self, id: u64) -> Option<&StoredMessage> {
        self.messages.iter().find(|s| s.message.id == id)
    }

    pub fn find_mut(&mut self, id: u64) -> Option<&mut StoredMessage> {
        self.messages.iter_mut().find(|s| s.message.id == id)
    }

    pub fn user(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Store a freshly sent message under the sent folder and return
    /// it.
    pub fn insert_sent(
        &mut self,
        subject: String,
        body: String,
        recipients: Vec<User>,
        category_id: u64,
        parent_id: Option<u64>,
        attachments: Vec<Attachment>,
    ) -> Message {
        let id = self.next_id;
        self.next_id += 1;
        let message = Message {
            id,
            subject,
            body,
            sender: self.sender.clone(),
            recipients,
            category: Category {
                id: category_id,
                name: format!("category-{category_id}"),
                image: None,
            },
            attachments,
            is_read: false,
            is_starred: false,
            is_deleted: false,
            parent_id,
            created_at: Utc::now(),
        };
        self.messages.push(StoredMessage {
            message: message.clone(),
            home: Folder::Sent,
            group: None,
        });
        message
    }
}

/// Builder for constructing a `Mailbox` step by step.
pub struct MailboxBuilder {
    sender: Option<User>,
    users: Vec<User>,
    messages: Vec<StoredMessage>,
}

impl MailboxBuilder {
    pub fn new() -> Self {
        Self {
            sender: None,
            users: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// The account the server sends messages as.
    pub fn sender(mut self, user: User) -> Self {
        self.sender = Some(user);
        self
    }

    /// Register a user that send requests can address by id.
    pub fn user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    /// Store a message under a server-assigned folder.
    pub fn message(mut self, home: Folder, message: Message) -> Self {
        self.messages.push(StoredMessage {
            message,
            home,
            group: None,
        });
        self
    }

    /// Store a message tagged with a class-group id.
    pub fn group_message(mut self, home: Folder, group: u64, message: Message) -> Self {
        self.messages.push(StoredMessage {
            message,
            home,
            group: Some(group),
        });
        self
    }

    /// Consume the builder and return the finished `Mailbox`.
    ///
    /// # Panics
    ///
    /// Panics if no sender was set.
    pub fn build(self) -> Mailbox {
        let next_id = self
            .messages
            .iter()
            .map(|s| s.message.id)
            .max()
            .unwrap_or(0)
            + 1;
        Mailbox {
            sender: self.sender.expect("call .sender() before .build()"),
            users: self.users,
            messages: self.messages,
            next_id,
        }
    }
}
