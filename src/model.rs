//! Domain types for the school messaging service
//!
//! These mirror the JSON wire shapes of the remote mail service
//! (camelCase field names). The only piece with behavior is
//! [`Profile`]: sender display data is role-dependent, so it is a
//! tagged union with a single [`Profile::display_name`] instead of a
//! bag of optional name fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type MessageId = u64;
pub type UserId = u64;
pub type ClassId = u64;
pub type CategoryId = u64;

/// Role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Administrator,
    Director,
    Teacher,
    Student,
    Parent,
    Agent,
}

/// Role-dependent display data of a user.
///
/// Parent accounts carry both parents' names; every other role has a
/// plain first/last pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Profile {
    Named {
        first_name: String,
        last_name: String,
    },
    Parents {
        father_first_name: String,
        father_last_name: String,
        mother_first_name: String,
        mother_last_name: String,
    },
}

impl Profile {
    /// Human-readable name for list rows and message headers.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Named {
                first_name,
                last_name,
            } => format!("{first_name} {last_name}"),
            Self::Parents {
                father_first_name,
                father_last_name,
                mother_first_name,
                mother_last_name,
            } => format!(
                "{father_first_name} {father_last_name} & {mother_first_name} {mother_last_name}"
            ),
        }
    }
}

/// A user account referenced as sender or recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub role: Role,
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

const fn default_true() -> bool {
    true
}

impl User {
    /// Human-readable name, dispatched on the profile variant.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.profile.display_name()
    }
}

/// A school class, used as a recipient-expansion unit in compose.
///
/// The roster carries the resolved student users so recipient
/// resolution needs no further lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: ClassId,
    pub name: String,
    pub students: Vec<User>,
}

/// Mandatory classification tag attached to every message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A stored attachment reference on a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub filename: String,
    pub url: String,
}

/// A file selected in compose, held client-side until send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentDraft {
    pub filename: String,
    pub content: Vec<u8>,
}

/// A message in the mailbox.
///
/// The read, star and soft-delete flags are three independent axes:
/// trashing a message clears neither its star nor its read state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub subject: String,
    pub body: String,
    pub sender: User,
    pub recipients: Vec<User>,
    pub category: Category,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub is_read: bool,
    pub is_starred: bool,
    pub is_deleted: bool,
    /// Back-reference for reply threads.
    #[serde(default)]
    pub parent_id: Option<MessageId>,
    pub created_at: DateTime<Utc>,
}
