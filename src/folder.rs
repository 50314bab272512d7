//! Mailbox folder types
//!
//! Provides a strongly-typed enum for mailbox folders instead of raw
//! strings. Inbox, sent, draft and spam are assigned by the server;
//! trash and starred are views derived from message flags.

use crate::model::Message;
use std::fmt;

/// A named partition of the mailbox view.
///
/// Trash and starred are projections over message flags rather than
/// stored folder assignments: a message is in trash iff its soft-delete
/// flag is set, and in starred iff it is starred and not deleted. The
/// remaining folders are whatever the server classifies a message
/// under, minus anything soft-deleted.
///
/// # Examples
///
/// ```
/// use schoolmail_client::Folder;
///
/// let inbox = Folder::Inbox;
/// assert_eq!(inbox.as_str(), "inbox");
/// assert_eq!(Folder::from("TRASH"), Folder::Trash);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Folder {
    /// Received messages.
    Inbox,
    /// Sent messages.
    Sent,
    /// Draft messages.
    Draft,
    /// Spam / junk messages.
    Spam,
    /// Soft-deleted messages.
    Trash,
    /// Starred messages (derived, excludes trashed).
    Starred,
}

impl Folder {
    /// The folder name as sent in list query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Draft => "draft",
            Self::Spam => "spam",
            Self::Trash => "trash",
            Self::Starred => "starred",
        }
    }

    /// Whether a message with the given flags still belongs to this
    /// folder's view.
    ///
    /// For the server-assigned folders this only answers the flag side
    /// of membership (trashed messages are hidden everywhere but
    /// trash); the server decides which of inbox/sent/draft/spam a
    /// message lives in.
    #[must_use]
    pub const fn shows(self, message: &Message) -> bool {
        match self {
            Self::Trash => message.is_deleted,
            Self::Starred => message.is_starred && !message.is_deleted,
            _ => !message.is_deleted,
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Folder {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("sent") {
            Self::Sent
        } else if s.eq_ignore_ascii_case("draft") {
            Self::Draft
        } else if s.eq_ignore_ascii_case("spam") {
            Self::Spam
        } else if s.eq_ignore_ascii_case("trash") {
            Self::Trash
        } else if s.eq_ignore_ascii_case("starred") {
            Self::Starred
        } else {
            Self::Inbox
        }
    }
}

impl From<String> for Folder {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
