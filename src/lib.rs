//! School messaging client library
//!
//! Client-side orchestration for the mail module of a school
//! administration system: a typed REST client for the remote mail
//! service plus the mailbox state a front end drives — the
//! [`MailStore`] list cache with its pagination, the recipient
//! resolver that expands class selections, and the list, details and
//! compose controllers.
//!
//! The service boundary is the [`MailService`] trait;
//! [`HttpMailService`] implements it over HTTP.

mod compose;
mod config;
mod details;
mod error;
mod folder;
mod http;
mod log;
mod model;
mod resolver;
mod service;
mod store;

pub use compose::{ComposeForm, SendOutcome};
pub use config::{ServiceConfig, DEFAULT_PAGE_SIZE};
pub use details::MailDetails;
pub use error::{Error, Result};
pub use folder::Folder;
pub use http::HttpMailService;
pub use log::{MailLog, RowState};
pub use model::{
    Attachment, AttachmentDraft, Category, CategoryId, Class, ClassId, Message, MessageId,
    Profile, Role, User, UserId,
};
pub use resolver::{resolve_recipients, validate, ComposeErrors};
pub use service::{ListQuery, MailService, OutgoingMessage};
pub use store::MailStore;
