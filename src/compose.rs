//! Compose form controller
//!
//! Collects recipients (students, parents, classes), subject, body,
//! category and attachments, validates, and issues the send request.
//! Success clears the form and signals the caller to navigate to the
//! sent folder; any failure leaves every field in place so the user
//! can correct and retry.
//!
//! Minimize and cancel are distinct: minimize hides the surface and
//! keeps all fields, cancel clears everything.

use crate::error::{Error, Result};
use crate::folder::Folder;
use crate::model::{AttachmentDraft, Category, Class, Message, MessageId, User};
use crate::resolver::{resolve_recipients, validate, ComposeErrors};
use crate::service::{MailService, OutgoingMessage};
use tracing::debug;

/// What the caller should do after a successful send.
#[derive(Debug, Clone, PartialEq)]
pub struct SendOutcome {
    /// The created message as returned by the service.
    pub message: Message,
    /// Route target for the list view, so the user sees what they just
    /// sent. Always the sent folder.
    pub navigate_to: Folder,
}

#[derive(Debug, Default)]
pub struct ComposeForm {
    open: bool,
    minimized: bool,
    to_students: Vec<User>,
    to_parents: Vec<User>,
    to_classes: Vec<Class>,
    subject: String,
    body: String,
    category: Option<Category>,
    /// Set when this compose is a reply inside a thread.
    reply_to: Option<MessageId>,
    attachments: Vec<AttachmentDraft>,
    errors: ComposeErrors,
}

impl ComposeForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a blank compose surface.
    pub fn open(&mut self) {
        self.open = true;
        self.minimized = false;
    }

    /// Open a reply to an existing message.
    pub fn open_reply(&mut self, parent: &Message) {
        self.open();
        self.reply_to = Some(parent.id);
        self.subject = format!("Re: {}", parent.subject);
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// Field errors from the last failed validation.
    #[must_use]
    pub const fn errors(&self) -> ComposeErrors {
        self.errors
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    pub fn add_student(&mut self, student: User) {
        self.to_students.push(student);
    }

    pub fn add_parent(&mut self, parent: User) {
        self.to_parents.push(parent);
    }

    pub fn add_class(&mut self, class: Class) {
        self.to_classes.push(class);
    }

    #[must_use]
    pub fn attachments(&self) -> &[AttachmentDraft] {
        &self.attachments
    }

    /// Add a file to the compose, deduplicated by filename.
    ///
    /// Selecting the same filename twice keeps the first copy. Nothing
    /// is uploaded until send.
    pub fn add_attachment(&mut self, draft: AttachmentDraft) {
        if !self
            .attachments
            .iter()
            .any(|a| a.filename == draft.filename)
        {
            self.attachments.push(draft);
        }
    }

    /// Remove a selected file by name before send.
    pub fn remove_attachment(&mut self, filename: &str) {
        self.attachments.retain(|a| a.filename != filename);
    }

    /// Hide the compose surface, keeping every field.
    pub fn minimize(&mut self) {
        self.open = false;
        self.minimized = true;
    }

    /// Bring a minimized compose back up.
    pub fn restore(&mut self) {
        if self.minimized {
            self.open = true;
            self.minimized = false;
        }
    }

    /// Close the compose surface and clear every field.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Validate, resolve recipients, and send.
    ///
    /// No request is issued when validation fails; the failing fields
    /// are recorded in [`errors`](Self::errors) and returned inside
    /// [`Error::Invalid`]. A service failure also leaves all fields in
    /// place. On success the form is cleared and closed, and the
    /// outcome tells the caller to route the list view to
    /// [`Folder::Sent`].
    pub async fn send(&mut self, service: &dyn MailService) -> Result<SendOutcome> {
        let recipients = resolve_recipients(&self.to_students, &self.to_parents, &self.to_classes);

        let errors = validate(&recipients, &self.subject, &self.body, self.category.as_ref());
        if errors.any() {
            debug!("compose rejected: {errors}");
            self.errors = errors;
            return Err(Error::Invalid(errors));
        }
        self.errors = ComposeErrors::default();

        let outgoing = OutgoingMessage {
            subject: self.subject.clone(),
            body: self.body.clone(),
            recipient_ids: recipients.iter().map(|u| u.id).collect(),
            // Validation guarantees a selected category.
            category_id: self.category.as_ref().map_or(0, |c| c.id),
            parent_id: self.reply_to,
            attachments: self.attachments.clone(),
        };

        let message = service.send(&outgoing).await?;
        *self = Self::default();
        Ok(SendOutcome {
            message,
            navigate_to: Folder::Sent,
        })
    }
}
