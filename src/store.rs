//! Client-side mailbox state
//!
//! [`MailStore`] caches the message list of the currently viewed
//! mailbox slice plus the single opened message. It is a plain value
//! owned by the caller: every mutation goes through a `&mut self`
//! method, so operations are serialized by ownership. A view change
//! cannot happen while a page request is still in flight, and a stale
//! response can never overwrite a newer view.
//!
//! Pagination terminates on short pages: a page with fewer messages
//! than the page size flips `all_loaded` and further pagination is a
//! no-op. This is a heuristic, not an exact end-of-stream signal; if
//! the server-side set shrinks between pages the last short page may
//! arrive one request later than strictly necessary.

use crate::error::Result;
use crate::folder::Folder;
use crate::model::{Message, MessageId};
use crate::service::{ListQuery, MailService};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct MailStore {
    service: Arc<dyn MailService>,
    page_size: usize,
    view: Option<ListQuery>,
    messages: Vec<Message>,
    current: Option<Message>,
    fetching: bool,
    all_loaded: bool,
}

impl MailStore {
    #[must_use]
    pub fn new(service: Arc<dyn MailService>, page_size: usize) -> Self {
        Self {
            service,
            page_size,
            view: None,
            messages: Vec::new(),
            current: None,
            fetching: false,
            all_loaded: false,
        }
    }

    /// The cached message list for the active view.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The currently opened message, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    /// The active view context, if a fetch has happened.
    #[must_use]
    pub const fn view(&self) -> Option<&ListQuery> {
        self.view.as_ref()
    }

    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// Whether the short-page heuristic has declared the view complete.
    #[must_use]
    pub const fn all_loaded(&self) -> bool {
        self.all_loaded
    }

    /// Replace the cached list with the first page of a view.
    ///
    /// Resets pagination; on failure the previous list and view are
    /// left untouched.
    pub async fn fetch(&mut self, view: ListQuery) -> Result<()> {
        self.fetching = true;
        let result = self.service.list(&view, 0, self.page_size).await;
        self.fetching = false;

        let page = result.inspect_err(|e| warn!("fetch failed, keeping previous view: {e}"))?;
        debug!("fetched {} messages for {}", page.len(), view.folder);
        self.all_loaded = page.len() < self.page_size;
        self.messages = page;
        self.view = Some(view);
        Ok(())
    }

    /// Append the next page of the given view.
    ///
    /// If the view differs from the active one, pagination restarts
    /// from offset zero (this is a plain [`fetch`](Self::fetch)).
    /// A no-op once everything is loaded.
    pub async fn paginate(&mut self, view: ListQuery) -> Result<()> {
        if self.view.as_ref() != Some(&view) {
            return self.fetch(view).await;
        }
        if self.all_loaded {
            return Ok(());
        }

        let offset = self.messages.len();
        self.fetching = true;
        let result = self.service.list(&view, offset, self.page_size).await;
        self.fetching = false;

        let page = result?;
        debug!("paginated {} more messages at offset {offset}", page.len());
        if page.len() < self.page_size {
            self.all_loaded = true;
        }
        for message in page {
            if !self.messages.iter().any(|m| m.id == message.id) {
                self.messages.push(message);
            }
        }
        Ok(())
    }

    /// Fetch one message by id and set it as current.
    ///
    /// Does not touch the list cache.
    pub async fn open(&mut self, id: MessageId) -> Result<()> {
        let message = self.service.get(id).await?;
        self.current = Some(message);
        Ok(())
    }

    /// Mark a message as read, if it is not already.
    ///
    /// No request is issued for an already-read message. On success the
    /// flag is flipped on the current message and on its list copy.
    pub async fn mark_as_read(&mut self, id: MessageId) -> Result<()> {
        let unread = self
            .find(id)
            .is_some_and(|m| !m.is_read);
        if !unread {
            return Ok(());
        }
        self.service.mark_read(id).await?;
        self.update_flags(id, |m| m.is_read = true);
        Ok(())
    }

    /// Star a message. Folder membership is unchanged.
    pub async fn mark_as_starred(&mut self, id: MessageId) -> Result<()> {
        self.service.set_starred(id, true).await?;
        self.update_flags(id, |m| m.is_starred = true);
        self.prune();
        Ok(())
    }

    /// Unstar a message. In the starred view the row disappears.
    pub async fn mark_as_unstarred(&mut self, id: MessageId) -> Result<()> {
        self.service.set_starred(id, false).await?;
        self.update_flags(id, |m| m.is_starred = false);
        self.prune();
        Ok(())
    }

    /// Soft-delete a message out of the given folder.
    ///
    /// On success the row is removed from any non-trash view so the
    /// visible list stays consistent with the flag.
    pub async fn move_to_trash(&mut self, id: MessageId, from: Folder) -> Result<()> {
        self.service.set_trashed(id, true, from).await?;
        self.update_flags(id, |m| m.is_deleted = true);
        self.prune();
        Ok(())
    }

    /// Restore a soft-deleted message back into its original folder.
    pub async fn move_from_trash(&mut self, id: MessageId, from: Folder) -> Result<()> {
        self.service.set_trashed(id, false, from).await?;
        self.update_flags(id, |m| m.is_deleted = false);
        self.prune();
        Ok(())
    }

    fn find(&self, id: MessageId) -> Option<&Message> {
        self.current
            .as_ref()
            .filter(|m| m.id == id)
            .or_else(|| self.messages.iter().find(|m| m.id == id))
    }

    /// Apply a flag change to the list copy and the current message.
    fn update_flags(&mut self, id: MessageId, f: impl Fn(&mut Message)) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
            f(message);
        }
        if let Some(current) = self.current.as_mut().filter(|m| m.id == id) {
            f(current);
        }
    }

    /// Drop list rows that no longer belong to the active view.
    fn prune(&mut self) {
        if let Some(view) = &self.view {
            let folder = view.folder;
            self.messages.retain(|m| folder.shows(m));
        }
    }
}
