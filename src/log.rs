//! Mail list controller
//!
//! Drives the folder list: opening a message into the details panel,
//! multi-select bookkeeping, and the row-level star/trash toggles,
//! all delegating to [`MailStore`].
//!
//! Opening a row is a fixed sequence: the details panel opens, the
//! message is fetched as current, and only after that fetch settles is
//! the multi-select cleared. Clearing early would race the click that
//! triggered the open.

use crate::error::Result;
use crate::folder::Folder;
use crate::model::{Message, MessageId};
use crate::store::MailStore;

/// The three orthogonal display axes of a list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowState {
    pub read: bool,
    pub starred: bool,
    pub trashed: bool,
}

impl From<&Message> for RowState {
    fn from(message: &Message) -> Self {
        Self {
            read: message.is_read,
            starred: message.is_starred,
            trashed: message.is_deleted,
        }
    }
}

#[derive(Debug, Default)]
pub struct MailLog {
    selection: Vec<MessageId>,
    details_open: bool,
}

impl MailLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn details_open(&self) -> bool {
        self.details_open
    }

    #[must_use]
    pub fn selection(&self) -> &[MessageId] {
        &self.selection
    }

    pub fn toggle_select(&mut self, id: MessageId) {
        if let Some(pos) = self.selection.iter().position(|s| *s == id) {
            self.selection.remove(pos);
        } else {
            self.selection.push(id);
        }
    }

    /// Open a row into the details panel.
    ///
    /// The selection is cleared only after the open has settled; a
    /// failed fetch keeps both the selection and the previous current
    /// message.
    pub async fn open_message(&mut self, store: &mut MailStore, id: MessageId) -> Result<()> {
        self.details_open = true;
        store.open(id).await?;
        self.selection.clear();
        Ok(())
    }

    /// Close the details panel (back navigation from the list side).
    pub fn close_details(&mut self) {
        self.details_open = false;
    }

    pub async fn star(&self, store: &mut MailStore, id: MessageId) -> Result<()> {
        store.mark_as_starred(id).await
    }

    pub async fn unstar(&self, store: &mut MailStore, id: MessageId) -> Result<()> {
        store.mark_as_unstarred(id).await
    }

    pub async fn move_to_trash(
        &self,
        store: &mut MailStore,
        id: MessageId,
        from: Folder,
    ) -> Result<()> {
        store.move_to_trash(id, from).await
    }

    pub async fn restore_from_trash(
        &self,
        store: &mut MailStore,
        id: MessageId,
        from: Folder,
    ) -> Result<()> {
        store.move_from_trash(id, from).await
    }
}
