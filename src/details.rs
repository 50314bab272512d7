//! Mail details controller
//!
//! Renders state for a single opened message. The mark-as-read side
//! effect fires once per opened message identity: syncing against the
//! same current message again (a re-render) issues nothing, while
//! opening a different unread message fires again.

use crate::error::Result;
use crate::folder::Folder;
use crate::model::MessageId;
use crate::store::MailStore;

#[derive(Debug, Default)]
pub struct MailDetails {
    open: bool,
    show_replies: bool,
    /// Identity guard: the last message whose read receipt went
    /// through, so re-renders of the same message never re-fire it. A
    /// failed receipt is not recorded and a reopen retries it.
    last_marked: Option<MessageId>,
}

impl MailDetails {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn replies_shown(&self) -> bool {
        self.show_replies
    }

    /// Align the panel with the store's current message.
    ///
    /// Call whenever the current message may have changed. Opens the
    /// panel and, if the message is unread and not already receipted,
    /// marks it as read.
    pub async fn sync(&mut self, store: &mut MailStore) -> Result<()> {
        let Some((id, unread)) = store.current().map(|m| (m.id, !m.is_read)) else {
            return Ok(());
        };
        self.open = true;
        if unread && self.last_marked != Some(id) {
            store.mark_as_read(id).await?;
            self.last_marked = Some(id);
        }
        Ok(())
    }

    pub fn toggle_replies(&mut self) {
        self.show_replies = !self.show_replies;
    }

    /// Back navigation: close the panel and reset the reply toggle.
    pub fn back(&mut self) {
        self.open = false;
        self.show_replies = false;
    }

    /// Star the open message. The panel stays open.
    pub async fn star(&mut self, store: &mut MailStore, id: MessageId) -> Result<()> {
        store.mark_as_starred(id).await
    }

    pub async fn unstar(&mut self, store: &mut MailStore, id: MessageId) -> Result<()> {
        store.mark_as_unstarred(id).await
    }

    /// Trash the open message and close the panel.
    pub async fn move_to_trash(
        &mut self,
        store: &mut MailStore,
        id: MessageId,
        from: Folder,
    ) -> Result<()> {
        store.move_to_trash(id, from).await?;
        self.back();
        Ok(())
    }
}
