//! `GET /messages/{id}` — fetch one message.

use crate::fake_mail::mailbox::Mailbox;

pub fn handle_get(id: u64, mailbox: &Mailbox) -> Result<serde_json::Value, (u16, String)> {
    mailbox
        .find(id)
        .map(|stored| serde_json::to_value(&stored.message).expect("message serializes"))
        .ok_or_else(|| (404, format!("no message {id}")))
}
