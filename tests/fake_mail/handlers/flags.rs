//! `POST /messages/{id}/{action}` — star, unstar, trash, restore,
//! read.
//!
//! Trash and restore accept a `from` parameter naming the originating
//! folder. The server keeps its own folder assignment, so the value is
//! accepted for protocol fidelity but not needed to put a restored
//! message back.

use crate::fake_mail::http::Request;
use crate::fake_mail::mailbox::Mailbox;

pub fn handle_flag_action(
    id: u64,
    action: &str,
    request: &Request,
    mailbox: &mut Mailbox,
) -> Result<serde_json::Value, (u16, String)> {
    if matches!(action, "trash" | "restore") && request.param("from").is_none() {
        return Err((400, "missing from folder".to_string()));
    }

    let Some(stored) = mailbox.find_mut(id) else {
        return Err((404, format!("no message {id}")));
    };

    match action {
        "star" => stored.message.is_starred = true,
        "unstar" => stored.message.is_starred = false,
        "trash" => stored.message.is_deleted = true,
        "restore" => stored.message.is_deleted = false,
        "read" => stored.message.is_read = true,
        other => return Err((404, format!("unknown action {other}"))),
    }

    Ok(serde_json::to_value(&stored.message).expect("message serializes"))
}
