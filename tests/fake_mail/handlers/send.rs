//! `POST /messages` — accept a send request and store the message.
//!
//! The payload mirrors what `HttpMailService` serializes: camelCase
//! fields with base64 attachment content. Recipient ids are resolved
//! against the mailbox's user directory; unknown ids are rejected.

use crate::fake_mail::mailbox::Mailbox;
use base64::Engine;
use schoolmail_client::{Attachment, User};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendRequest {
    subject: String,
    body: String,
    recipient_ids: Vec<u64>,
    category_id: u64,
    #[serde(default)]
    parent_id: Option<u64>,
    #[serde(default)]
    attachments: Vec<SendAttachment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendAttachment {
    filename: String,
    content: String,
}

pub fn handle_send(body: &[u8], mailbox: &mut Mailbox) -> Result<serde_json::Value, (u16, String)> {
    let request: SendRequest =
        serde_json::from_slice(body).map_err(|e| (400, format!("bad send payload: {e}")))?;

    if request.recipient_ids.is_empty() {
        return Err((400, "no recipients".to_string()));
    }

    let engine = base64::engine::general_purpose::STANDARD;
    let mut recipients: Vec<User> = Vec::new();
    for id in &request.recipient_ids {
        match mailbox.user(*id) {
            Some(user) => recipients.push(user.clone()),
            None => return Err((400, format!("unknown recipient {id}"))),
        }
    }

    let mut attachments = Vec::new();
    for attachment in &request.attachments {
        engine
            .decode(&attachment.content)
            .map_err(|e| (400, format!("bad attachment content: {e}")))?;
        attachments.push(Attachment {
            filename: attachment.filename.clone(),
            url: format!("/files/{}", attachment.filename),
        });
    }

    let created = mailbox.insert_sent(
        request.subject,
        request.body,
        recipients,
        request.category_id,
        request.parent_id,
        attachments,
    );

    Ok(serde_json::to_value(&created).expect("message serializes"))
}
