//! Fake mail REST server for integration testing
//!
//! This module provides an in-process HTTP server that speaks enough
//! of the messaging REST API to test `HttpMailService` and the store
//! end-to-end:
//!
//! TCP -> one HTTP/1.1 request per connection -> JSON response -> close
//!
//! ## Module layout
//!
//! - `server` -- TCP listener, request routing
//! - `handlers/` -- one file per route family (list, get, send, flags)
//! - `mailbox` -- test data model (users, messages, builder)
//! - `http` -- minimal HTTP/1.1 request parsing and response writing

pub mod mailbox;

pub use mailbox::MailboxBuilder;
pub use server::FakeMailServer;
