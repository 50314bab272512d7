//! Recipient resolution and compose validation
//!
//! Compose-time selections are higher level than what the send call
//! takes: individual students, individual parents, and whole classes.
//! [`resolve_recipients`] flattens them into one recipient set, keyed
//! by `(role, id)` so a roster student already picked individually is
//! not added twice.

use crate::model::{Category, Class, Role, User, UserId};
use std::collections::HashSet;
use std::fmt;

/// Flatten compose selections into the recipient set passed to send.
///
/// Individually selected students and parents are taken as-is; every
/// roster student of every selected class is then added if not already
/// present. Order is deterministic: students, parents, then class
/// expansions in selection order.
#[must_use]
pub fn resolve_recipients(students: &[User], parents: &[User], classes: &[Class]) -> Vec<User> {
    let mut seen: HashSet<(Role, UserId)> = HashSet::new();
    let mut recipients = Vec::new();

    for user in students.iter().chain(parents) {
        if seen.insert((user.role, user.id)) {
            recipients.push(user.clone());
        }
    }

    for class in classes {
        for student in &class.students {
            if seen.insert((student.role, student.id)) {
                recipients.push(student.clone());
            }
        }
    }

    recipients
}

/// Field-level validation flags for the compose form.
///
/// Each flag marks one independent required-field failure. All
/// failures are reported together so the form can highlight every
/// offending field at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposeErrors {
    pub recipients: bool,
    pub subject: bool,
    pub body: bool,
    pub category: bool,
}

impl ComposeErrors {
    /// Whether any field failed validation.
    #[must_use]
    pub const fn any(self) -> bool {
        self.recipients || self.subject || self.body || self.category
    }
}

impl fmt::Display for ComposeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut missing = Vec::new();
        if self.recipients {
            missing.push("recipients");
        }
        if self.subject {
            missing.push("subject");
        }
        if self.body {
            missing.push("body");
        }
        if self.category {
            missing.push("category");
        }
        write!(f, "missing {}", missing.join(", "))
    }
}

/// Check the four required compose fields.
///
/// A category counts as selected only when present with a positive id
/// (id zero is the unselected placeholder).
#[must_use]
pub fn validate(
    recipients: &[User],
    subject: &str,
    body: &str,
    category: Option<&Category>,
) -> ComposeErrors {
    ComposeErrors {
        recipients: recipients.is_empty(),
        subject: subject.trim().is_empty(),
        body: body.trim().is_empty(),
        category: !category.is_some_and(|c| c.id > 0),
    }
}
