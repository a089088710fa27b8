use dioxus_logger::tracing;

use crate::{client::error::ApiError, model::contact::ContactMessage};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

impl ContactStatus {
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Sending => Some("Sending…"),
            Self::Sent => Some("Thanks! We’ll get back within 24h."),
            Self::Error => Some("Something went wrong. Try again."),
        }
    }
}

/// Contact form fields and the status of the latest submission.
///
/// Fields are kept after a successful send. Submitting again while a request
/// is in flight is allowed and sends another message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: ContactStatus,
}

impl ContactForm {
    pub fn begin_submit(&mut self) -> ContactMessage {
        self.status = ContactStatus::Sending;

        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    pub fn settle(&mut self, result: Result<(), ApiError>) {
        self.status = match result {
            Ok(()) => ContactStatus::Sent,
            Err(err) => {
                tracing::warn!("Contact message not delivered: {}", err);

                ContactStatus::Error
            }
        };
    }
}
