use std::sync::Arc;

use validator::Validate;

use crate::{
    email::mailer::ContactMailer,
    entities::message::{ContactForm, ContactResponse, NewMessage},
    errors::AppError,
    repositories::storage::Storage,
};

pub struct ContactHandler {
    pub contact_repo: Arc<dyn Storage>,
    pub mailer: Option<ContactMailer>,
}

impl ContactHandler {
    pub fn new(contact_repo: Arc<dyn Storage>, mailer: Option<ContactMailer>) -> Self {
        ContactHandler { contact_repo, mailer }
    }

    /// Validates and persists a contact message, then relays it by email.
    /// Persistence is the success criterion; relay failures are logged and
    /// never reach the caller.
    pub async fn submit_message(&self, form: ContactForm) -> Result<ContactResponse, AppError> {
        form.validate()?;

        let message = NewMessage::from(form);

        self.contact_repo.create_message(message.clone()).await?;

        self.relay(&message).await;

        Ok(ContactResponse {
            success: true,
            message: "Message sent successfully".to_string(),
        })
    }

    async fn relay(&self, message: &NewMessage) {
        match &self.mailer {
            Some(mailer) => {
                if let Err(e) = mailer.send_contact_notification(message).await {
                    tracing::error!(
                        "Failed to relay contact message from {}: {}",
                        message.email, e
                    );
                }
            }
            None => {
                tracing::info!(
                    "Mail relay not configured; contact message from {} <{}>: {}",
                    message.name, message.email, message.message
                );
            }
        }
    }
}
