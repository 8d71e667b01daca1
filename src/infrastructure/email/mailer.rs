use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::{entities::message::NewMessage, errors::AppError, settings::SmtpConfig};

/// Relays submitted contact messages to the configured recipient. Delivery is
/// best-effort; callers log failures and never surface them.
pub struct ContactMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    recipient: String,
}

impl ContactMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, AppError> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| AppError::Internal(format!("SMTP relay error: {e}")))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
            recipient: config.recipient.clone(),
        })
    }

    pub async fn send_contact_notification(&self, message: &NewMessage) -> Result<(), AppError> {
        let body = format!(
            "New contact message\n\nFrom: {} <{}>\n\n{}\n",
            message.name, message.email, message.message
        );

        let email = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| AppError::Internal(format!("Invalid from address: {e}")))?,
            )
            .to(self
                .recipient
                .parse()
                .map_err(|e| AppError::Internal(format!("Invalid recipient address: {e}")))?)
            .reply_to(
                message
                    .email
                    .parse()
                    .map_err(|e| AppError::Internal(format!("Invalid reply address: {e}")))?,
            )
            .subject(format!("New contact message from {}", message.name))
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| AppError::Internal(format!("Failed to build email: {e}")))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to send email: {e}")))?;

        Ok(())
    }
}
