use serde::Serialize;
use thiserror::Error;

use crate::{config::EmailJsConfig, state::ContactForm};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    #[error("mail service responded with status {0}")]
    Status(u16),
    #[error("couldn't reach the mail service: {0}")]
    Network(String),
    #[error("auto-reply failed after the message was delivered: {0}")]
    AutoReply(Box<MailError>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl From<ContactForm> for EmailPayload {
    fn from(form: ContactForm) -> Self {
        let phone = form.phone.trim();
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            subject: form.subject.trim().to_string(),
            message: form.message,
        }
    }
}

/// Transactional email capability consumed by the contact form.
#[allow(async_fn_in_trait)]
pub trait Mailer {
    async fn send(&self, template_id: &str, payload: &EmailPayload) -> Result<(), MailError>;
}

/// Sends the notification and then the confirmation auto-reply.
///
/// Both must succeed for the submission to count as sent. A failed auto-reply
/// is still reported as a failure even though the notification went out; the
/// error says so.
pub async fn deliver<M: Mailer>(
    mailer: &M,
    config: &EmailJsConfig,
    payload: &EmailPayload,
) -> Result<(), MailError> {
    mailer.send(&config.template_id, payload).await?;
    if let Err(e) = mailer.send(&config.autoreply_template_id, payload).await {
        log::warn!("contact notification delivered but auto-reply failed: {e}");
        return Err(MailError::AutoReply(Box::new(e)));
    }
    log::info!("contact message from {} delivered", payload.email);
    Ok(())
}

#[derive(Debug, Serialize)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailPayload,
}

/// EmailJS REST client.
#[derive(Debug, Clone)]
pub struct EmailJs {
    config: EmailJsConfig,
}

impl EmailJs {
    pub fn new(config: EmailJsConfig) -> Self {
        Self { config }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn request<'a>(&'a self, template_id: &'a str, payload: &'a EmailPayload) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id: &self.config.service_id,
            template_id,
            user_id: &self.config.public_key,
            template_params: payload,
        }
    }
}

impl Mailer for EmailJs {
    #[cfg(feature = "hydrate")]
    async fn send(&self, template_id: &str, payload: &EmailPayload) -> Result<(), MailError> {
        use gloo_net::http::Request;

        let res = Request::post(EMAILJS_SEND_URL)
            .json(&self.request(template_id, payload))
            .map_err(|e| MailError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| MailError::Network(e.to_string()))?;
        if !res.ok() {
            return Err(MailError::Status(res.status()));
        }
        Ok(())
    }

    #[cfg(not(feature = "hydrate"))]
    async fn send(&self, _template_id: &str, _payload: &EmailPayload) -> Result<(), MailError> {
        Err(MailError::Network("mail can only be sent from the browser".to_string()))
    }
}
