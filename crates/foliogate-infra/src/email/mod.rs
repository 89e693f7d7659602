//! SMTP mailer for the contact relay.
//!
//! One transactional email per submission over `lettre`'s async SMTP
//! transport. Port 465 gets implicit TLS, anything else STARTTLS. The
//! submission is embedded in both a plain-text and an HTML body.

use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use foliogate_core::contact::Mailer;
use foliogate_types::config::EmailConfig;
use foliogate_types::contact::ContactSubmission;
use foliogate_types::error::{ConfigError, ContactError};

const SUBJECT: &str = "New Contact Form Submission from Portfolio";

/// Async SMTP transport wrapper implementing the [`Mailer`] seam.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Address,
    receiver: Mailbox,
}

impl SmtpMailer {
    /// Build a mailer from SMTP configuration. Does not connect; the
    /// transport dials lazily on the first send.
    pub fn new(config: &EmailConfig) -> Result<Self, ConfigError> {
        let builder = if config.implicit_tls() {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        }
        .map_err(|_| ConfigError::InvalidValue {
            name: "EMAIL_HOST",
            value: config.host.clone(),
        })?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.user.clone(),
                config.pass.expose_secret().to_string(),
            ))
            .build();

        let sender: Address = config.user.parse().map_err(|_| ConfigError::InvalidValue {
            name: "EMAIL_USER",
            value: config.user.clone(),
        })?;
        let receiver: Mailbox =
            config
                .receiver
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "EMAIL_RECEIVER",
                    value: config.receiver.clone(),
                })?;

        Ok(Self {
            transport,
            sender,
            receiver,
        })
    }
}

/// Plain-text and HTML bodies embedding the submission.
fn render_bodies(submission: &ContactSubmission) -> (String, String) {
    let text = format!(
        "Name: {}\nEmail: {}\nMessage: {}",
        submission.name, submission.email, submission.message
    );
    let html = format!(
        "<p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Message:</strong></p><p>{}</p>",
        submission.name, submission.email, submission.message
    );
    (text, html)
}

impl Mailer for SmtpMailer {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let (text, html) = render_bodies(submission);

        // The visitor's name becomes the display name on the configured
        // sender address, so replies thread naturally in the inbox.
        let from = Mailbox::new(Some(submission.name.clone()), self.sender.clone());

        let message = Message::builder()
            .from(from)
            .to(self.receiver.clone())
            .subject(SUBJECT)
            .multipart(MultiPart::alternative_plain_html(text, html))
            .map_err(|err| ContactError::Delivery(err.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|err| {
                tracing::error!("smtp send failed: {err}");
                ContactError::Delivery(err.to_string())
            })
            .map(|_| ())
    }
}
