//! Contact relay service.
//!
//! Validates submissions and forwards them through a [`Mailer`], or takes
//! the mock path when no transport is configured. The mock path is a
//! deliberate degraded mode, not an error: the relay stays exercisable
//! without live SMTP credentials.

use std::future::Future;
use std::time::Duration;

use foliogate_types::contact::ContactSubmission;
use foliogate_types::error::ContactError;

/// Simulated latency of a mock send, mirroring a real transport round-trip.
const MOCK_SEND_DELAY: Duration = Duration::from_secs(1);

/// Trait for outbound email transports.
pub trait Mailer: Send + Sync {
    /// Deliver one transactional email for a submission. At most one
    /// attempt; no retry or queueing.
    fn send(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactError>> + Send;
}

/// How a submission was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// One email was sent through the configured transport.
    Delivered,
    /// No transport configured; the submission was logged instead.
    Mocked,
}

impl ContactOutcome {
    /// User-facing acknowledgement for the HTTP response.
    pub fn message(&self) -> &'static str {
        match self {
            ContactOutcome::Delivered => "Email sent successfully.",
            ContactOutcome::Mocked => "Email sent successfully (mock mode).",
        }
    }
}

/// Relays contact submissions via an optional mailer.
pub struct ContactService<M: Mailer> {
    mailer: Option<M>,
    mock_delay: Duration,
}

impl<M: Mailer> ContactService<M> {
    pub fn new(mailer: Option<M>) -> Self {
        Self {
            mailer,
            mock_delay: MOCK_SEND_DELAY,
        }
    }

    /// Override the simulated mock-send delay (tests).
    pub fn with_mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay = delay;
        self
    }

    /// Handle one submission.
    ///
    /// Fails with `InvalidRequest` before any transport call when a
    /// required field is missing or empty.
    pub async fn handle(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactOutcome, ContactError> {
        if !submission.is_complete() {
            return Err(ContactError::InvalidRequest(
                "Missing required fields.".to_string(),
            ));
        }

        let Some(mailer) = &self.mailer else {
            tracing::info!(
                name = %submission.name,
                email = %submission.email,
                "email transport not configured, mocking send"
            );
            tokio::time::sleep(self.mock_delay).await;
            return Ok(ContactOutcome::Mocked);
        };

        mailer.send(&submission).await?;
        Ok(ContactOutcome::Delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingMailer {
        calls: AtomicUsize,
        fail: bool,
    }

    impl Mailer for &CountingMailer {
        async fn send(&self, _submission: &ContactSubmission) -> Result<(), ContactError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ContactError::Delivery("connection refused".to_string()));
            }
            Ok(())
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_field_rejected_before_transport() {
        let mailer = CountingMailer::default();
        let service = ContactService::new(Some(&mailer));

        let incomplete = ContactSubmission {
            message: String::new(),
            ..submission()
        };
        let result = service.handle(incomplete).await;

        assert!(matches!(result, Err(ContactError::InvalidRequest(_))));
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_mock_path_without_transport() {
        let service =
            ContactService::<&CountingMailer>::new(None).with_mock_delay(Duration::ZERO);

        let outcome = service.handle(submission()).await.unwrap();
        assert_eq!(outcome, ContactOutcome::Mocked);
        assert!(outcome.message().contains("mock mode"));
    }

    #[tokio::test]
    async fn test_delivery_via_transport() {
        let mailer = CountingMailer::default();
        let service = ContactService::new(Some(&mailer));

        let outcome = service.handle(submission()).await.unwrap();
        assert_eq!(outcome, ContactOutcome::Delivered);
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_delivery_error() {
        let mailer = CountingMailer {
            fail: true,
            ..Default::default()
        };
        let service = ContactService::new(Some(&mailer));

        let result = service.handle(submission()).await;
        assert!(matches!(result, Err(ContactError::Delivery(_))));
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 1);
    }
}
