use crate::core::render;
use crate::domain::model::{EmailMessage, SubmissionRequest};
use crate::domain::ports::{ConfigProvider, Mailer};
use crate::utils::error::Result;

/// Validates a submission and dispatches the notification email. Holds no
/// per-request state; one instance serves every request.
pub struct IntakeService<M: Mailer, C: ConfigProvider> {
    mailer: M,
    config: C,
}

impl<M: Mailer, C: ConfigProvider> IntakeService<M, C> {
    pub fn new(mailer: M, config: C) -> Self {
        Self { mailer, config }
    }

    /// Validate, render and dispatch one submission. At most one send
    /// attempt; every failure is terminal for this submission.
    pub async fn handle(&self, request: SubmissionRequest) -> Result<()> {
        let submission = request.validate()?;

        tracing::debug!("Dispatching quote request from {}", submission.email);

        let message = EmailMessage {
            from: self.config.from_address().to_string(),
            to: self.config.to_address().to_string(),
            subject: self.config.subject().to_string(),
            text: render::render_text(&submission),
            html: render::render_html(&submission),
        };

        self.mailer.send(&message).await
    }
}
