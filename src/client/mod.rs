//! Programmatic stand-in for the contact form UI: field state, validation,
//! one POST per submission and timed status auto-dismissal.

use crate::utils::validation;
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

pub const SUCCESS_DISMISS: Duration = Duration::from_secs(6);
pub const ERROR_DISMISS: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub message: String,
}

struct FormState {
    fields: FormFields,
    status: FormStatus,
    error_message: Option<String>,
    // Single owned auto-dismiss timer; always aborted before a replacement
    // is stored, and on drop.
    dismiss_timer: Option<JoinHandle<()>>,
}

enum Outcome {
    Success,
    ServerError(String),
    TransportError,
}

pub struct ContactForm {
    state: Arc<Mutex<FormState>>,
    http: reqwest::Client,
    endpoint: String,
}

impl ContactForm {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState {
                fields: FormFields::default(),
                status: FormStatus::Idle,
                error_message: None,
                dismiss_timer: None,
            })),
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn set_fields(&self, fields: FormFields) {
        self.state.lock().unwrap().fields = fields;
    }

    pub fn set_name(&self, value: impl Into<String>) {
        self.state.lock().unwrap().fields.name = value.into();
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.state.lock().unwrap().fields.email = value.into();
    }

    pub fn set_phone(&self, value: impl Into<String>) {
        self.state.lock().unwrap().fields.phone = value.into();
    }

    pub fn set_service_type(&self, value: impl Into<String>) {
        self.state.lock().unwrap().fields.service_type = value.into();
    }

    pub fn set_message(&self, value: impl Into<String>) {
        self.state.lock().unwrap().fields.message = value.into();
    }

    pub fn fields(&self) -> FormFields {
        self.state.lock().unwrap().fields.clone()
    }

    pub fn status(&self) -> FormStatus {
        self.state.lock().unwrap().status
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.lock().unwrap().error_message.clone()
    }

    /// Submit the current fields. Returns the status reached once the
    /// request (if any) resolves; auto-dismissal back to `Idle` runs on the
    /// owned timer afterwards.
    pub async fn submit(&self) -> FormStatus {
        let payload = {
            let mut state = self.state.lock().unwrap();

            if let Some(timer) = state.dismiss_timer.take() {
                timer.abort();
            }
            state.error_message = None;

            if state.fields.name.is_empty()
                || state.fields.email.is_empty()
                || state.fields.message.is_empty()
            {
                state.status = FormStatus::Error;
                state.error_message =
                    Some("Please fill in name, email and message.".to_string());
                drop(state);
                self.schedule_dismiss(ERROR_DISMISS);
                return FormStatus::Error;
            }

            if !validation::email_format_ok(&state.fields.email) {
                state.status = FormStatus::Error;
                state.error_message =
                    Some("Please enter a valid email address.".to_string());
                drop(state);
                self.schedule_dismiss(ERROR_DISMISS);
                return FormStatus::Error;
            }

            state.status = FormStatus::Sending;
            json!({
                "name": state.fields.name,
                "email": state.fields.email,
                "phone": state.fields.phone,
                "serviceType": state.fields.service_type,
                "message": state.fields.message,
            })
        };

        let outcome = match self.http.post(&self.endpoint).json(&payload).send().await {
            Ok(response) if response.status().is_success() => Outcome::Success,
            Ok(response) => {
                let body = response.text().await.unwrap_or_default();
                tracing::error!("Contact API error: {}", body);
                Outcome::ServerError(body)
            }
            Err(err) => {
                tracing::error!("Contact submit error: {}", err);
                Outcome::TransportError
            }
        };

        self.apply(outcome)
    }

    fn apply(&self, outcome: Outcome) -> FormStatus {
        let (status, delay) = {
            let mut state = self.state.lock().unwrap();
            match outcome {
                Outcome::Success => {
                    state.fields = FormFields::default();
                    state.error_message = None;
                    state.status = FormStatus::Success;
                    (FormStatus::Success, SUCCESS_DISMISS)
                }
                Outcome::ServerError(body) => {
                    state.error_message = Some(if body.is_empty() {
                        "Server error while sending message".to_string()
                    } else {
                        body
                    });
                    state.status = FormStatus::Error;
                    (FormStatus::Error, ERROR_DISMISS)
                }
                Outcome::TransportError => {
                    state.status = FormStatus::Error;
                    (FormStatus::Error, ERROR_DISMISS)
                }
            }
        };

        self.schedule_dismiss(delay);
        status
    }

    fn schedule_dismiss(&self, delay: Duration) {
        let shared = Arc::clone(&self.state);
        let sleep = tokio::time::sleep(delay);
        let handle = tokio::spawn(async move {
            sleep.await;
            let mut state = shared.lock().unwrap();
            state.status = FormStatus::Idle;
            state.error_message = None;
            state.dismiss_timer = None;
        });

        let mut state = self.state.lock().unwrap();
        if let Some(previous) = state.dismiss_timer.take() {
            previous.abort();
        }
        state.dismiss_timer = Some(handle);
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            if let Some(timer) = state.dismiss_timer.take() {
                timer.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    fn filled_form() -> ContactForm {
        let form = ContactForm::new("http://127.0.0.1:9/api/contact");
        form.set_fields(FormFields {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "3055551212".to_string(),
            service_type: "residential".to_string(),
            message: "Need rewiring".to_string(),
        });
        form
    }

    // Parks the test task for a moment so a timer woken by `advance` gets
    // polled before we assert.
    async fn settle() {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_validation_failure_skips_network_and_dismisses_after_8s() {
        let form = filled_form();
        form.set_email(String::new());

        let status = form.submit().await;

        assert_eq!(status, FormStatus::Error);
        assert_eq!(
            form.error_message().as_deref(),
            Some("Please fill in name, email and message.")
        );
        // fields untouched by a validation failure
        assert_eq!(form.fields().name, "Jane Doe");

        advance(Duration::from_secs(7)).await;
        settle().await;
        assert_eq!(form.status(), FormStatus::Error);

        advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(form.status(), FormStatus::Idle);
        assert!(form.error_message().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_bad_email_format_is_rejected_before_send() {
        let form = filled_form();
        form.set_email("foo@bar");

        assert_eq!(form.submit().await, FormStatus::Error);
        assert_eq!(
            form.error_message().as_deref(),
            Some("Please enter a valid email address.")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_clears_fields_and_dismisses_after_6s() {
        let form = filled_form();

        assert_eq!(form.apply(Outcome::Success), FormStatus::Success);
        assert_eq!(form.fields(), FormFields::default());

        advance(Duration::from_secs(5)).await;
        settle().await;
        assert_eq!(form.status(), FormStatus::Success);

        advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_server_error_keeps_fields_and_uses_body_as_message() {
        let form = filled_form();

        let status = form.apply(Outcome::ServerError(
            r#"{"error":"Failed to send email"}"#.to_string(),
        ));

        assert_eq!(status, FormStatus::Error);
        assert_eq!(form.fields().name, "Jane Doe");
        assert_eq!(
            form.error_message().as_deref(),
            Some(r#"{"error":"Failed to send email"}"#)
        );

        advance(Duration::from_secs(9)).await;
        settle().await;
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_error_body_falls_back_to_generic_message() {
        let form = filled_form();
        form.apply(Outcome::ServerError(String::new()));
        assert_eq!(
            form.error_message().as_deref(),
            Some("Server error while sending message")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_error_sets_status_without_message() {
        let form = filled_form();
        form.apply(Outcome::TransportError);
        assert_eq!(form.status(), FormStatus::Error);
        assert!(form.error_message().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_outcome_resets_pending_timer() {
        let form = filled_form();

        form.apply(Outcome::ServerError("boom".to_string()));
        advance(Duration::from_secs(4)).await;
        settle().await;

        // A fresh outcome replaces the 8s timer with a 6s one.
        form.apply(Outcome::Success);
        advance(Duration::from_secs(5)).await;
        settle().await;
        assert_eq!(form.status(), FormStatus::Success);

        advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(form.status(), FormStatus::Idle);
    }
}
