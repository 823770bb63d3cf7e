use contact_intake::client::{ContactForm, FormFields, FormStatus};
use httpmock::prelude::*;
use serde_json::json;

fn filled_form(endpoint: String) -> ContactForm {
    let form = ContactForm::new(endpoint);
    form.set_fields(FormFields {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "3055551212".to_string(),
        service_type: "residential".to_string(),
        message: "Need rewiring".to_string(),
    });
    form
}

#[tokio::test]
async fn test_successful_submission_clears_fields() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact").json_body_partial(
            r#"{
                "name": "Jane Doe",
                "email": "jane@example.com",
                "serviceType": "residential"
            }"#,
        );
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "ok": true }));
    });

    let form = filled_form(server.url("/api/contact"));
    let status = form.submit().await;

    contact_mock.assert();
    assert_eq!(status, FormStatus::Success);
    assert_eq!(form.fields(), FormFields::default());
    assert!(form.error_message().is_none());
}

#[tokio::test]
async fn test_server_error_preserves_fields_and_surfaces_body() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(500)
            .header("Content-Type", "application/json")
            .body(r#"{"error":"Failed to send email"}"#);
    });

    let form = filled_form(server.url("/api/contact"));
    let status = form.submit().await;

    contact_mock.assert();
    assert_eq!(status, FormStatus::Error);
    assert_eq!(form.fields().name, "Jane Doe");
    assert_eq!(
        form.error_message().as_deref(),
        Some(r#"{"error":"Failed to send email"}"#)
    );
}

#[tokio::test]
async fn test_empty_error_body_gets_generic_message() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(502);
    });

    let form = filled_form(server.url("/api/contact"));
    let status = form.submit().await;

    contact_mock.assert();
    assert_eq!(status, FormStatus::Error);
    assert_eq!(
        form.error_message().as_deref(),
        Some("Server error while sending message")
    );
}

#[tokio::test]
async fn test_validation_failure_makes_no_request() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200);
    });

    let form = filled_form(server.url("/api/contact"));
    form.set_message(String::new());

    let status = form.submit().await;

    assert_eq!(status, FormStatus::Error);
    assert_eq!(
        form.error_message().as_deref(),
        Some("Please fill in name, email and message.")
    );
    contact_mock.assert_hits(0);
}

#[tokio::test]
async fn test_transport_failure_sets_error_without_message() {
    // nothing listens on this port
    let form = filled_form("http://127.0.0.1:9/api/contact".to_string());

    let status = form.submit().await;

    assert_eq!(status, FormStatus::Error);
    assert!(form.error_message().is_none());
    assert_eq!(form.fields().name, "Jane Doe");
}
