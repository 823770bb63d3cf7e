use crate::domain::model::Submission;

/// Escape the five HTML metacharacters. Ampersand must go first.
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

pub fn render_text(submission: &Submission) -> String {
    format!(
        "New web quote request\n\nName: {}\nEmail: {}\nPhone: {}\nService Type: {}\n\nMessage:\n{}",
        submission.name,
        submission.email,
        submission.phone.as_deref().unwrap_or(""),
        submission.service_type.as_deref().unwrap_or(""),
        submission.message,
    )
}

pub fn render_html(submission: &Submission) -> String {
    format!(
        concat!(
            "<div style=\"font-family:system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial; color:#111\">",
            "<h2>New web quote request</h2>",
            "<p><strong>Name:</strong> {name}</p>",
            "<p><strong>Email:</strong> <a href=\"mailto:{email}\">{email}</a></p>",
            "<p><strong>Phone:</strong> {phone}</p>",
            "<p><strong>Service Type:</strong> {service_type}</p>",
            "<hr />",
            "<p><strong>Message:</strong></p>",
            "<div style=\"white-space:pre-wrap; background:#f6f6f6; padding:12px; border-radius:6px\">{message}</div>",
            "</div>",
        ),
        name = escape_html(&submission.name),
        email = escape_html(&submission.email),
        phone = escape_html(submission.phone.as_deref().unwrap_or("")),
        service_type = escape_html(submission.service_type.as_deref().unwrap_or("")),
        message = escape_html(&submission.message),
    )
}
