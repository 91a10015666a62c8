use serde::{Deserialize, Serialize};

/// Marker left in the form action until a real form endpoint is configured.
pub const FORM_ACTION_PLACEHOLDER: &str = "YOUR_FORM_ID";

pub const DEFAULT_RECIPIENT: &str = "kalash.kankaria@gmail.com";

/// Same-origin form endpoint used while no external action is configured.
pub const FALLBACK_FORM_PATH: &str = "/contact";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What a contact submission should do.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactDecision {
    /// Let the form post to its configured endpoint.
    Submit { action: String },
    /// Open the visitor's mail client instead.
    Mailto { href: String },
}

/// A form action is usable when it is set, non-blank and not the placeholder.
pub fn is_configured(action: Option<&str>) -> bool {
    action
        .map(str::trim)
        .is_some_and(|a| !a.is_empty() && !a.contains(FORM_ACTION_PLACEHOLDER))
}

/// The action the page form posts to: the configured endpoint, or the local
/// fallback that answers with the mailto redirect.
pub fn form_target(action: Option<&str>) -> &str {
    match action {
        Some(action) if is_configured(Some(action)) => action.trim(),
        _ => FALLBACK_FORM_PATH,
    }
}

pub fn decide(action: Option<&str>, recipient: &str, form: &ContactForm) -> ContactDecision {
    match action {
        Some(action) if is_configured(Some(action)) => ContactDecision::Submit {
            action: action.trim().to_string(),
        },
        _ => ContactDecision::Mailto {
            href: mailto_uri(recipient, form),
        },
    }
}

/// `mailto:` URI with a percent-encoded subject and body built from the form.
pub fn mailto_uri(recipient: &str, form: &ContactForm) -> String {
    let subject = format!("Website Contact from {}", form.name);
    let body = format!(
        "Name: {}\r\nEmail: {}\r\n\r\nMessage:\r\n{}",
        form.name, form.email, form.message
    );
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}
