//! UI event dispatch.
//!
//! Every page interaction arrives as a `UiEvent` and leaves as a list of
//! `Effect`s for the page to apply. Only the theme toggle writes state; the
//! other handlers are pure functions of their inputs.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::errors::AppError;
use crate::ui::contact::{self, ContactDecision, ContactForm};
use crate::ui::nav::{self, SectionOffset};
use crate::ui::resume::{ResumeLocator, ResumeOutcome};
use crate::ui::theme::{Theme, ThemeController};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    ThemeToggle,
    NavLinkClick {
        href: String,
        #[serde(default)]
        sections: Vec<SectionOffset>,
    },
    Scroll {
        scroll_y: f64,
        #[serde(default)]
        sections: Vec<SectionOffset>,
    },
    ContactSubmit {
        form: ContactForm,
    },
    ResumeDownload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    SetTheme { theme: Theme, icon: &'static str },
    ScrollTo { top: f64 },
    SetActiveNav { href: Option<String> },
    SubmitForm { action: String },
    Navigate { href: String },
    Download { href: String, filename: String },
    Notify { message: String, dismiss_after_ms: u64 },
}

impl Effect {
    pub fn set_theme(theme: Theme) -> Self {
        Effect::SetTheme {
            theme,
            icon: theme.icon(),
        }
    }
}

/// Contact form wiring: configured action and mailto fallback recipient.
#[derive(Debug, Clone)]
pub struct ContactSettings {
    pub action: Option<String>,
    pub recipient: String,
}

#[derive(Clone)]
pub struct Dispatcher {
    theme: Arc<Mutex<ThemeController>>,
    contact: ContactSettings,
    resume: ResumeLocator,
}

impl Dispatcher {
    pub fn new(
        theme: Arc<Mutex<ThemeController>>,
        contact: ContactSettings,
        resume: ResumeLocator,
    ) -> Self {
        Self {
            theme,
            contact,
            resume,
        }
    }

    pub async fn dispatch(&self, event: UiEvent) -> Result<Vec<Effect>, AppError> {
        debug!("Dispatching {event:?}");
        match event {
            UiEvent::ThemeToggle => {
                let theme = self.theme.lock().await.toggle().await?;
                Ok(vec![Effect::set_theme(theme)])
            }
            UiEvent::NavLinkClick { href, sections } => Ok(on_nav_link_click(&href, &sections)),
            UiEvent::Scroll { scroll_y, sections } => Ok(on_scroll(scroll_y, &sections)),
            UiEvent::ContactSubmit { form } => on_contact_submit(&self.contact, &form),
            UiEvent::ResumeDownload => Ok(on_resume_outcome(self.resume.probe().await)),
        }
    }
}

pub fn on_nav_link_click(href: &str, sections: &[SectionOffset]) -> Vec<Effect> {
    match nav::scroll_target(href, sections) {
        Some(top) => vec![Effect::ScrollTo { top }],
        None => Vec::new(),
    }
}

pub fn on_scroll(scroll_y: f64, sections: &[SectionOffset]) -> Vec<Effect> {
    vec![Effect::SetActiveNav {
        href: nav::active_nav_href(scroll_y, sections),
    }]
}

pub fn on_contact_submit(
    settings: &ContactSettings,
    form: &ContactForm,
) -> Result<Vec<Effect>, AppError> {
    for (field, value) in [
        ("name", &form.name),
        ("email", &form.email),
        ("message", &form.message),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} is required")));
        }
    }

    let effect = match contact::decide(settings.action.as_deref(), &settings.recipient, form) {
        ContactDecision::Submit { action } => Effect::SubmitForm { action },
        ContactDecision::Mailto { href } => Effect::Navigate { href },
    };
    Ok(vec![effect])
}

pub fn on_resume_outcome(outcome: ResumeOutcome) -> Vec<Effect> {
    match outcome {
        ResumeOutcome::Download { href, filename } => vec![Effect::Download { href, filename }],
        ResumeOutcome::Unavailable(notification) => vec![Effect::Notify {
            message: notification.message,
            dismiss_after_ms: notification.dismiss_after.as_millis() as u64,
        }],
    }
}
