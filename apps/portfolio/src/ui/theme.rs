use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::ui::store::{KeyValueStore, StoreError};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon shown on the toggle: the theme you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Owns the current theme and is the only writer of the persisted preference.
pub struct ThemeController {
    store: Arc<dyn KeyValueStore>,
    current: Theme,
}

impl ThemeController {
    /// Reads the saved preference once. Absent, unreadable or unknown values
    /// start in the dark theme.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let current = match store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
                warn!("Ignoring unknown saved theme '{value}'");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Could not read theme preference: {e}");
                Theme::default()
            }
        };
        info!("Theme: {}", current.as_str());
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme and persists it. On a failed write the theme is unchanged.
    /// The write runs on the blocking pool, so the runtime thread holding the
    /// controller lock is not parked on file I/O.
    pub async fn toggle(&mut self) -> Result<Theme, StoreError> {
        let next = self.current.toggled();
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || store.set(THEME_KEY, next.as_str())).await??;
        self.current = next;
        Ok(next)
    }
}
