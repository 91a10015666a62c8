use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::content::{ContentLoader, FsSource, HttpSource, ResourceSource};
use crate::ui::resume::ResumeLocator;
use crate::ui::store::JsonFileStore;
use crate::ui::{ContactSettings, Dispatcher, ThemeController};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub loader: ContentLoader,
    /// Single owner of the theme preference; the dispatcher shares this handle.
    pub theme: Arc<Mutex<ThemeController>>,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let source: Arc<dyn ResourceSource> = match &config.content_base_url {
            Some(base) => Arc::new(HttpSource::new(base.clone())),
            None => Arc::new(FsSource::new(config.site_root.clone())),
        };
        // One preference file for the whole site: every visitor shares the
        // same theme. Per-visitor themes would need a client-held key (cookie)
        // in front of the store.
        let theme = ThemeController::load(Arc::new(JsonFileStore::new(
            config.theme_store_path.clone(),
        )));
        Self::new(config, source, theme)
    }

    pub fn new(config: Config, source: Arc<dyn ResourceSource>, theme: ThemeController) -> Self {
        let theme = Arc::new(Mutex::new(theme));
        let dispatcher = Dispatcher::new(
            theme.clone(),
            ContactSettings {
                action: config.contact_form_action.clone(),
                recipient: config.contact_recipient.clone(),
            },
            ResumeLocator::new(source.clone(), config.content_fetch_timeout),
        );
        Self {
            loader: ContentLoader::new(source, config.content_fetch_timeout),
            theme,
            dispatcher,
            config,
        }
    }
}
