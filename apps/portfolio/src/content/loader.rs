use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{error, info};

use crate::content::fallback::fallback_document;
use crate::content::models::ContentDocument;
use crate::content::source::ResourceSource;

/// Relative location of the content document under the site root.
pub const CONTENT_PATH: &str = "./data/content.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network failure: {0}")]
    NetworkFailure(String),

    #[error("unexpected status {0}")]
    BadStatus(u16),

    #[error("content is not valid JSON: {0}")]
    ParseFailure(#[from] serde_json::Error),
}

/// Loads the content document with a single bounded fetch. No retries.
#[derive(Clone)]
pub struct ContentLoader {
    source: Arc<dyn ResourceSource>,
    timeout: Duration,
}

impl ContentLoader {
    pub fn new(source: Arc<dyn ResourceSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    pub async fn load(&self) -> Result<ContentDocument, LoadError> {
        let fetched = tokio::time::timeout(self.timeout, self.source.fetch(CONTENT_PATH))
            .await
            .map_err(|_| {
                LoadError::NetworkFailure(format!(
                    "timed out after {}ms",
                    self.timeout.as_millis()
                ))
            })?
            .map_err(|e| LoadError::NetworkFailure(e.to_string()))?;

        if !fetched.is_success() {
            return Err(LoadError::BadStatus(fetched.status));
        }

        let doc: ContentDocument = serde_json::from_slice(&fetched.body)?;
        info!(
            "Loaded content from {}: {} experience, {} projects",
            self.source.describe(),
            doc.experience.len(),
            doc.projects.len()
        );
        Ok(doc)
    }

    /// `load` followed by `resolve_or_fallback`. Never fails.
    pub async fn load_or_fallback(&self) -> ContentDocument {
        resolve_or_fallback(self.load().await)
    }
}

/// Substitutes the sample document for any load error, logging the error once.
pub fn resolve_or_fallback(result: Result<ContentDocument, LoadError>) -> ContentDocument {
    match result {
        Ok(doc) => doc,
        Err(e) => {
            error!("Error loading content, rendering sample data: {e}");
            fallback_document()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use axum::{http::StatusCode, routing::get, Router};
    use bytes::Bytes;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use crate::content::source::{FetchError, Fetched, HttpSource};

    struct CannedSource {
        status: u16,
        body: &'static str,
        delay: Duration,
    }

    impl CannedSource {
        fn new(status: u16, body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body,
                delay: Duration::ZERO,
            })
        }
    }

    #[async_trait]
    impl ResourceSource for CannedSource {
        async fn fetch(&self, path: &str) -> Result<Fetched, FetchError> {
            assert_eq!(path, CONTENT_PATH);
            tokio::time::sleep(self.delay).await;
            Ok(Fetched {
                status: self.status,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }

        fn describe(&self) -> String {
            "canned".to_string()
        }
    }

    struct CountErrors(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for CountErrors {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn loader(source: Arc<dyn ResourceSource>) -> ContentLoader {
        ContentLoader::new(source, Duration::from_secs(5))
    }

    const DOC: &str = r#"{
        "experience": [
            {"role": "Second", "company": "B", "start": "2022", "end": "Present",
             "highlights": ["h1", "h2"], "stack": ["Rust"]},
            {"role": "First", "company": "A", "start": "2019", "end": "2022",
             "highlights": [], "stack": []}
        ],
        "projects": [{"name": "X", "description": "Y", "impact": null, "link": null}],
        "skills": {"languages": ["Rust"]},
        "education": [{"degree": "BSc", "school": "Uni", "year": "2019"}],
        "awards": ["Prize"]
    }"#;

    #[tokio::test]
    async fn test_load_success_keeps_document_order() {
        let doc = loader(CannedSource::new(200, DOC)).load().await.unwrap();
        let roles: Vec<_> = doc.experience.iter().map(|e| e.role.as_str()).collect();
        assert_eq!(roles, ["Second", "First"]);
        assert_eq!(doc.experience[0].highlights, ["h1", "h2"]);
        assert_eq!(doc.awards, ["Prize"]);
    }

    #[tokio::test]
    async fn test_load_bad_status() {
        let err = loader(CannedSource::new(500, "")).load().await.unwrap_err();
        assert!(matches!(err, LoadError::BadStatus(500)));
    }

    #[tokio::test]
    async fn test_load_malformed_body() {
        let err = loader(CannedSource::new(200, "{not json"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::ParseFailure(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_times_out_as_network_failure() {
        let source = Arc::new(CannedSource {
            status: 200,
            body: DOC,
            delay: Duration::from_secs(60),
        });
        let err = ContentLoader::new(source, Duration::from_millis(500))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::NetworkFailure(_)));
    }

    #[tokio::test]
    async fn test_load_or_fallback_never_fails() {
        for source in [CannedSource::new(404, ""), CannedSource::new(200, "[1, 2")] {
            let doc = loader(source).load_or_fallback().await;
            assert_eq!(doc, fallback_document());
        }
    }

    #[test]
    fn test_fallback_logs_exactly_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountErrors(counter.clone()));
        let doc = tracing::subscriber::with_default(subscriber, || {
            resolve_or_fallback(Err(LoadError::BadStatus(404)))
        });
        assert_eq!(doc.experience[0].role, "Machine Learning Engineer");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_load_or_fallback_on_404_logs_one_error() {
        let counter = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountErrors(counter.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let doc = loader(CannedSource::new(404, "")).load_or_fallback().await;
        assert_eq!(doc, fallback_document());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_success_logs_nothing() {
        let counter = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountErrors(counter.clone()));
        tracing::subscriber::with_default(subscriber, || {
            resolve_or_fallback(Ok(ContentDocument::default()))
        });
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_http_source_round_trip() {
        let app = Router::new().route("/data/content.json", get(|| async { DOC }));
        let base = spawn_server(app).await;
        let doc = loader(Arc::new(HttpSource::new(base))).load().await.unwrap();
        assert_eq!(doc.projects[0].name, "X");
    }

    #[tokio::test]
    async fn test_http_source_404_falls_back() {
        let app = Router::new().route(
            "/data/content.json",
            get(|| async { (StatusCode::NOT_FOUND, "missing") }),
        );
        let base = spawn_server(app).await;
        let loader = loader(Arc::new(HttpSource::new(base)));
        assert!(matches!(loader.load().await, Err(LoadError::BadStatus(404))));
        assert_eq!(loader.load_or_fallback().await, fallback_document());
    }

    #[tokio::test]
    async fn test_http_source_unreachable_is_network_failure() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = loader(Arc::new(HttpSource::new(format!("http://{addr}"))))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::NetworkFailure(_)));
    }
}
