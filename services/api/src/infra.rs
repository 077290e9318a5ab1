use internship_portal::store::SqliteStore;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) store: Arc<SqliteStore>,
}

impl AppState {
    /// Ready once the listener is bound and the database still answers.
    pub(crate) async fn is_ready(&self) -> bool {
        self.readiness.load(Ordering::Acquire) && self.store.health_check().await.is_ok()
    }
}
