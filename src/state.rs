use std::path::PathBuf;
use std::sync::Arc;

use registrar_db::{LecturerStore, RecordStore};
use registrar_observability::PrometheusHandle;

use crate::views::Views;

/// Shared by every handler. Cloning is cheap: the stores and views are
/// reference counted.
#[derive(Clone)]
pub struct AppState {
    pub records: Arc<dyn RecordStore>,
    pub lecturers: Arc<dyn LecturerStore>,
    pub views: Views,
    pub static_dir: PathBuf,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        records: Arc<dyn RecordStore>,
        lecturers: Arc<dyn LecturerStore>,
        views: Views,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            records,
            lecturers,
            views,
            static_dir: static_dir.into(),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Option<PrometheusHandle>) -> Self {
        self.metrics = metrics;
        self
    }
}
