//! In-memory pipeline state.
//!
//! The state owns at most one dataset. Ingestion builds a complete new
//! dataset off to the side and swaps it in only on success, so readers
//! see either the previous dataset or the new one, never a mix, and a
//! failed ingestion leaves the previous dataset in place.

use std::sync::Arc;

use crate::error::IngestResult;
use crate::pipeline::Dataset;
use crate::view::{build_view, View, ViewQuery};

#[derive(Clone, Debug, Default)]
pub struct PipelineState {
    dataset: Option<Arc<Dataset>>,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current dataset, if any ingestion has succeeded.
    pub fn dataset(&self) -> Option<Arc<Dataset>> {
        self.dataset.clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// Run `loader` and replace the dataset with its result.
    ///
    /// On error the current dataset is kept and the error is returned.
    pub fn ingest_with<F>(&mut self, loader: F) -> IngestResult<Arc<Dataset>>
    where
        F: FnOnce() -> IngestResult<Dataset>,
    {
        match loader() {
            Ok(dataset) => {
                let dataset = Arc::new(dataset);
                log::info!(
                    "dataset replaced: {} records from {}",
                    dataset.records.len(),
                    dataset.source
                );
                self.dataset = Some(Arc::clone(&dataset));
                Ok(dataset)
            }
            Err(err) => {
                log::warn!("ingestion failed, keeping previous dataset: {}", err);
                Err(err)
            }
        }
    }

    /// Derive the view for `query` over the current dataset.
    pub fn view<'a>(&'a self, query: &ViewQuery) -> Option<View<'a>> {
        self.dataset
            .as_deref()
            .map(|dataset| build_view(&dataset.records, query))
    }
}
