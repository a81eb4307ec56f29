//! Batch rendering of independent documents.
//!
//! Each document is rendered on its own; no state is shared between them.
//! With the `parallel` feature the batch is spread over rayon's pool,
//! otherwise it runs sequentially. Output order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde_json::Value;

use crate::config::ConvertConfig;
use crate::document::{DocumentAdapter, Rendered};
use crate::factory::ViewFactory;

/// Render every document in `documents` with the default configuration.
#[cfg(feature = "parallel")]
pub fn render_batch<F>(documents: &[Value], factory: &F) -> Vec<Rendered<F::Element>>
where
    F: ViewFactory + Sync,
    F::Element: Send,
{
    render_batch_with_config(documents, factory, &ConvertConfig::default())
}

/// Render every document in `documents` with the default configuration.
#[cfg(not(feature = "parallel"))]
pub fn render_batch<F>(documents: &[Value], factory: &F) -> Vec<Rendered<F::Element>>
where
    F: ViewFactory,
{
    render_batch_with_config(documents, factory, &ConvertConfig::default())
}

/// Render every document in `documents` with a custom configuration.
#[cfg(feature = "parallel")]
pub fn render_batch_with_config<F>(
    documents: &[Value],
    factory: &F,
    config: &ConvertConfig,
) -> Vec<Rendered<F::Element>>
where
    F: ViewFactory + Sync,
    F::Element: Send,
{
    documents
        .par_iter()
        .map(|doc| DocumentAdapter::new(factory, config).render(doc))
        .collect()
}

/// Render every document in `documents` with a custom configuration.
#[cfg(not(feature = "parallel"))]
pub fn render_batch_with_config<F>(
    documents: &[Value],
    factory: &F,
    config: &ConvertConfig,
) -> Vec<Rendered<F::Element>>
where
    F: ViewFactory,
{
    let adapter = DocumentAdapter::new(factory, config);
    documents.iter().map(|doc| adapter.render(doc)).collect()
}
