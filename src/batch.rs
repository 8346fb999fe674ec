//! Per-file orchestration around the parse + render pipeline.
//!
//! Each source runs through its own independent pipeline; one failing file
//! never affects the others.

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel-batch")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::api::{DrawingInstructions, GraphRenderer, parse_and_render};
use crate::error::{PlotError, PlotResult};

pub const GRAPH_FILE_EXTENSION: &str = "txt";

/// Raw text of one graph together with its identifier (usually a file name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSource {
    pub id: String,
    pub text: String,
}

impl GraphSource {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Outcome of one source's pipeline.
#[derive(Debug)]
pub struct BatchItem {
    pub id: String,
    pub result: PlotResult<DrawingInstructions>,
}

impl BatchItem {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Reads every regular `*.txt` file in `dir`, sorted by file name.
pub fn load_graph_dir(dir: &Path) -> PlotResult<Vec<GraphSource>> {
    let io_error = |source| PlotError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut sources = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let path = entry.path();
        if !path.is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some(GRAPH_FILE_EXTENSION)
        {
            continue;
        }

        let text = fs::read_to_string(&path).map_err(|source| PlotError::Io {
            path: path.clone(),
            source,
        })?;
        let id = entry.file_name().to_string_lossy().into_owned();
        sources.push(GraphSource { id, text });
    }

    sources.sort_by(|left, right| left.id.cmp(&right.id));
    debug!(dir = %dir.display(), count = sources.len(), "loaded graph sources");
    Ok(sources)
}

/// Runs parse + render for every source. Output order matches input order.
pub fn render_batch(renderer: &GraphRenderer, sources: &[GraphSource]) -> Vec<BatchItem> {
    #[cfg(feature = "parallel-batch")]
    let items = sources
        .par_iter()
        .map(|source| render_source(renderer, source))
        .collect();

    #[cfg(not(feature = "parallel-batch"))]
    let items = sources
        .iter()
        .map(|source| render_source(renderer, source))
        .collect();

    items
}

fn render_source(renderer: &GraphRenderer, source: &GraphSource) -> BatchItem {
    let result = parse_and_render(renderer, &source.text, &source.id);
    if let Err(err) = &result {
        warn!(id = %source.id, error = %err, "skipping graph");
    }
    BatchItem {
        id: source.id.clone(),
        result,
    }
}
