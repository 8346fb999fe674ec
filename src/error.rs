use std::path::PathBuf;

use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    /// Structural problem in the graph text: missing line, wrong token count,
    /// or a token that is not a valid number.
    #[error("format error on line {line}: {message}")]
    Format { line: usize, message: String },

    #[error("{field} index {index} is out of range for {num_nodes} nodes")]
    NodeIndexOutOfRange {
        field: String,
        index: i64,
        num_nodes: usize,
    },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("i/o error at `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlotError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}
