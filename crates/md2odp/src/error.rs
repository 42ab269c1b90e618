//! CLI error types.

use md2odp_odf::DocumentError;
use md2odp_renderer::{ProfileError, RenderError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Profile(#[from] ProfileError),

    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("{0}")]
    Render(#[from] RenderError),
}
