// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] gapdash_shared_kernel::GapdashError),

    #[error(transparent)]
    Infrastructure(#[from] gapdash_shared_kernel::InfrastructureError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
