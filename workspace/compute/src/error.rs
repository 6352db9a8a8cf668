use polars::error::PolarsError;
use thiserror::Error;
use tracing::error;

/// Failures of the KPI derivations.
#[derive(Error, Debug)]
pub enum ComputeError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Peer statistics could not be computed
    #[error("Statistics error: {0}")]
    Series(String),

    /// Emission history that cannot produce a KPI
    #[error("Emission history error: {0}")]
    EmissionHistory(String),
}

impl From<PolarsError> for ComputeError {
    fn from(error: PolarsError) -> Self {
        let kind = match &error {
            PolarsError::NoData(_) => "no data",
            PolarsError::SchemaMismatch(_) => "schema mismatch",
            PolarsError::ComputeError(_) => "compute error",
            _ => "series error",
        };
        let err = ComputeError::Series(format!("{}: {}", kind, error));
        error!(?err, "Polars failure while computing peer statistics");
        err
    }
}

pub type Result<T> = std::result::Result<T, ComputeError>;
