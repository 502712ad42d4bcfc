use fleet_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("vehicle listing failed: {0}")]
    Store(#[from] StoreError),
}

pub type SimResult<T> = Result<T, SimError>;
