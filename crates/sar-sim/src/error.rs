use sar_behavior::BehaviorError;
use sar_core::{EntityId, SarError};
use sar_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("setup error: {0}")]
    Setup(#[from] SarError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("scheduled entity {0} is missing from the store")]
    UnknownEntity(EntityId),
}

pub type SimResult<T> = Result<T, SimError>;
