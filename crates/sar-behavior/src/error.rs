use sar_core::EntityId;
use sar_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("entity {0} missing from the store or of the wrong kind")]
    MissingEntity(EntityId),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
