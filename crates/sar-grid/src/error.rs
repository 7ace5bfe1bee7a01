use sar_core::{Cell, EntityId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("cell {cell} lies outside the {width}x{height} grid")]
    OutOfBounds { cell: Cell, width: u32, height: u32 },

    #[error("entity {0} is not placed on the grid")]
    NotPlaced(EntityId),

    #[error("entity {0} is already placed on the grid")]
    AlreadyPlaced(EntityId),
}

pub type GridResult<T> = Result<T, GridError>;
