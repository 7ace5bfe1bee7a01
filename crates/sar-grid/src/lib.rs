//! `sar-grid` — the bounded 2D world the swarm operates in.
//!
//! # Crate layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`grid`]    | `Grid` — multi-occupancy cell space, Moore queries     |
//! | [`visited`] | `VisitedTracker` — cells ever occupied by any drone    |
//! | [`error`]   | `GridError`, `GridResult<T>`                           |

pub mod error;
pub mod grid;
pub mod visited;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use visited::VisitedTracker;
