//! `sar-core` — foundational types for the `rust_sar` search-and-rescue
//! swarm simulation.
//!
//! This crate is a dependency of every other `sar-*` crate.  It intentionally
//! has no `sar-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`ids`]     | `EntityId`                                           |
//! | [`cell`]    | `Cell`, Chebyshev/Manhattan distance, axis stepping  |
//! | [`time`]    | `Tick`                                               |
//! | [`rng`]     | `SimRng` — the simulation's single random source     |
//! | [`config`]  | `SwarmConfig` with fail-fast validation              |
//! | [`error`]   | `SarError`, `SarResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::SwarmConfig;
pub use error::{SarError, SarResult};
pub use ids::EntityId;
pub use rng::SimRng;
pub use time::Tick;
