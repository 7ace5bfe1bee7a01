//! `sar-metrics` — what the simulation records about itself.
//!
//! # Crate layout
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`events`]    | `RescueEvent`, `RescueLog` (append-only + counters)  |
//! | [`snapshot`]  | `MetricsSnapshot` — one tick's aggregate row         |
//! | [`collector`] | `MetricsCollector` — the per-tick snapshot series    |
//!
//! # Snapshot timing
//!
//! The collector records at the *start* of each tick, before any entity
//! acts, so row `t` of the series reflects the world state at the end of
//! tick `t - 1`.  Live state is always available through the world's
//! on-demand snapshot query; the series is the stable per-tick record the
//! charting layer consumes.

pub mod collector;
pub mod events;
pub mod snapshot;


pub use collector::MetricsCollector;
pub use events::{EventKind, RescueEvent, RescueLog};
pub use snapshot::MetricsSnapshot;
