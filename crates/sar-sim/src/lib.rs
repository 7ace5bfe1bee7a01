//! `sar-sim` — the simulation instance and its tick loop.
//!
//! # One tick
//!
//! ```text
//! advance():
//!   ① Snapshot   — record the current metrics row (so a tick's recorded
//!                  metrics reflect the state at the end of the previous one).
//!   ② Activate   — every live entity acts once, in a freshly shuffled
//!                  order: victims decay, drones run their state machine,
//!                  hubs and obstacles are inert.
//!   ③ Advance    — the tick counter increments.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`world`]    | `World` — owns all simulation state; `advance()`    |
//! | [`setup`]    | Placement: corner hubs, rejection-sampled obstacles and victims |
//! | [`observer`] | `SimObserver` trait, `NoopObserver`                 |
//! | [`error`]    | `SimError`, `SimResult<T>`                          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sar_core::SwarmConfig;
//! use sar_sim::{NoopObserver, World};
//!
//! let mut world = World::new(SwarmConfig { seed: Some(42), ..SwarmConfig::default() })?;
//! world.run_ticks(500, &mut NoopObserver)?;
//! println!("rescued: {}", world.metrics().rescued);
//! ```

pub mod error;
pub mod observer;
pub mod setup;
pub mod world;


pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use world::{PlacedEntity, World};
