//! `sar-agent` — the four entity kinds and their storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`entity`]    | `Entity`, `EntityKind`, `KindTag`, `Victim`, `Drone`, `DroneState` |
//! | [`store`]     | `EntityStore` — dense id-indexed storage              |
//! | [`portrayal`] | `Portrayal` — the read-only render query              |
//!
//! # Design notes
//!
//! Entity kinds form a *closed* tagged variant: sensing, movement blocking,
//! decay, and portrayal all dispatch with exhaustive `match`es, so adding a
//! kind is a compile-error-guided change rather than a runtime-type hunt.
//!
//! Positions are NOT stored here.  The grid's reverse index is the single
//! source of truth for where an entity is; the store holds identity and
//! kind-specific state only.  The two structures are independent indices
//! over the same logical population.

pub mod entity;
pub mod portrayal;
pub mod store;


pub use entity::{Drone, DroneState, Entity, EntityKind, KindTag, Victim};
pub use portrayal::Portrayal;
pub use store::EntityStore;
