//! `sar-behavior` — what entities do with their activations.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ctx`]    | `WorldCtx<'a>` — split-borrow bundle of the world's parts |
//! | [`drone`]  | The drone state machine, one activation per call          |
//! | [`victim`] | Per-tick victim health decay                              |
//! | [`nav`]    | `step_towards`, `nearest_hub`, `unexplored_adjacent`      |
//! | [`error`]  | `BehaviorError`, `BehaviorResult<T>`                      |
//!
//! # Design notes
//!
//! Activations mutate the world directly through [`WorldCtx`] rather than
//! queueing intents for a later apply phase.  The deciding constraint is the
//! local alert: a drone that senses a victim must pull eligible peers one
//! step toward the victim *during its own activation*, so that a peer
//! activated later in the same tick acts from its new position.  A deferred
//! message queue cannot express that same-tick cascade; direct mutation is
//! the model, not a shortcut.  This synchronous alert is the only place one
//! entity's activation mutates another entity — everything else an
//! activation touches is either its own state or the shared world indices.

pub mod ctx;
pub mod drone;
pub mod error;
pub mod nav;
pub mod victim;


pub use ctx::WorldCtx;
pub use drone::drone_step;
pub use error::{BehaviorError, BehaviorResult};
pub use victim::victim_step;
