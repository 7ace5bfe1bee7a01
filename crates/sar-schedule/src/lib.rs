//! `sar-schedule` — the per-tick activation discipline.
//!
//! | Module         | Contents                                        |
//! |----------------|-------------------------------------------------|
//! | [`activation`] | `RandomActivation` — fresh permutation per tick |

pub mod activation;

#[cfg(test)]
mod tests;

pub use activation::RandomActivation;
