//! Discovery and rescue event records.

use std::fmt;

use sar_core::{EntityId, Tick};

/// What happened: a drone sensed a victim, or delivered one alive to a hub.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Found,
    Rescued,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventKind::Found => "found",
            EventKind::Rescued => "rescued",
        })
    }
}

/// One discovery or rescue, stamped with the tick it happened on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RescueEvent {
    pub kind: EventKind,
    pub drone: EntityId,
    pub victim: EntityId,
    pub tick: Tick,
}

/// Append-only event log plus the aggregate counters those events drive.
///
/// The counters are redundant with the log but O(1) to read; recording an
/// event updates both atomically, so they can never drift apart.
#[derive(Default)]
pub struct RescueLog {
    events: Vec<RescueEvent>,
    found: u32,
    rescued: u32,
}

impl RescueLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `drone` sensed `victim` on `tick`.
    pub fn record_found(&mut self, drone: EntityId, victim: EntityId, tick: Tick) {
        self.found += 1;
        self.events.push(RescueEvent { kind: EventKind::Found, drone, victim, tick });
    }

    /// Record that `drone` delivered `victim` alive to a hub on `tick`.
    pub fn record_rescued(&mut self, drone: EntityId, victim: EntityId, tick: Tick) {
        self.rescued += 1;
        self.events.push(RescueEvent { kind: EventKind::Rescued, drone, victim, tick });
    }

    /// All events in the order they happened.
    pub fn events(&self) -> &[RescueEvent] {
        &self.events
    }

    pub fn found(&self) -> u32 {
        self.found
    }

    pub fn rescued(&self) -> u32 {
        self.rescued
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
