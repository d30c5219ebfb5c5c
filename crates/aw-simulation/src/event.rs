use serde::Serialize;

/// What kind of observation a world step produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimEventKind {
    /// The herbivore grazed.
    Fed {
        /// Species that ate.
        herbivore: &'static str,
        /// Weight after the meal.
        weight: i32,
    },
    /// The predator attempted to eat the herbivore.
    Hunted {
        /// Species that hunted.
        predator: &'static str,
        /// Species that was hunted.
        herbivore: &'static str,
        /// Whether the herbivore was eaten.
        success: bool,
        /// Predator power after the attempt.
        power: i32,
    },
}

/// A single observation recorded during a world's run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimEvent {
    /// The step that produced this event (1 = feeding, 2 = hunting).
    pub step: u8,
    /// The specific kind of event that occurred.
    #[serde(flatten)]
    pub kind: SimEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl SimEvent {
    /// Create a new event with the given step, kind, and description.
    pub fn new(step: u8, kind: SimEventKind, description: impl Into<String>) -> Self {
        Self {
            step,
            kind,
            description: description.into(),
        }
    }
}

/// Append-only record of the events produced by one world.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<SimEvent>,
}

impl EventLog {
    /// Create an empty event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Return the descriptions of all events, in order.
    pub fn descriptions(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.description.as_str()).collect()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
