use std::fmt;

use tracing::{debug, trace};

use aw_core::{Continent, ContinentFactory, Herbivore, Predator};

use crate::error::{SimError, SimResult};
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::report::WorldReport;

/// Where a world is in its lifecycle.
///
/// The sequence is strictly linear: `Constructed -> Fed -> Hunted -> Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Animals built, nothing has happened yet.
    Constructed,
    /// The feeding step has run.
    Fed,
    /// The hunting step has run.
    Hunted,
    /// The world has been torn down.
    Ended,
}

impl Stage {
    /// The only stage reachable from this one, if any.
    pub fn next(self) -> Option<Stage> {
        match self {
            Self::Constructed => Some(Self::Fed),
            Self::Fed => Some(Self::Hunted),
            Self::Hunted => Some(Self::Ended),
            Self::Ended => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Constructed => "constructed",
            Self::Fed => "fed",
            Self::Hunted => "hunted",
            Self::Ended => "ended",
        };
        f.write_str(s)
    }
}

/// One continent's simulation run.
///
/// Owns exactly one herbivore and one predator, both produced by the same
/// factory. They are released together when the world ends or is dropped.
#[derive(Debug)]
pub struct AnimalWorld {
    label: String,
    herbivore: Box<dyn Herbivore>,
    predator: Box<dyn Predator>,
    stage: Stage,
    events: EventLog,
}

impl AnimalWorld {
    /// Build a world from a factory. `label` names the world in reports.
    pub fn new(label: impl Into<String>, factory: &dyn ContinentFactory) -> Self {
        let label = label.into();
        let herbivore = factory.create_herbivore();
        let predator = factory.create_predator();
        trace!(
            world = %label,
            herbivore = herbivore.name(),
            predator = predator.name(),
            "world constructed"
        );
        Self {
            label,
            herbivore,
            predator,
            stage: Stage::Constructed,
            events: EventLog::new(),
        }
    }

    /// Build a world from a continent's factory, labelled with its display name.
    pub fn for_continent(continent: Continent) -> Self {
        Self::new(continent.display_name(), continent.factory().as_ref())
    }

    /// Feeding step: a living herbivore eats once and its new weight is recorded.
    pub fn meals_herbivores(&mut self) -> SimResult<()> {
        self.advance(Stage::Fed)?;
        if !self.herbivore.is_alive() {
            return Ok(());
        }

        self.herbivore.eat_vegetation();
        let (name, weight) = (self.herbivore.name(), self.herbivore.weight());
        debug!(world = %self.label, herbivore = name, weight, "herbivore fed");
        self.events.push(SimEvent::new(
            1,
            SimEventKind::Fed {
                herbivore: name,
                weight,
            },
            format!("{name} eats grass and now weighs {weight} kg"),
        ));
        Ok(())
    }

    /// Hunting step: the predator attacks the herbivore if it is still alive.
    pub fn nutrition_carnivores(&mut self) -> SimResult<()> {
        self.advance(Stage::Hunted)?;
        if !self.herbivore.is_alive() {
            return Ok(());
        }

        let outcome = self.predator.attempt_predation(self.herbivore.as_mut());
        debug!(
            world = %self.label,
            predator = outcome.predator,
            herbivore = outcome.herbivore,
            success = outcome.success,
            power = outcome.power,
            "predation attempted"
        );
        let description = outcome.to_string();
        self.events.push(SimEvent::new(
            2,
            SimEventKind::Hunted {
                predator: outcome.predator,
                herbivore: outcome.herbivore,
                success: outcome.success,
                power: outcome.power,
            },
            description,
        ));
        Ok(())
    }

    /// Close the world and return its report.
    ///
    /// The animals stay owned by the world until it is dropped; an ended
    /// world rejects every further step.
    pub fn end(&mut self) -> SimResult<WorldReport> {
        self.advance(Stage::Ended)?;
        let report = WorldReport {
            continent: self.label.clone(),
            herbivore: self.herbivore.name(),
            weight: self.herbivore.weight(),
            alive: self.herbivore.is_alive(),
            predator: self.predator.name(),
            power: self.predator.power(),
            events: self.events.clone(),
        };
        trace!(world = %self.label, "world ended");
        Ok(report)
    }

    /// Move to `to`, rejecting anything but the next stage in sequence.
    fn advance(&mut self, to: Stage) -> SimResult<()> {
        if self.stage.next() != Some(to) {
            return Err(SimError::InvalidTransition {
                from: self.stage,
                to,
            });
        }
        trace!(world = %self.label, from = %self.stage, %to, "stage change");
        self.stage = to;
        Ok(())
    }

    /// The world's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The herbivore owned by this world.
    pub fn herbivore(&self) -> &dyn Herbivore {
        self.herbivore.as_ref()
    }

    /// Mutable access to the herbivore, for setting up scenarios.
    pub fn herbivore_mut(&mut self) -> &mut dyn Herbivore {
        self.herbivore.as_mut()
    }

    /// The predator owned by this world.
    pub fn predator(&self) -> &dyn Predator {
        self.predator.as_ref()
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Events recorded so far.
    pub fn events(&self) -> &EventLog {
        &self.events
    }
}
