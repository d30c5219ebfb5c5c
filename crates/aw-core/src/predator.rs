use std::fmt;

use crate::herbivore::Herbivore;

/// Power gained by a successful hunt and lost by a failed one.
pub const HUNT_SWING: i32 = 10;

/// A hunting animal.
///
/// A hunt succeeds only when the predator's power strictly exceeds the
/// target's weight. Power has no floor: repeated misses drive it below zero.
pub trait Predator: fmt::Debug {
    /// Species name.
    fn name(&self) -> &'static str;

    /// Current hunting power.
    fn power(&self) -> i32;

    /// Try to eat `target`, returning what happened.
    fn attempt_predation(&mut self, target: &mut dyn Herbivore) -> Predation;
}

/// The outcome of a single predation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predation {
    /// Name of the hunting species.
    pub predator: &'static str,
    /// Name of the hunted species.
    pub herbivore: &'static str,
    /// Whether the target was eaten.
    pub success: bool,
    /// Predator power after the attempt.
    pub power: i32,
}

impl fmt::Display for Predation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            write!(f, "{} eats {} and gains power", self.predator, self.herbivore)
        } else {
            write!(
                f,
                "{} fails to eat {} and loses power",
                self.predator, self.herbivore
            )
        }
    }
}

/// Shared hunt rule: compare, adjust power, and kill the target on success.
fn hunt(
    predator: &'static str,
    power: &mut i32,
    target: &mut dyn Herbivore,
) -> Predation {
    let success = *power > target.weight();
    if success {
        *power += HUNT_SWING;
        target.set_alive(false);
    } else {
        *power -= HUNT_SWING;
    }
    Predation {
        predator,
        herbivore: target.name(),
        success,
        power: *power,
    }
}

/// Declares a predator species: its state, starting power, and trait impl.
macro_rules! predator_species {
    ($(#[$doc:meta])* $species:ident, $power:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $species {
            power: i32,
        }

        impl $species {
            /// Starting hunting power.
            pub const INITIAL_POWER: i32 = $power;

            /// Create the animal at its starting power.
            pub fn new() -> Self {
                Self {
                    power: Self::INITIAL_POWER,
                }
            }
        }

        impl Default for $species {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Predator for $species {
            fn name(&self) -> &'static str {
                stringify!($species)
            }

            fn power(&self) -> i32 {
                self.power
            }

            fn attempt_predation(&mut self, target: &mut dyn Herbivore) -> Predation {
                hunt(self.name(), &mut self.power, target)
            }
        }
    };
}

predator_species!(
    /// The African predator.
    Lion,
    400
);

predator_species!(
    /// The North American predator.
    Wolf,
    400
);

predator_species!(
    /// The Eurasian predator.
    Tiger,
    450
);
