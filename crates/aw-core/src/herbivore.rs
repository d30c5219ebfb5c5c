use std::fmt;

/// Weight gained by a single meal of vegetation.
pub const GRAZING_GAIN: i32 = 10;

/// A grazing animal that can be hunted.
///
/// Herbivores start alive at a species-specific weight. Eating always adds
/// [`GRAZING_GAIN`], whether or not the animal is still alive; callers that
/// care about that check [`Herbivore::is_alive`] first.
pub trait Herbivore: fmt::Debug {
    /// Species name.
    fn name(&self) -> &'static str;

    /// Current weight in kilograms.
    fn weight(&self) -> i32;

    /// Eat a meal of vegetation.
    fn eat_vegetation(&mut self);

    /// Whether the animal is still alive.
    fn is_alive(&self) -> bool;

    /// Mark the animal alive or dead.
    fn set_alive(&mut self, alive: bool);
}

/// Declares a herbivore species: its state, starting weight, and trait impl.
macro_rules! herbivore_species {
    ($(#[$doc:meta])* $species:ident, $weight:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $species {
            weight: i32,
            alive: bool,
        }

        impl $species {
            /// Starting weight in kilograms.
            pub const INITIAL_WEIGHT: i32 = $weight;

            /// Create a living animal at its starting weight.
            pub fn new() -> Self {
                Self {
                    weight: Self::INITIAL_WEIGHT,
                    alive: true,
                }
            }
        }

        impl Default for $species {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Herbivore for $species {
            fn name(&self) -> &'static str {
                stringify!($species)
            }

            fn weight(&self) -> i32 {
                self.weight
            }

            fn eat_vegetation(&mut self) {
                self.weight += GRAZING_GAIN;
            }

            fn is_alive(&self) -> bool {
                self.alive
            }

            fn set_alive(&mut self, alive: bool) {
                self.alive = alive;
            }
        }
    };
}

herbivore_species!(
    /// The African herbivore.
    Wildebeest,
    300
);

herbivore_species!(
    /// The North American herbivore.
    Bison,
    500
);

herbivore_species!(
    /// The Eurasian herbivore.
    Elk,
    400
);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn species_start_alive_at_initial_weight() {
        let herd: Vec<Box<dyn Herbivore>> = vec![
            Box::new(Wildebeest::new()),
            Box::new(Bison::new()),
            Box::new(Elk::new()),
        ];
        let summary: Vec<_> = herd
            .iter()
            .map(|h| (h.name(), h.weight(), h.is_alive()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Wildebeest", 300, true),
                ("Bison", 500, true),
                ("Elk", 400, true),
            ]
        );
    }

    #[test]
    fn eating_adds_ten() {
        let mut bison = Bison::new();
        bison.eat_vegetation();
        assert_eq!(bison.weight(), 510);
    }

    #[test]
    fn dead_herbivore_still_gains_weight() {
        let mut elk = Elk::new();
        elk.set_alive(false);
        elk.eat_vegetation();
        assert!(!elk.is_alive());
        assert_eq!(elk.weight(), 410);
    }

    #[test]
    fn initial_weight_constants_match_new() {
        assert_eq!(Wildebeest::INITIAL_WEIGHT, Wildebeest::default().weight());
        assert_eq!(Bison::INITIAL_WEIGHT, Bison::default().weight());
        assert_eq!(Elk::INITIAL_WEIGHT, Elk::default().weight());
    }

    #[test]
    fn alive_flag_toggles() {
        let mut gnu = Wildebeest::new();
        gnu.set_alive(false);
        assert!(!gnu.is_alive());
        gnu.set_alive(true);
        assert!(gnu.is_alive());
    }

    proptest! {
        #[test]
        fn meals_add_exactly_ten_each(meals in 0usize..200) {
            let mut herd: Vec<Box<dyn Herbivore>> = vec![
                Box::new(Wildebeest::new()),
                Box::new(Bison::new()),
                Box::new(Elk::new()),
            ];
            for animal in &mut herd {
                let start = animal.weight();
                for _ in 0..meals {
                    animal.eat_vegetation();
                }
                prop_assert_eq!(animal.weight(), start + GRAZING_GAIN * meals as i32);
            }
        }
    }
}
