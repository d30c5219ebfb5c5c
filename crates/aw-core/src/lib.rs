//! Animals and continent factories for Animal World.
//!
//! Each continent is an abstract factory that produces a matched
//! herbivore and predator. Callers only see the [`Herbivore`] and
//! [`Predator`] traits, never the concrete species, so a world built
//! from one factory can never mix animals from two continents.

/// Continent factories and the fixed continent registry.
pub mod continent;
/// Error types for the core crate.
pub mod error;
/// Herbivore trait and the grazing species.
pub mod herbivore;
/// Predator trait, the hunting species, and predation outcomes.
pub mod predator;

/// Re-export continent types.
pub use continent::{Africa, Continent, ContinentFactory, Eurasia, NorthAmerica};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export herbivore types.
pub use herbivore::{Bison, Elk, Herbivore, Wildebeest};
/// Re-export predator types.
pub use predator::{Lion, Predation, Predator, Tiger, Wolf};
