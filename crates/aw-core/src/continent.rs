use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::herbivore::{Bison, Elk, Herbivore, Wildebeest};
use crate::predator::{Lion, Predator, Tiger, Wolf};

/// An abstract factory producing one matched herbivore and predator.
///
/// Factories are stateless; each call builds fresh animals at their
/// starting attributes.
pub trait ContinentFactory: fmt::Debug {
    /// Build this continent's herbivore.
    fn create_herbivore(&self) -> Box<dyn Herbivore>;

    /// Build this continent's predator.
    fn create_predator(&self) -> Box<dyn Predator>;
}

/// Factory for wildebeest and lions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Africa;

impl ContinentFactory for Africa {
    fn create_herbivore(&self) -> Box<dyn Herbivore> {
        Box::new(Wildebeest::new())
    }

    fn create_predator(&self) -> Box<dyn Predator> {
        Box::new(Lion::new())
    }
}

/// Factory for bison and wolves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NorthAmerica;

impl ContinentFactory for NorthAmerica {
    fn create_herbivore(&self) -> Box<dyn Herbivore> {
        Box::new(Bison::new())
    }

    fn create_predator(&self) -> Box<dyn Predator> {
        Box::new(Wolf::new())
    }
}

/// Factory for elk and tigers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eurasia;

impl ContinentFactory for Eurasia {
    fn create_herbivore(&self) -> Box<dyn Herbivore> {
        Box::new(Elk::new())
    }

    fn create_predator(&self) -> Box<dyn Predator> {
        Box::new(Tiger::new())
    }
}

/// The fixed set of continents, usable as a key for selecting a factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    /// Wildebeest and lion.
    Africa,
    /// Bison and wolf.
    NorthAmerica,
    /// Elk and tiger.
    Eurasia,
}

impl Continent {
    /// All continents in their canonical run order.
    pub const ALL: [Continent; 3] = [Self::Africa, Self::NorthAmerica, Self::Eurasia];

    /// Human-readable name, as printed in simulation output.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::NorthAmerica => "North America",
            Self::Eurasia => "Eurasia",
        }
    }

    /// The factory bound to this continent.
    pub fn factory(self) -> Box<dyn ContinentFactory> {
        match self {
            Self::Africa => Box::new(Africa),
            Self::NorthAmerica => Box::new(NorthAmerica),
            Self::Eurasia => Box::new(Eurasia),
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Continent {
    type Err = CoreError;

    /// Parse a continent name, ignoring case, spaces, hyphens and underscores.
    fn from_str(s: &str) -> CoreResult<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "africa" => Ok(Self::Africa),
            "northamerica" => Ok(Self::NorthAmerica),
            "eurasia" => Ok(Self::Eurasia),
            _ => Err(CoreError::UnknownContinent(s.to_string())),
        }
    }
}
