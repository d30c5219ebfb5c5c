use aw_core::Continent;
use tracing::debug;

use crate::error::SimResult;
use crate::report::WorldReport;
use crate::world::AnimalWorld;

/// Run one continent through feeding and hunting and return its report.
///
/// The world is built and torn down inside this call, so nothing carries
/// over between continents.
pub fn simulate(continent: Continent) -> SimResult<WorldReport> {
    let mut world = AnimalWorld::for_continent(continent);
    world.meals_herbivores()?;
    world.nutrition_carnivores()?;
    let report = world.end()?;
    debug!(
        continent = %continent,
        alive = report.alive,
        power = report.power,
        "continent simulated"
    );
    Ok(report)
}

/// Run every continent in canonical order.
pub fn simulate_all() -> SimResult<Vec<WorldReport>> {
    Continent::ALL.into_iter().map(simulate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render_transcript;
    use proptest::prelude::*;

    #[test]
    fn africa_lion_eats_wildebeest() {
        let report = simulate(Continent::Africa).unwrap();
        assert_eq!((report.herbivore, report.predator), ("Wildebeest", "Lion"));
        assert_eq!(report.weight, 310);
        assert!(!report.alive);
        assert_eq!(report.power, 410);
    }

    #[test]
    fn north_america_wolf_misses_bison() {
        let report = simulate(Continent::NorthAmerica).unwrap();
        assert_eq!((report.herbivore, report.predator), ("Bison", "Wolf"));
        assert_eq!(report.weight, 510);
        assert!(report.alive);
        assert_eq!(report.power, 390);
    }

    #[test]
    fn eurasia_tiger_eats_elk() {
        let report = simulate(Continent::Eurasia).unwrap();
        assert_eq!((report.herbivore, report.predator), ("Elk", "Tiger"));
        assert_eq!(report.weight, 410);
        assert!(!report.alive);
        assert_eq!(report.power, 460);
    }

    #[test]
    fn all_continents_in_order() {
        let names: Vec<_> = simulate_all()
            .unwrap()
            .into_iter()
            .map(|r| r.continent)
            .collect();
        assert_eq!(names, ["Africa", "North America", "Eurasia"]);
    }

    #[test]
    fn full_transcript() {
        let text = render_transcript(&simulate_all().unwrap());
        insta::assert_snapshot!(text, @r"
        Africa
        Wildebeest eats grass and now weighs 310 kg
        Lion eats Wildebeest and gains power

        North America
        Bison eats grass and now weighs 510 kg
        Wolf fails to eat Bison and loses power

        Eurasia
        Elk eats grass and now weighs 410 kg
        Tiger eats Elk and gains power
        ");
    }

    #[test]
    fn transcript_ends_with_blank_separator() {
        let text = render_transcript(&simulate_all().unwrap());
        assert!(text.ends_with("Tiger eats Elk and gains power\n\n"));
        assert_eq!(text.lines().filter(|l| l.is_empty()).count(), 3);
    }

    proptest! {
        #[test]
        fn reruns_are_identical(index in 0usize..3) {
            let continent = Continent::ALL[index];
            let first = simulate(continent).unwrap();
            let second = simulate(continent).unwrap();
            prop_assert_eq!(first.render(), second.render());
            prop_assert_eq!(first, second);
        }
    }
}
