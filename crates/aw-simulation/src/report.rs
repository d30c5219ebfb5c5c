use std::fmt;

use serde::Serialize;

use crate::event::EventLog;

/// Final state of a world once it has ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldReport {
    /// The continent (or label) the world ran for.
    pub continent: String,
    /// Herbivore species.
    pub herbivore: &'static str,
    /// Final herbivore weight.
    pub weight: i32,
    /// Whether the herbivore survived.
    pub alive: bool,
    /// Predator species.
    pub predator: &'static str,
    /// Final predator power.
    pub power: i32,
    /// Observations in the order they happened.
    pub events: EventLog,
}

impl WorldReport {
    /// Render the console block for this world: the continent line, one line
    /// per event, and a trailing blank separator.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorldReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.continent)?;
        for line in self.events.descriptions() {
            writeln!(f, "{line}")?;
        }
        writeln!(f)
    }
}

/// Concatenate the console blocks of several reports.
pub fn render_transcript(reports: &[WorldReport]) -> String {
    reports.iter().map(WorldReport::render).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{SimEvent, SimEventKind};

    fn quiet_report() -> WorldReport {
        WorldReport {
            continent: "Nowhere".into(),
            herbivore: "Elk",
            weight: 400,
            alive: false,
            predator: "Tiger",
            power: 450,
            events: EventLog::new(),
        }
    }

    #[test]
    fn render_without_events_is_name_and_separator() {
        assert_eq!(quiet_report().render(), "Nowhere\n\n");
    }

    #[test]
    fn display_writes_one_line_per_event() {
        let mut report = quiet_report();
        report.events.push(SimEvent::new(
            1,
            SimEventKind::Fed {
                herbivore: "Elk",
                weight: 410,
            },
            "Elk eats grass and now weighs 410 kg",
        ));
        let block = report.to_string();
        assert_eq!(block, "Nowhere\nElk eats grass and now weighs 410 kg\n\n");
        assert_eq!(report.render(), block);
    }

    #[test]
    fn transcript_of_nothing_is_empty() {
        assert_eq!(render_transcript(&[]), "");
    }

    #[test]
    fn transcript_joins_blocks() {
        let mut other = quiet_report();
        other.continent = "Elsewhere".into();
        let text = render_transcript(&[quiet_report(), other]);
        assert_eq!(text, "Nowhere\n\nElsewhere\n\n");
    }
}
