use aw_core::Continent;
use aw_simulation::{WorldReport, render_transcript, simulate, simulate_all};
use tracing::debug;

pub fn run(continent: Option<&str>, json: bool) -> Result<(), String> {
    let reports: Vec<WorldReport> = match continent {
        Some(name) => {
            let selected: Continent = name.parse().map_err(|e| format!("{e}"))?;
            vec![simulate(selected).map_err(|e| format!("simulation error: {e}"))?]
        }
        None => simulate_all().map_err(|e| format!("simulation error: {e}"))?,
    };

    debug!(reports = reports.len(), json, "printing reports");

    if json {
        let out = serde_json::to_string_pretty(&reports)
            .map_err(|e| format!("failed to serialize reports: {e}"))?;
        println!("{out}");
    } else {
        print!("{}", render_transcript(&reports));
    }

    Ok(())
}
