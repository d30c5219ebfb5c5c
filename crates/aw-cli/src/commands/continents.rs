use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use aw_core::Continent;

pub fn run() -> Result<(), String> {
    println!("  {}", "Continent Factories".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Continent", "Herbivore", "Weight", "Predator", "Power"]);

    for continent in Continent::ALL {
        let factory = continent.factory();
        let herbivore = factory.create_herbivore();
        let predator = factory.create_predator();
        table.add_row(vec![
            continent.display_name().to_string(),
            herbivore.name().to_string(),
            format!("{} kg", herbivore.weight()),
            predator.name().to_string(),
            predator.power().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} continents", Continent::ALL.len());

    Ok(())
}
