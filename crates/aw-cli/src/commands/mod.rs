pub mod continents;
pub mod run;
