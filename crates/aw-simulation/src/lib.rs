//! Scripted feed-then-hunt simulation for Animal World.
//!
//! An [`AnimalWorld`] owns one herbivore and one predator built by a single
//! continent factory and walks them through a fixed, linear sequence of
//! stages. Observations are recorded in an [`EventLog`] and summarised in a
//! [`WorldReport`] once the world ends.

/// Error types for the simulation crate.
pub mod error;
/// Simulation event types and the event log.
pub mod event;
/// Final per-world reports and transcript rendering.
pub mod report;
/// Drivers that run whole continents end to end.
pub mod simulation;
/// The per-continent world and its stage machine.
pub mod world;

/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::EventLog`], [`event::SimEvent`], and [`event::SimEventKind`].
pub use event::{EventLog, SimEvent, SimEventKind};
/// Re-exports of [`report::WorldReport`] and [`report::render_transcript`].
pub use report::{WorldReport, render_transcript};
/// Re-exports of [`simulation::simulate`] and [`simulation::simulate_all`].
pub use simulation::{simulate, simulate_all};
/// Re-exports of [`world::AnimalWorld`] and [`world::Stage`].
pub use world::{AnimalWorld, Stage};
