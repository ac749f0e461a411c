//! Headless host for the seeker.
//!
//! Stands in for the game: loads a level description, animates doors,
//! moves a scripted target, and ticks a [`seeker::SeekerAgent`] against it.

#![forbid(unsafe_code)]

pub mod error;
pub mod level;
pub mod sim;
pub mod sink;
pub mod world;

pub use error::LevelError;
pub use level::{load_config, load_document, load_level, DoorSpec, LevelFile, TargetScript};
pub use sim::{Simulation, TickReport};
pub use sink::{JsonLinesSink, LogSink};
pub use world::{ScriptedTarget, SimWorld, DOOR_OPEN_ANGLE, DOOR_SPEED};
