//! Deterministic, engine-agnostic primitives for the seeker pursuit agent.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod error;
pub mod geom;
pub mod level;
pub mod state;
pub mod tick;
pub mod world;

pub use agent::SeekerId;
pub use config::{BehaviorConfig, DebugConfig, DoorConfig, MovementConfig, PerceptionConfig, SeekerConfig};
pub use error::ConfigError;
pub use geom::{Aabb, Ray};
pub use level::{Anchor, AnchorRole, Collider, Door};
pub use state::SeekerState;
pub use tick::TickContext;
pub use world::{SeekerWorldMut, SeekerWorldView, TargetSnapshot};

pub use glam::Vec3;
