//! The seeker pursuit agent.
//!
//! `SeekerAgent` ties together perception, the patrol route, the behavior
//! state machine, door interaction and the ground-pinned mover from
//! `seeker-nav`. The host calls [`SeekerAgent::update`] once per frame with a
//! view of its world; everything else is plain data.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod behavior;
pub mod doors;
pub mod perception;
pub mod route;

pub use agent::SeekerAgent;
pub use behavior::{search_ring, BehaviorState};
pub use doors::{nearest_closed_door, try_auto_open_door};
pub use perception::{LineOfSight, OccluderSet, Perception, PerceptionState, SightObserver};
pub use route::{spawn_point, PatrolRoute};

pub use seeker_core::{SeekerConfig, SeekerId, SeekerState, TickContext};
