//! Movement and local avoidance for the seeker.
//!
//! There is no navigation graph: the seeker steers straight at its goal,
//! is pushed out of colliders, and escapes stalls with short scored detours.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod collide;
pub mod detour;
pub mod mover;

pub use collide::resolve_collisions;
pub use detour::{evaluate_position, pick_detour, score_candidates, Detour, DetourCandidate};
pub use mover::{reached, Mover, StepOutcome, MAX_SUBSTEPS};
