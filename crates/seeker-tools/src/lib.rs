//! Tooling primitives for the seeker.
//!
//! Engine-agnostic on purpose: hosts turn the trace stream and the sector
//! geometry into whatever their renderer or inspector needs.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod sector;
pub mod trace;

pub use sector::{GroundSector, SectorPose, SECTOR_LIFT, SECTOR_OPACITY_IDLE, SECTOR_OPACITY_SEEING};
pub use trace::{NullTraceSink, TraceEvent, TraceKind, TraceLog, TraceSink, VecTraceSink};
