//! Core types and feed engine for the AgendaPlan school-activity planner.
//!
//! This crate provides:
//! - `Event` and related types for planner events
//! - `ics` module for generating and parsing calendar-subscription feeds
//!
//! The feed engine is a pure transformation: an in-memory event list goes in,
//! a complete feed document comes out. Persistence, approval workflow, and
//! serving belong to the surrounding application, not to this crate.

pub mod constants;
pub mod error;
pub mod event;
pub mod ics;

pub use error::{PlannerError, PlannerResult};
pub use event::Event;
