//! War.
//!
//! Each draw both sides turn up their top card; the higher rank takes both.
//! Ties go to war: each side stakes face-down cards and turns up another,
//! repeating until the turned-up cards differ. A side that cannot fund a war
//! loses on the spot.

mod game;

pub use game::{DrawOutcome, Round, WarState, WarStatus};
