//! Pile system for card locations.
//!
//! ## Key Types
//!
//! - `PileId`: Names a Klondike pile (stock, waste, foundation, tableau)
//! - `Pile`: Ordered, owned card stack with the top at the end

pub mod pile;

pub use pile::{Pile, PileId};
