//! Puzzle engine
//!
//! Word placement, selection tracking and the session that ties them
//! together.

pub mod placement;
pub mod selection;
mod session;

pub use placement::{GeneratedBoard, PlacedWord, PlacementConfig, WordPlacementEngine};
pub use selection::{SelectOutcome, SelectedCell, SelectionTracker};
pub use session::PuzzleSession;
