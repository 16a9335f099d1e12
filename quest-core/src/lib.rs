//! Detective Quest game engine.
//!
//! This crate provides:
//! - The fixed mansion layout the player walks through
//! - A clue ledger that keeps collected clues in sorted order
//! - A suspect index mapping each clue to the suspect it implicates
//! - Judgment of the final accusation
//! - A line-oriented text interface over any input and output
//!
//! # Quick Start
//!
//! ```ignore
//! use quest_core::{GameSession, SessionConfig};
//! use quest_core::world::Direction;
//!
//! let mut session = GameSession::new(SessionConfig::new())?;
//! session.go(Direction::Left)?;
//! session.go(Direction::Left)?;
//! session.stop()?;
//!
//! for clue in session.collected_clues() {
//!     println!("- {clue}");
//! }
//! let judgment = session.accuse("Profa Violeta");
//! println!("{}", judgment.verdict.message());
//! ```

pub mod case;
pub mod explorer;
pub mod headless;
pub mod index;
pub mod ledger;
pub mod session;
pub mod testing;
pub mod verdict;
pub mod world;

// Primary public API
pub use case::{CaseFile, LayoutError, RoomSpec};
pub use explorer::{Arrival, ClueStatus, Command, Explorer, Step};
pub use headless::{HeadlessGame, LineInput, PlayerInput};
pub use index::ClueIndex;
pub use ledger::ClueLedger;
pub use session::{GameSession, SessionConfig, SessionError, TurnError};
pub use testing::{ScriptedInput, TestHarness};
pub use verdict::{Judgment, Verdict};
pub use world::{Direction, RoomTree};
