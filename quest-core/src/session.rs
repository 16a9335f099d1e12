//! GameSession - the primary public API for Detective Quest.
//!
//! A session owns the mansion, the suspect index and the clue ledger for
//! one playthrough. It is built from a `SessionConfig`, fed player commands
//! while exploring, and finally asked to judge an accusation.

use crate::case::{CaseFile, LayoutError};
use crate::explorer::{Arrival, Command, CommandError, Explorer, MoveError, Step};
use crate::index::{ClueIndex, IndexError};
use crate::ledger::ClueLedger;
use crate::verdict::{self, Judgment};
use crate::world::{Direction, RoomTree, RoomView};
use thiserror::Error;

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A player command that was rejected. The session is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Configuration for creating a new game session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// The case to play.
    pub case: CaseFile,
}

impl SessionConfig {
    /// A config for the reference mansion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Play a different case.
    pub fn with_case(mut self, case: CaseFile) -> Self {
        self.case = case;
        self
    }
}

/// A Detective Quest game session.
pub struct GameSession {
    title: String,
    tree: RoomTree,
    index: ClueIndex,
    ledger: ClueLedger,
    explorer: Explorer,
    last_arrival: Arrival,
}

impl GameSession {
    /// Build the mansion and the suspect index, then step into the first
    /// room.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let case = config.case;
        let mut tree = RoomTree::build(&case)?;
        let index = ClueIndex::from_case(&case)?;
        let mut ledger = ClueLedger::new();

        log::info!(
            "starting '{}': {} rooms, {} evidence links",
            case.title,
            tree.room_count(),
            index.len()
        );

        let (explorer, last_arrival) = Explorer::start(&mut tree, &mut ledger);

        Ok(Self {
            title: case.title,
            tree,
            index,
            ledger,
            explorer,
            last_arrival,
        })
    }

    /// Process one line of player input.
    pub fn player_action(&mut self, input: &str) -> Result<Step, TurnError> {
        let command = input
            .parse::<Command>()
            .inspect_err(|e| log::debug!("{e}"))?;
        Ok(self.apply(command)?)
    }

    /// Apply an already parsed command.
    pub fn apply(&mut self, command: Command) -> Result<Step, MoveError> {
        let step = self
            .explorer
            .apply(command, &mut self.tree, &mut self.ledger)
            .inspect_err(|e| log::debug!("{e}"))?;
        if let Step::Arrived(arrival) = &step {
            self.last_arrival = arrival.clone();
        }
        Ok(step)
    }

    /// Move in a direction.
    pub fn go(&mut self, direction: Direction) -> Result<Step, MoveError> {
        self.apply(Command::Move(direction))
    }

    /// End exploration.
    pub fn stop(&mut self) -> Result<Step, MoveError> {
        self.apply(Command::Stop)
    }

    /// The most recent arrival, including the entry into the first room.
    pub fn last_arrival(&self) -> &Arrival {
        &self.last_arrival
    }

    /// What the player sees in the room of `arrival`.
    pub fn view(&self, arrival: &Arrival) -> RoomView<'_> {
        self.tree.describe(arrival.room)
    }

    /// Name of the room the player is in, `None` once exploration stopped.
    pub fn current_room(&self) -> Option<&str> {
        self.explorer
            .current()
            .map(|id| self.tree.room(id).name())
    }

    pub fn is_exploring(&self) -> bool {
        !self.explorer.is_stopped()
    }

    /// Collected clues in ascending order.
    pub fn collected_clues(&self) -> Vec<&str> {
        self.ledger.in_order().collect()
    }

    /// Whether there is anything to base an accusation on.
    pub fn can_accuse(&self) -> bool {
        !self.ledger.is_empty()
    }

    /// Suspects known to the case.
    pub fn suspects(&self) -> Vec<&str> {
        self.index.suspects()
    }

    /// Judge an accusation against the collected clues.
    pub fn accuse(&self, suspect: &str) -> Judgment {
        verdict::judge(&self.ledger, &self.index, suspect)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tree(&self) -> &RoomTree {
        &self.tree
    }

    pub fn ledger(&self) -> &ClueLedger {
        &self.ledger
    }

    pub fn index(&self) -> &ClueIndex {
        &self.index
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }
}
