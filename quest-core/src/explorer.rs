//! Exploration of the mansion.
//!
//! The explorer is a two-state machine: it is either standing in a room or
//! stopped. Player input is parsed into a `Command`, the command is applied
//! to the explorer, and the result is a `Step` describing what happened.
//! Entering a room whose clue has not been taken yet collects the clue into
//! the ledger before anything is shown to the player.

use crate::ledger::ClueLedger;
use crate::world::{Direction, RoomId, RoomTree};
use std::str::FromStr;
use thiserror::Error;

/// Input that could not be understood as a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unrecognized command: '{0}'")]
    Unrecognized(String),
}

/// A command that could be parsed but not carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("There is no room to the {direction} of {room}")]
    NoPath { direction: Direction, room: String },
    #[error("Exploration has already ended")]
    Stopped,
}

/// What the player asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Stop,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse one line of input. `e` goes left, `d` goes right and `s`
    /// stops, in either case; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "e" | "E" => Ok(Command::Move(Direction::Left)),
            "d" | "D" => Ok(Command::Move(Direction::Right)),
            "s" | "S" => Ok(Command::Stop),
            other => Err(CommandError::Unrecognized(other.to_string())),
        }
    }
}

/// State of the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerState {
    AtRoom(RoomId),
    Stopped,
}

/// How the clue of a room looked when the player arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueStatus {
    /// Collected by this very arrival.
    Found(String),
    /// Taken earlier; reported when the room is shown again.
    AlreadyCollected,
    None,
}

/// The result of entering a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    pub room: RoomId,
    pub clue: ClueStatus,
}

/// The result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Arrived(Arrival),
    Stopped,
}

/// Walks the room tree and fills the ledger.
#[derive(Debug, Clone)]
pub struct Explorer {
    state: ExplorerState,
    path: Vec<Direction>,
}

impl Explorer {
    /// Enter the root room, collecting its clue if it has one.
    pub fn start(tree: &mut RoomTree, ledger: &mut ClueLedger) -> (Self, Arrival) {
        let root = tree.root();
        let explorer = Self {
            state: ExplorerState::AtRoom(root),
            path: Vec::new(),
        };
        let arrival = enter(root, tree, ledger);
        (explorer, arrival)
    }

    pub fn state(&self) -> ExplorerState {
        self.state
    }

    /// The room the explorer stands in, `None` once stopped.
    pub fn current(&self) -> Option<RoomId> {
        match self.state {
            ExplorerState::AtRoom(room) => Some(room),
            ExplorerState::Stopped => None,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.state == ExplorerState::Stopped
    }

    /// Successful moves made since the root, in order.
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    /// Apply a command.
    ///
    /// A move with no room in that direction fails without changing
    /// anything. Once stopped, every command fails with `MoveError::Stopped`.
    pub fn apply(
        &mut self,
        command: Command,
        tree: &mut RoomTree,
        ledger: &mut ClueLedger,
    ) -> Result<Step, MoveError> {
        let ExplorerState::AtRoom(current) = self.state else {
            return Err(MoveError::Stopped);
        };

        match command {
            Command::Stop => {
                log::debug!("exploration stopped after {} moves", self.path.len());
                self.state = ExplorerState::Stopped;
                Ok(Step::Stopped)
            }
            Command::Move(direction) => {
                let Some(next) = tree.neighbor(current, direction) else {
                    return Err(MoveError::NoPath {
                        direction,
                        room: tree.room(current).name().to_string(),
                    });
                };
                log::debug!(
                    "moving {direction} from {} to {}",
                    tree.room(current).name(),
                    tree.room(next).name()
                );
                self.state = ExplorerState::AtRoom(next);
                self.path.push(direction);
                Ok(Step::Arrived(enter(next, tree, ledger)))
            }
        }
    }
}

fn enter(room: RoomId, tree: &mut RoomTree, ledger: &mut ClueLedger) -> Arrival {
    let clue = match tree.take_clue(room) {
        Some(clue) => {
            log::debug!("collected clue '{clue}' in {}", tree.room(room).name());
            ledger.insert(clue.as_str());
            ClueStatus::Found(clue)
        }
        None => ClueStatus::None,
    };
    Arrival { room, clue }
}
