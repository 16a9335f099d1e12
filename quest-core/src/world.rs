//! The mansion: a fixed binary tree of rooms.
//!
//! Rooms live in an arena owned by `RoomTree` and refer to their children
//! by `RoomId`. The shape is decided once in `RoomTree::build` and never
//! changes afterwards; the only mutable state is each room's "clue
//! collected" flag, which only the explorer flips.

use crate::case::{CaseFile, LayoutError, RoomSpec};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a room inside its `RoomTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

impl RoomId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which exit to take out of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single room of the mansion.
#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    clue: Option<String>,
    collected: bool,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// Whether this room's clue has been collected. Always false for rooms
    /// without a clue.
    pub fn is_collected(&self) -> bool {
        self.clue.is_some() && self.collected
    }

    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// What a player sees when standing in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView<'a> {
    pub name: &'a str,
    pub clue: Option<&'a str>,
    pub collected: bool,
    /// Name of the room to the left, if there is one.
    pub left: Option<&'a str>,
    /// Name of the room to the right, if there is one.
    pub right: Option<&'a str>,
}

impl RoomView<'_> {
    pub fn has_exit(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left.is_some(),
            Direction::Right => self.right.is_some(),
        }
    }
}

/// The immutable layout of the mansion.
#[derive(Debug, Clone)]
pub struct RoomTree {
    rooms: Vec<Room>,
    root: RoomId,
}

impl RoomTree {
    /// Build the mansion described by a case file.
    pub fn build(case: &CaseFile) -> Result<Self, LayoutError> {
        case.validate()?;
        let mut rooms = Vec::with_capacity(case.mansion.room_count());
        let root = Self::place(&mut rooms, &case.mansion);
        Ok(Self { rooms, root })
    }

    /// Append `spec` and its subtree to the arena in pre-order.
    fn place(rooms: &mut Vec<Room>, spec: &RoomSpec) -> RoomId {
        let id = RoomId(rooms.len());
        rooms.push(Room {
            name: spec.name.clone(),
            clue: spec.clue_text().map(str::to_string),
            collected: false,
            left: None,
            right: None,
        });
        let left = spec.left.as_deref().map(|child| Self::place(rooms, child));
        let right = spec.right.as_deref().map(|child| Self::place(rooms, child));
        let room = &mut rooms[id.0];
        room.left = left;
        room.right = right;
        id
    }

    pub fn root(&self) -> RoomId {
        self.root
    }

    /// Number of rooms; never zero, the root always exists.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// Look a room up by name.
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.name == name).map(RoomId)
    }

    /// The child of `from` in `direction`, or `None` if there is no path
    /// that way.
    pub fn neighbor(&self, from: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(from).exit(direction)
    }

    /// Follow a sequence of moves from the root.
    ///
    /// Returns `None` as soon as a move has no path.
    pub fn follow(&self, path: &[Direction]) -> Option<RoomId> {
        path.iter()
            .try_fold(self.root, |at, &direction| self.neighbor(at, direction))
    }

    pub fn describe(&self, id: RoomId) -> RoomView<'_> {
        let room = self.room(id);
        RoomView {
            name: &room.name,
            clue: room.clue(),
            collected: room.is_collected(),
            left: room.left.map(|child| self.room(child).name()),
            right: room.right.map(|child| self.room(child).name()),
        }
    }

    /// Mark the clue in `id` as collected and hand it out.
    ///
    /// Returns `None` if the room has no clue or it was already taken, so
    /// each clue is handed out at most once per session.
    pub(crate) fn take_clue(&mut self, id: RoomId) -> Option<String> {
        let room = &mut self.rooms[id.0];
        match &room.clue {
            Some(clue) if !room.collected => {
                room.collected = true;
                Some(clue.clone())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mansion() -> RoomTree {
        RoomTree::build(&CaseFile::mansion()).unwrap()
    }

    #[test]
    fn test_build_reference_layout() {
        let tree = mansion();
        assert_eq!(tree.room_count(), 7);

        let hall = tree.describe(tree.root());
        assert_eq!(hall.name, "Hall de Entrada");
        assert_eq!(hall.clue, Some("Luvas sujas de sangue"));
        assert_eq!(hall.left, Some("Sala de Estar"));
        assert_eq!(hall.right, Some("Corredor"));
        assert!(!hall.collected);
    }

    #[test]
    fn test_follow_paths() {
        let tree = mansion();
        let at = |path: &[Direction]| tree.follow(path).map(|id| tree.room(id).name().to_string());

        assert_eq!(at(&[]).as_deref(), Some("Hall de Entrada"));
        assert_eq!(at(&[Direction::Left, Direction::Left]).as_deref(), Some("Biblioteca"));
        assert_eq!(at(&[Direction::Left, Direction::Right]).as_deref(), Some("Sala de Jantar"));
        assert_eq!(at(&[Direction::Right, Direction::Left]).as_deref(), Some("Cozinha"));
        assert_eq!(at(&[Direction::Right, Direction::Right]).as_deref(), Some("Jardim"));
        assert_eq!(at(&[Direction::Right, Direction::Right, Direction::Left]), None);
    }

    #[test]
    fn test_leaves_have_no_exits() {
        let tree = mansion();
        let jardim = tree.find("Jardim").unwrap();
        let view = tree.describe(jardim);
        assert!(!view.has_exit(Direction::Left));
        assert!(!view.has_exit(Direction::Right));
        assert_eq!(tree.neighbor(jardim, Direction::Left), None);
    }

    #[test]
    fn test_take_clue_only_once() {
        let mut tree = mansion();
        let root = tree.root();
        assert_eq!(tree.take_clue(root).as_deref(), Some("Luvas sujas de sangue"));
        assert!(tree.describe(root).collected);
        assert_eq!(tree.take_clue(root), None);
    }

    #[test]
    fn test_room_without_clue() {
        let case = CaseFile::new(
            "Bare",
            RoomSpec::new("Porch").with_clue("").with_left(RoomSpec::new("Shed")),
        );
        let mut tree = RoomTree::build(&case).unwrap();
        let root = tree.root();
        assert_eq!(tree.describe(root).clue, None);
        assert_eq!(tree.take_clue(root), None);
        assert!(!tree.room(root).is_collected());
    }

    #[test]
    fn test_build_rejects_invalid_case() {
        let case = CaseFile::new("Broken", RoomSpec::new("Hall")).with_buckets(0);
        assert!(RoomTree::build(&case).is_err());
    }
}
